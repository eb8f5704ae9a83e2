//! The in-memory store that owns every record and the concept registry.

use std::collections::BTreeSet;

use crate::record::{ConceptName, Record, RecordDraft, RecordId, seed::initial_records};

/// Owns the collection of financial records and the set of known concepts.
///
/// All mutations go through the store so that record IDs stay unique and the concept
/// registry always covers the concepts in use. The concept registry is the union of:
/// - the concepts referenced by at least one record, and
/// - the concepts registered with [RecordStore::register_concept] that have not been
///   removed with [RecordStore::unregister_concept].
///
/// Registered concepts that no record uses survive updates and deletes.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    concepts: BTreeSet<ConceptName>,
    registered_concepts: BTreeSet<ConceptName>,
    last_id: RecordId,
}

impl RecordStore {
    /// Create a store holding the built-in example records.
    pub fn seeded() -> Self {
        let mut store = Self::default();

        for draft in initial_records() {
            store.create(draft);
        }

        store
    }

    /// Add a record built from `draft` and return it with its assigned ID.
    ///
    /// IDs start at 1 and are never reused, even after the newest record is deleted.
    pub fn create(&mut self, draft: RecordDraft) -> Record {
        self.last_id += 1;
        let record = Record::from_draft(self.last_id, draft);
        self.concepts.insert(record.concept.clone());

        self.records.push(record.clone());
        tracing::debug!("Created record {} ({})", record.id, record.concept);

        record
    }

    /// Register `name` so it can be offered before any record uses it.
    ///
    /// Registering a concept that is already known is a no-op. Returns the full concept set.
    pub fn register_concept(&mut self, name: ConceptName) -> Vec<String> {
        self.concepts.insert(name.clone());
        self.registered_concepts.insert(name);

        self.list_concepts()
    }

    /// Remove an explicit registration made with [RecordStore::register_concept].
    ///
    /// Returns `true` if `name` had been registered. A concept that a record still uses
    /// stays in the registry.
    pub fn unregister_concept(&mut self, name: &ConceptName) -> bool {
        let was_registered = self.registered_concepts.remove(name);

        if was_registered {
            self.recompute_concepts();
        }

        was_registered
    }

    /// Replace the record with `id` by `draft`, keeping its ID and position.
    ///
    /// Returns `None` without changing anything if there is no record with `id`.
    pub fn update(&mut self, id: RecordId, draft: RecordDraft) -> Option<Record> {
        let index = self.records.iter().position(|record| record.id == id)?;
        let record = Record::from_draft(id, draft);
        self.records[index] = record.clone();
        self.recompute_concepts();

        Some(record)
    }

    /// Remove the record with `id`.
    ///
    /// Returns `false` without changing anything if there is no record with `id`.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            return false;
        };

        self.records.remove(index);
        self.recompute_concepts();

        true
    }

    /// Get a copy of the record with `id`.
    pub fn get_record(&self, id: RecordId) -> Option<Record> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    /// A copy of every record in insertion order.
    pub fn list_records(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// A copy of the concept registry, sorted alphabetically.
    pub fn list_concepts(&self) -> Vec<String> {
        self.concepts
            .iter()
            .map(|concept| concept.as_ref().to_owned())
            .collect()
    }

    fn recompute_concepts(&mut self) {
        self.concepts = self
            .records
            .iter()
            .map(|record| record.concept.clone())
            .chain(self.registered_concepts.iter().cloned())
            .collect();
    }
}
