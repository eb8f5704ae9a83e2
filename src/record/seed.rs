//! Starting data for a new [RecordStore].

use std::io::Read;

use time::macros::date;

use crate::{
    Error,
    record::{ConceptName, PaymentMethod, Period, RecordDraft, RecordStore, RecordType},
};

/// The two example records every session starts with unless a seed file is given.
pub fn initial_records() -> [RecordDraft; 2] {
    [
        RecordDraft::build(
            date!(2025 - 01 - 06),
            ConceptName::new_unchecked("Compra de supermercado"),
            75.50,
        )
        .method(PaymentMethod::Cash)
        .record_type(RecordType::Payment)
        .period(Period::Organic),
        RecordDraft::build(
            date!(2025 - 01 - 07),
            ConceptName::new_unchecked("Ingreso freelance"),
            500.00,
        )
        .method(PaymentMethod::NonCash)
        .record_type(RecordType::Income)
        .period(Period::Monthly),
    ]
}

/// Parse seed records from CSV with the header `date,concept,amount,method,type,period`.
///
/// Enum columns accept the snake case form values (e.g. `non_cash`) as well as the Spanish
/// labels (e.g. `No efectivo`).
///
/// # Errors
///
/// Returns an [Error::InvalidCsv] describing the first row that could not be parsed.
pub fn parse_seed_csv(reader: impl Read) -> Result<Vec<RecordDraft>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv_reader
        .deserialize::<RecordDraft>()
        .enumerate()
        .map(|(index, row)| {
            // Line 1 is the header.
            row.map_err(|error| Error::InvalidCsv(format!("line {}: {error}", index + 2)))
        })
        .collect()
}

/// Create a store from the records in a seed CSV, assigning IDs in file order.
///
/// # Errors
///
/// Returns an [Error::InvalidCsv] if any row is malformed, in which case no store is created.
pub fn load_seed_csv(reader: impl Read) -> Result<RecordStore, Error> {
    let drafts = parse_seed_csv(reader)?;
    let mut store = RecordStore::default();

    for draft in drafts {
        store.create(draft);
    }

    tracing::info!(
        "Loaded {} records from the seed file",
        store.list_records().len()
    );

    Ok(store)
}
