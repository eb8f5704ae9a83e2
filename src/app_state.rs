//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, record::RecordStore};

/// The state of the REST server.
///
/// The record store is created once per server process and shared by every handler that
/// needs it. Handlers pull out only the parts they need via their own state structs.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Madrid".
    pub local_timezone: String,

    /// The store that owns every record and the concept registry.
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl AppState {
    /// Create a new [AppState] that takes ownership of `record_store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Europe/Madrid".
    pub fn new(record_store: RecordStore, local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            record_store: Arc::new(Mutex::new(record_store)),
        }
    }
}

/// Lock the record store for the duration of one store operation.
///
/// # Errors
///
/// Returns an [Error::StoreLockError] if another thread panicked while holding the lock.
pub(crate) fn lock_store(
    record_store: &Mutex<RecordStore>,
) -> Result<MutexGuard<'_, RecordStore>, Error> {
    record_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire record store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
}
