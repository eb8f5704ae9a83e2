//! JSON endpoint for reading records.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    app_state::lock_store,
    record::{Record, RecordStore},
};

/// The state needed for listing records as JSON.
#[derive(Debug, Clone)]
pub struct RecordsApiState {
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for RecordsApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
        }
    }
}

/// A route handler that returns every record in insertion order.
pub async fn list_records_endpoint(
    State(state): State<RecordsApiState>,
) -> Result<Json<Vec<Record>>, Error> {
    let records = lock_store(&state.record_store)?.list_records();

    Ok(Json(records))
}
