//! Record deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    alert::Alert,
    app_state::lock_store,
    record::{RecordId, RecordStore},
};

/// The state needed for deleting a record.
#[derive(Debug, Clone)]
pub struct DeleteRecordEndpointState {
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for DeleteRecordEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
        }
    }
}

/// Handle record deletion. Returns success alert or error.
pub async fn delete_record_endpoint(
    Path(record_id): Path<RecordId>,
    State(state): State<DeleteRecordEndpointState>,
) -> Response {
    let mut store = match lock_store(&state.record_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    if store.delete(record_id) {
        tracing::info!("Deleted record {record_id}");
        Alert::success("Record deleted successfully").into_response()
    } else {
        Error::DeleteMissingRecord.into_alert_response()
    }
}
