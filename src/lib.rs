//! Registro is a small web app for keeping track of personal financial records.
//!
//! Each record describes one transaction: when it happened, what it was for (its concept),
//! the amount, whether it was paid in cash, whether it was a payment or income, and how often
//! it recurs. Records live in an in-memory [RecordStore] for the lifetime of the server.
//!
//! This library provides a REST API that directly serves HTML pages, plus a small JSON API for
//! reading records and concepts.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod concept;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod record;
mod routing;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use record::{
    ConceptName, PaymentMethod, Period, Record, RecordDraft, RecordId, RecordStore, RecordType,
    load_seed_csv, parse_seed_csv,
};
pub use routing::build_router;
pub use timezone::get_local_offset;

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not install the terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a concept name.
    #[error("Concept cannot be empty")]
    EmptyConceptName,

    /// The amount field of a record form was left blank.
    #[error("Amount cannot be empty")]
    EmptyAmount,

    /// The amount of a record was not a finite number.
    #[error("{0} is not a valid amount")]
    InvalidAmount(String),

    /// The seed CSV had issues that prevented it from being parsed.
    #[error("Could not parse the CSV file: {0}")]
    InvalidCsv(String),

    /// The requested resource was not found, e.g. removing a concept that was never
    /// registered.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a record that does not exist.
    #[error("tried to update a record that is not in the store")]
    UpdateMissingRecord,

    /// Tried to delete a record that does not exist.
    #[error("tried to delete a record that is not in the store")]
    DeleteMissingRecord,

    /// Could not acquire the record store lock.
    #[error("could not acquire the record store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

fn invalid_timezone_fix(timezone: &str) -> String {
    format!(
        "Could not get local timezone \"{timezone}\". Check your server settings and \
        ensure the timezone has been set to valid, canonical timezone string"
    )
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &invalid_timezone_fix(&timezone),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for the alert container of an htmx request.
    pub(crate) fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::EmptyConceptName => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid concept", "Concept cannot be empty."),
            ),
            Error::EmptyAmount => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid amount", "Amount cannot be empty."),
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid amount",
                    &format!("{amount} is not a valid amount. Enter a number such as 12.30."),
                ),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error("Invalid Timezone Settings", &invalid_timezone_fix(&timezone)),
            ),
            Error::UpdateMissingRecord => (
                StatusCode::NOT_FOUND,
                Alert::error("Could not update record", "The record could not be found."),
            ),
            Error::DeleteMissingRecord => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not delete record",
                    "The record could not be found. \
                    Try refreshing the page to see if the record has already been deleted.",
                ),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        };

        alert.into_response_with_status(status_code)
    }
}
