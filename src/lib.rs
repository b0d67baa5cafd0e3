//! Expense Tracker is a small web app for recording income and expenses.
//!
//! The core of the crate is the [Ledger], an ordered collection of
//! transactions that is saved to a [SnapshotStore] after every change and
//! derives the balance, income and expense totals and the per-label expense
//! breakdown. The rest of the crate serves the ledger as HTML pages.

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
mod dashboard;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod ledger;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod snapshot;
mod stores;
mod timezone;
mod transaction;
mod view;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, SharedLedger};
pub use db::initialize as initialize_db;
pub use ledger::{ExpenseBreakdown, Ledger, Totals};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use snapshot::SNAPSHOT_KEY;
pub use stores::{MemorySnapshotStore, SQLiteSnapshotStore, SnapshotStore};
pub use timezone::local_today;
pub use transaction::{Transaction, TransactionId, ValidationError};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
    /// The user's input for a transaction was rejected.
    ///
    /// The ledger is left unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The saved transactions could not be read back.
    ///
    /// The string describes what was wrong with the snapshot.
    #[error("the saved transactions could not be read: {0}")]
    CorruptSnapshot(String),

    /// An error occurred while serializing the transactions as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(#[from] rusqlite::Error),

    /// Could not acquire the ledger lock.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Every transaction ID has been used, so no more transactions can be added.
    #[error("no transaction IDs are left")]
    TransactionIdsExhausted,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::LedgerLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for HTMX requests.
    pub(crate) fn into_alert_response(self) -> Response {
        match self {
            Error::Validation(error) => Alert::error("Invalid transaction", &error.to_string())
                .into_response_with_status(StatusCode::BAD_REQUEST),
            Error::InvalidTimezoneError(timezone) => Alert::error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
