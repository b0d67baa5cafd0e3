//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{AppState, Error, SharedLedger, transaction::TransactionId};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The ledger the transaction is removed from.
    ledger: SharedLedger,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Responds with an empty body so HTMX removes the list item, and asks the
/// client to refresh so the totals and chart are recomputed. Deleting a
/// transaction that does not exist is not an error.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    match ledger.remove(transaction_id) {
        Ok(true) => {}
        Ok(false) => tracing::debug!("transaction {transaction_id} was already deleted"),
        Err(error) => {
            tracing::error!("could not delete transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    }

    // The status code has to be 200 OK or HTMX will not delete the list item.
    (HxRefresh(true), Html("")).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        test_utils::{add_test_transaction, assert_hx_refresh, get_test_ledger},
        transaction::{delete_endpoint::DeleteTransactionState, delete_transaction_endpoint},
    };

    #[tokio::test]
    async fn deletes_transaction() {
        let ledger = get_test_ledger();
        let coffee = add_test_transaction(&ledger, "Coffee", -4.5);
        let salary = add_test_transaction(&ledger, "Salary", 100.0);
        let state = DeleteTransactionState {
            ledger: ledger.clone(),
        };

        let response = delete_transaction_endpoint(State(state), Path(coffee.id)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_hx_refresh(&response);
        let ledger = ledger.lock().unwrap();
        assert_eq!(ledger.get(coffee.id), None);
        assert_eq!(ledger.get(salary.id), Some(&salary));
    }

    #[tokio::test]
    async fn deleting_missing_transaction_is_ok() {
        let ledger = get_test_ledger();
        add_test_transaction(&ledger, "Coffee", -4.5);
        let state = DeleteTransactionState {
            ledger: ledger.clone(),
        };

        let response = delete_transaction_endpoint(State(state), Path(999)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ledger.lock().unwrap().len(), 1);
    }
}
