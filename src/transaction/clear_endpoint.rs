//! Defines the endpoint for deleting every transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{AppState, Error, SharedLedger, alert::Alert, transaction::transactions_header};

/// The state needed to clear the ledger.
#[derive(Debug, Clone)]
pub struct ClearTransactionsState {
    /// The ledger to clear.
    ledger: SharedLedger,
}

impl FromRef<AppState> for ClearTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler that deletes every transaction.
///
/// Responds with a success alert that replaces the transaction list, and an
/// out-of-band header that resets the count and hides the clear button.
pub async fn clear_transactions_endpoint(State(state): State<ClearTransactionsState>) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    match ledger.clear() {
        Ok(count) => {
            let alert = Alert::success(
                "Transactions cleared",
                &format!("Deleted {count} transaction(s)."),
            );

            html!(
                (alert.into_html())
                (transactions_header(0, true))
            )
            .into_response()
        }
        Err(error) => {
            tracing::error!("could not clear transactions: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        test_utils::{
            add_test_transaction, assert_valid_html, get_test_ledger, parse_html_fragment,
        },
        transaction::{clear_endpoint::ClearTransactionsState, clear_transactions_endpoint},
    };

    #[tokio::test]
    async fn clears_every_transaction() {
        let ledger = get_test_ledger();
        add_test_transaction(&ledger, "Coffee", -4.5);
        add_test_transaction(&ledger, "Salary", 100.0);
        let state = ClearTransactionsState {
            ledger: ledger.clone(),
        };

        let response = clear_transactions_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Deleted 2 transaction(s)."), "got {text:?}");
        assert!(ledger.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn resets_header_count_and_hides_clear_button() {
        let ledger = get_test_ledger();
        add_test_transaction(&ledger, "Coffee", -4.5);
        let state = ClearTransactionsState { ledger };

        let response = clear_transactions_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let header = html
            .select(&Selector::parse("#transactions-header[hx-swap-oob=true]").unwrap())
            .next()
            .expect("No out-of-band transactions header found");
        let header_text = header.text().collect::<String>();
        assert!(header_text.contains("(0)"), "got {header_text:?}");
        assert!(
            header
                .select(&Selector::parse("button").unwrap())
                .next()
                .is_none(),
            "clear button should be hidden after clearing"
        );
    }

    #[tokio::test]
    async fn new_ids_continue_after_clear() {
        let ledger = get_test_ledger();
        add_test_transaction(&ledger, "Coffee", -4.5);
        let state = ClearTransactionsState {
            ledger: ledger.clone(),
        };

        clear_transactions_endpoint(State(state)).await;
        let added = add_test_transaction(&ledger, "Tea", -3.0);

        assert_eq!(added.id, 2);
    }
}
