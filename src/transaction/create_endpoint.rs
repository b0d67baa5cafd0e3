//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, SharedLedger, endpoints,
    timezone::local_today,
    transaction::{ValidationError, parse_amount, parse_date, validate_label},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The ledger the transaction is added to.
    pub ledger: SharedLedger,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// The amount is kept as text so that a blank or malformed amount can be
/// reported to the user rather than rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// Text describing the transaction.
    #[serde(default)]
    pub label: String,
    /// The signed amount in dollars, negative for expenses.
    #[serde(default)]
    pub amount: String,
    /// The date of the transaction as `YYYY-MM-DD`, today if omitted.
    #[serde(default)]
    pub date: Option<String>,
    /// The page to return to after the transaction is added.
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// A validated [TransactionForm].
#[derive(Debug, PartialEq)]
struct NewTransaction {
    label: String,
    amount: f64,
    date: Option<Date>,
}

impl TryFrom<&TransactionForm> for NewTransaction {
    type Error = ValidationError;

    fn try_from(form: &TransactionForm) -> Result<Self, Self::Error> {
        let label = validate_label(&form.label)?;
        let amount = parse_amount(&form.amount)?;
        let date = match form.date.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Some(parse_date(text)?),
            _ => None,
        };

        Ok(Self {
            label,
            amount,
            date,
        })
    }
}

/// Only pages of this app may be used as the redirect target.
fn redirect_target(redirect_url: Option<&str>) -> &'static str {
    match redirect_url {
        Some(endpoints::TRANSACTIONS_VIEW) => endpoints::TRANSACTIONS_VIEW,
        _ => endpoints::DASHBOARD_VIEW,
    }
}

/// A route handler for creating a new transaction.
///
/// Redirects to the page named in the form on success, or responds with an
/// alert explaining what was wrong with the input.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = match NewTransaction::try_from(&form) {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::debug!("rejected transaction form {form:?}: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    if let Err(error) = ledger.add(
        &new_transaction.label,
        new_transaction.amount,
        new_transaction.date,
        today,
    ) {
        tracing::error!("could not create transaction: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(redirect_target(form.redirect_url.as_deref()).to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        endpoints,
        test_utils::{
            assert_hx_redirect, assert_valid_html, get_test_ledger, parse_html_fragment,
        },
        transaction::{
            ValidationError,
            create_endpoint::{
                CreateTransactionState, NewTransaction, TransactionForm, redirect_target,
            },
            create_transaction_endpoint,
        },
    };

    fn get_test_state() -> CreateTransactionState {
        CreateTransactionState {
            ledger: get_test_ledger(),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn form(label: &str, amount: &str) -> TransactionForm {
        TransactionForm {
            label: label.to_owned(),
            amount: amount.to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state();
        let form = TransactionForm {
            date: Some("2025-10-01".to_owned()),
            ..form("  Coffee ", "-4.5")
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_hx_redirect(&response, endpoints::DASHBOARD_VIEW);
        let ledger = state.ledger.lock().unwrap();
        let transaction = ledger.get(1).expect("transaction 1 should exist");
        assert_eq!(transaction.label, "Coffee");
        assert_eq!(transaction.amount, -4.5);
        assert_eq!(transaction.date, date!(2025 - 10 - 01));
    }

    #[tokio::test]
    async fn redirects_to_transactions_page_when_asked() {
        let state = get_test_state();
        let form = TransactionForm {
            redirect_url: Some(endpoints::TRANSACTIONS_VIEW.to_owned()),
            ..form("Salary", "100")
        };

        let response = create_transaction_endpoint(State(state), Form(form)).await;

        assert_hx_redirect(&response, endpoints::TRANSACTIONS_VIEW);
    }

    #[tokio::test]
    async fn empty_label_responds_with_alert() {
        let state = get_test_state();

        let response =
            create_transaction_endpoint(State(state.clone()), Form(form("   ", "5"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("Please add a label for the transaction"),
            "got {text:?}"
        );
        assert!(state.ledger.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_amount_responds_with_alert() {
        let state = get_test_state();

        let response =
            create_transaction_endpoint(State(state.clone()), Form(form("Food", "abc"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.ledger.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_amount_is_rejected() {
        assert_eq!(
            NewTransaction::try_from(&form("Food", "")),
            Err(ValidationError::MissingAmount)
        );
    }

    #[test]
    fn blank_date_means_today() {
        let form = TransactionForm {
            date: Some(" ".to_owned()),
            ..form("Food", "-5")
        };

        assert_eq!(
            NewTransaction::try_from(&form).map(|new_transaction| new_transaction.date),
            Ok(None)
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        let form = TransactionForm {
            date: Some("16/10/2025".to_owned()),
            ..form("Food", "-5")
        };

        assert_eq!(
            NewTransaction::try_from(&form),
            Err(ValidationError::InvalidDate("16/10/2025".to_owned()))
        );
    }

    #[test]
    fn unknown_redirect_falls_back_to_dashboard() {
        assert_eq!(
            redirect_target(Some("https://example.com")),
            endpoints::DASHBOARD_VIEW
        );
        assert_eq!(redirect_target(None), endpoints::DASHBOARD_VIEW);
        assert_eq!(
            redirect_target(Some(endpoints::TRANSACTIONS_VIEW)),
            endpoints::TRANSACTIONS_VIEW
        );
    }
}
