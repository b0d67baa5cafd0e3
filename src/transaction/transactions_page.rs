//! Defines the route handler for the page that lists every transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, SharedLedger, endpoints,
    html::{BUTTON_DELETE_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    timezone::local_today,
    transaction::{TRANSACTION_LIST_ID, transaction_form, transaction_list},
    view::{TransactionRow, transaction_rows},
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The ledger to list.
    ledger: SharedLedger,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    local_timezone: String,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render every transaction in the order they were added.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let rows = {
        let ledger = state
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)?;

        transaction_rows(ledger.list())
    };

    Ok(transactions_view(&rows, today).into_response())
}

/// The ID of the heading row above the transaction list.
pub(crate) const TRANSACTIONS_HEADER_ID: &str = "transactions-header";

/// The heading row with the transaction count and, if there are any
/// transactions, the clear button.
///
/// Set `out_of_band` when the header is sent alongside another fragment so
/// HTMX swaps it into the page by ID.
pub(crate) fn transactions_header(count: usize, out_of_band: bool) -> Markup {
    html!(
        div
            id=(TRANSACTIONS_HEADER_ID)
            hx-swap-oob=[out_of_band.then_some("true")]
            class="flex items-center justify-between"
        {
            h2 class="text-xl font-bold"
            {
                "Transactions "
                span class="text-base font-normal text-gray-500 dark:text-gray-400"
                {
                    "(" (count) ")"
                }
            }

            @if count > 0 {
                button
                    hx-post=(endpoints::CLEAR_TRANSACTIONS)
                    hx-confirm="Are you sure you want to delete every transaction? This cannot be undone."
                    hx-target={"#" (TRANSACTION_LIST_ID)}
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Clear all"
                }
            }
        }
    )
}

fn transactions_view(rows: &[TransactionRow], today: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-2xl space-y-6"
            {
                section class=(CARD_STYLE)
                {
                    h2 class="text-xl font-bold mb-4" { "Add transaction" }
                    (transaction_form(endpoints::TRANSACTIONS_VIEW, today))
                }

                section class="space-y-4"
                {
                    (transactions_header(rows.len(), false))

                    div id=(TRANSACTION_LIST_ID)
                    {
                        (transaction_list(rows, "No transactions yet. Add one above."))
                    }
                }
            }
        }
    );

    base("Transactions", &[], &content)
}
