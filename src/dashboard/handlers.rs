//! Dashboard HTTP handlers and view rendering.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, SharedLedger,
    dashboard::charts::{
        DashboardChart, EXPENSE_CHART_ID, ExpenseChartData, chart_script, chart_view,
        expense_chart,
    },
    endpoints,
    html::{CARD_STYLE, HeadElement, LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    timezone::local_today,
    transaction::{TRANSACTION_LIST_ID, transaction_form, transaction_list},
    view::{AmountKind, SummaryView, TransactionRow, transaction_rows},
};

/// How many transactions the dashboard lists.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The ledger to summarize.
    pub ledger: SharedLedger,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Everything the dashboard shows, computed from one snapshot of the ledger.
struct DashboardData {
    summary: SummaryView,
    recent: Vec<TransactionRow>,
    chart: Option<DashboardChart>,
}

/// Display a page with an overview of the transactions.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let data = {
        let ledger = state
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)?;

        let chart_data = ExpenseChartData::from_breakdown(&ledger.expense_breakdown());

        DashboardData {
            summary: SummaryView::from(ledger.totals()),
            recent: transaction_rows(ledger.recent(RECENT_TRANSACTION_COUNT)),
            chart: (!chart_data.is_empty()).then(|| DashboardChart {
                id: EXPENSE_CHART_ID,
                options: expense_chart(&chart_data).to_string(),
            }),
        }
    };

    Ok(dashboard_view(&data, today).into_response())
}

fn summary_card(title: &str, amount: &str, amount_style: &str) -> Markup {
    html!(
        div class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p class={"text-2xl font-bold " (amount_style)} { (amount) }
        }
    )
}

fn chart_section(chart: Option<&DashboardChart>) -> Markup {
    html!(
        section class={"w-full " (CARD_STYLE)}
        {
            h2 class="text-xl font-bold mb-4" { "Expenses by label" }

            @match chart {
                Some(chart) => {
                    (chart_view(chart))
                }
                None => {
                    p class="py-6 text-center text-sm text-gray-500 dark:text-gray-400"
                    {
                        "The chart will show up here once you add some expenses."
                    }
                }
            }
        }
    )
}

fn dashboard_view(data: &DashboardData, today: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg space-y-6"
            {
                section id="summary" class="grid grid-cols-1 sm:grid-cols-3 gap-4"
                {
                    (summary_card("Balance", &data.summary.balance, ""))
                    (summary_card("Income", &data.summary.income, AmountKind::Income.css_class()))
                    (summary_card("Expense", &data.summary.expense, AmountKind::Expense.css_class()))
                }

                div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
                {
                    section class=(CARD_STYLE)
                    {
                        h2 class="text-xl font-bold mb-4" { "Add transaction" }
                        (transaction_form(endpoints::DASHBOARD_VIEW, today))
                    }

                    (chart_section(data.chart.as_ref()))
                }

                section class="space-y-4"
                {
                    div class="flex items-center justify-between"
                    {
                        h2 class="text-xl font-bold" { "Recent transactions" }
                        a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "View all" }
                    }

                    div id=(TRANSACTION_LIST_ID)
                    {
                        (transaction_list(&data.recent, "No transactions yet. Add one above."))
                    }
                }
            }
        }
    );

    let head_elements = match &data.chart {
        Some(chart) => vec![
            HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
            chart_script(chart),
        ],
        None => Vec::new(),
    };

    base("Dashboard", &head_elements, &content)
}
