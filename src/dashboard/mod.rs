//! Dashboard module
//!
//! Provides an overview page with the balance, income and expense totals, the
//! most recent transactions and a chart of expenses by label.

mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
