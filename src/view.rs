//! Render-ready view models built from ledger data.
//!
//! These are plain data with every figure already formatted, so the HTML
//! views never do arithmetic or formatting themselves.

use crate::{
    html::format_currency,
    ledger::Totals,
    transaction::{Transaction, TransactionId, format_date},
};

/// Whether a row shows money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountKind {
    /// Zero or positive amounts.
    Income,
    /// Negative amounts.
    Expense,
}

impl AmountKind {
    /// The text colour classes for amounts of this kind.
    pub fn css_class(self) -> &'static str {
        match self {
            AmountKind::Income => "text-green-700 dark:text-green-300",
            AmountKind::Expense => "text-red-700 dark:text-red-300",
        }
    }
}

/// One transaction ready to be shown in a list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// The transaction's ID, used for the delete action.
    pub id: TransactionId,
    /// The transaction's label.
    pub label: String,
    /// The date as `YYYY-MM-DD`.
    pub date: String,
    /// The signed amount, e.g. `+$12.30` or `-$5.00`.
    pub amount_text: String,
    /// Whether the amount is income or an expense.
    pub kind: AmountKind,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        let kind = if transaction.is_expense() {
            AmountKind::Expense
        } else {
            AmountKind::Income
        };
        let sign = match kind {
            AmountKind::Income => '+',
            AmountKind::Expense => '-',
        };

        Self {
            id: transaction.id,
            label: transaction.label.clone(),
            date: format_date(transaction.date),
            amount_text: format!("{sign}{}", format_currency(transaction.amount.abs())),
            kind,
        }
    }
}

/// Build the rows for `transactions`, keeping their order.
pub fn transaction_rows<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<TransactionRow> {
    transactions.into_iter().map(TransactionRow::from).collect()
}

/// The summary figures ready to be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    /// The balance, e.g. `$85.00` or `-$12.00`.
    pub balance: String,
    /// The income, e.g. `+$100.00`.
    pub income: String,
    /// The expenses, e.g. `-$15.00`.
    pub expense: String,
}

impl From<Totals> for SummaryView {
    fn from(totals: Totals) -> Self {
        Self {
            balance: format_currency(totals.balance),
            income: format!("+{}", format_currency(totals.income)),
            expense: format!("-{}", format_currency(totals.expense)),
        }
    }
}
