//! Defines the core data model for transactions and the validation of user input.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The identifier the ledger assigns to a transaction.
pub type TransactionId = u64;

/// The format used to store and display transaction dates, e.g. "2025-10-16".
pub const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// Locale date formats written by older snapshots, tried in order.
///
/// Month-first is tried before day-first, so "1/2/2025" reads as January 2.
const LEGACY_DATE_FORMATS: [&[BorrowedFormatItem]; 4] = [
    // 10/16/2025
    format_description!("[month padding:none]/[day padding:none]/[year]"),
    // 16/10/2025
    format_description!("[day padding:none]/[month padding:none]/[year]"),
    // 16.10.2025
    format_description!("[day padding:none].[month padding:none].[year]"),
    // 2025/10/16
    format_description!("[year]/[month padding:none]/[day padding:none]"),
];

/// The reasons user input for a transaction can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The label was empty or only contained whitespace.
    #[error("Please add a label for the transaction")]
    EmptyLabel,

    /// No amount was provided.
    #[error("Please add an amount for the transaction")]
    MissingAmount,

    /// The amount could not be parsed as a finite number.
    #[error("\"{0}\" is not a valid number")]
    InvalidAmount(String),

    /// The date could not be parsed.
    #[error("\"{0}\" is not a valid date, use the format YYYY-MM-DD")]
    InvalidDate(String),
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created through [crate::Ledger::add], which assigns the ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, unique within its ledger.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub label: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values are income, negative values are expenses.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Whether the transaction takes money out, i.e. has a negative amount.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Check `label` and return it with surrounding whitespace removed.
///
/// # Errors
///
/// Returns [ValidationError::EmptyLabel] if `label` is empty after trimming.
pub fn validate_label(label: &str) -> Result<String, ValidationError> {
    let label = label.trim();

    if label.is_empty() {
        Err(ValidationError::EmptyLabel)
    } else {
        Ok(label.to_owned())
    }
}

/// Check that `amount` is usable as a transaction amount.
///
/// # Errors
///
/// Returns [ValidationError::InvalidAmount] if `amount` is NaN or infinite.
pub fn validate_amount(amount: f64) -> Result<f64, ValidationError> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount(amount.to_string()))
    }
}

/// Parse the text of an amount input field.
///
/// # Errors
///
/// Returns [ValidationError::MissingAmount] for blank input and
/// [ValidationError::InvalidAmount] for anything that is not a finite number.
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::MissingAmount);
    }

    text.parse::<f64>()
        .map_err(|_| ValidationError::InvalidAmount(text.to_owned()))
        .and_then(|amount| {
            validate_amount(amount).map_err(|_| ValidationError::InvalidAmount(text.to_owned()))
        })
}

/// Parse a date in the format `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [ValidationError::InvalidDate] if `text` is not a valid date.
pub fn parse_date(text: &str) -> Result<Date, ValidationError> {
    let text = text.trim();
    Date::parse(text, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(text.to_owned()))
}

/// Parse a date written as `YYYY-MM-DD` or in one of the older locale formats.
pub(crate) fn parse_stored_date(text: &str) -> Option<Date> {
    let text = text.trim();

    std::iter::once(DATE_FORMAT)
        .chain(LEGACY_DATE_FORMATS)
        .find_map(|format| Date::parse(text, format).ok())
}

/// Format `date` as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    // The format only uses components that every `Date` has.
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
