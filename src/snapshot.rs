//! The persisted layout of a ledger.
//!
//! A snapshot is a JSON array of records shaped like
//! `{"id": 1, "text": "Coffee", "amount": -4.5, "date": "2025-10-16"}`.
//! The whole array is rewritten after every change to the ledger.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    transaction::{Transaction, TransactionId, format_date, parse_stored_date, validate_label},
};

/// The key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "transactions";

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotRecord {
    id: TransactionId,
    text: String,
    amount: f64,
    #[serde(default)]
    date: Option<String>,
}

/// Serialize `transactions` into a snapshot string, preserving their order.
///
/// # Errors
///
/// Returns an [Error::JSONSerializationError] if serialization fails.
pub fn encode(transactions: &[Transaction]) -> Result<String, Error> {
    let records: Vec<SnapshotRecord> = transactions
        .iter()
        .map(|transaction| SnapshotRecord {
            id: transaction.id,
            text: transaction.label.clone(),
            amount: transaction.amount,
            date: Some(format_date(transaction.date)),
        })
        .collect();

    serde_json::to_string(&records).map_err(|error| Error::JSONSerializationError(error.to_string()))
}

/// Parse a snapshot string back into transactions in their stored order.
///
/// Dates in the older locale formats, such as `M/D/YYYY` or `D.M.YYYY`, are
/// accepted. Records without a date, or with one that cannot be read, are
/// given `today`.
///
/// # Errors
///
/// Returns an [Error::CorruptSnapshot] if the text is not a valid snapshot,
/// a record has a blank label, or two records share an ID.
pub fn decode(text: &str, today: Date) -> Result<Vec<Transaction>, Error> {
    let records: Vec<SnapshotRecord> =
        serde_json::from_str(text).map_err(|error| Error::CorruptSnapshot(error.to_string()))?;

    let mut seen_ids = HashSet::with_capacity(records.len());
    let mut transactions = Vec::with_capacity(records.len());

    for record in records {
        if !seen_ids.insert(record.id) {
            return Err(Error::CorruptSnapshot(format!(
                "duplicate transaction ID {}",
                record.id
            )));
        }

        let label = validate_label(&record.text).map_err(|_| {
            Error::CorruptSnapshot(format!("transaction {} has an empty label", record.id))
        })?;

        let date = match record.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(date_text) => parse_stored_date(date_text).unwrap_or_else(|| {
                tracing::warn!(
                    "transaction {} has an unreadable date \"{date_text}\", using {today}",
                    record.id
                );
                today
            }),
        };

        transactions.push(Transaction {
            id: record.id,
            label,
            amount: record.amount,
            date,
        });
    }

    Ok(transactions)
}
