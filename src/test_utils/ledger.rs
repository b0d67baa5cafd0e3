use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use time::macros::date;

use crate::{
    SharedLedger, db::initialize, ledger::Ledger, stores::SQLiteSnapshotStore,
    transaction::Transaction,
};

/// A ledger backed by an in-memory SQLite database.
pub(crate) fn get_test_ledger() -> SharedLedger {
    let connection = Connection::open_in_memory().unwrap();
    initialize(&connection).unwrap();
    let store = SQLiteSnapshotStore::new(connection);

    Arc::new(Mutex::new(Ledger::new(store)))
}

#[track_caller]
pub(crate) fn add_test_transaction(ledger: &SharedLedger, label: &str, amount: f64) -> Transaction {
    ledger
        .lock()
        .unwrap()
        .add(label, amount, None, date!(2025 - 10 - 16))
        .expect("Could not add test transaction")
}
