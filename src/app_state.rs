//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error, db::initialize, ledger::Ledger, stores::SQLiteSnapshotStore, timezone::local_today,
};

/// The ledger shared between request handlers.
///
/// Handlers lock the ledger for the whole of an operation, so changes are
/// applied one at a time in the order the locks are acquired.
pub type SharedLedger = Arc<Mutex<Ledger<SQLiteSnapshotStore>>>;

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions, saved to the database after every change.
    pub ledger: SharedLedger,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] from a SQLite database connection.
    ///
    /// This function will initialize the database and load any transactions
    /// saved by a previous run. `local_timezone` should be a valid, canonical
    /// timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized, the timezone is
    /// invalid, or the saved transactions cannot be read.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let today = local_today(local_timezone)?;
        let store = SQLiteSnapshotStore::new(db_connection);
        let ledger = Ledger::load(store, today)?;

        Ok(Self {
            ledger: Arc::new(Mutex::new(ledger)),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
