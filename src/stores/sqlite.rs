//! A snapshot store backed by a key-value table in SQLite.

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, stores::SnapshotStore};

/// Stores snapshots in the `key_value` table of a SQLite database.
#[derive(Debug)]
pub struct SQLiteSnapshotStore {
    connection: Connection,
}

impl SQLiteSnapshotStore {
    /// Create a store that reads and writes through `connection`.
    ///
    /// The database must already have the `key_value` table, see
    /// [crate::initialize_db].
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

impl SnapshotStore for SQLiteSnapshotStore {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .query_row(
                "SELECT value FROM key_value WHERE key = :key",
                &[(":key", &key)],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // A single statement is atomic, so a failed write keeps the old value.
        self.connection.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        tracing::debug!("saved {} bytes under \"{key}\"", value.len());

        Ok(())
    }
}

/// Create the key-value table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_key_value_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        stores::{SQLiteSnapshotStore, SnapshotStore},
    };

    fn get_test_store() -> SQLiteSnapshotStore {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");
        SQLiteSnapshotStore::new(connection)
    }

    #[test]
    fn save_fails_without_table() {
        let connection = Connection::open_in_memory().unwrap();
        let mut store = SQLiteSnapshotStore::new(connection);

        assert!(store.save("transactions", "[]").is_err());
    }

    #[test]
    fn load_returns_none_for_missing_key() {
        let store = get_test_store();

        assert_eq!(store.load("transactions"), Ok(None));
    }

    #[test]
    fn save_then_load_returns_value() {
        let mut store = get_test_store();

        store.save("transactions", "[]").unwrap();

        assert_eq!(store.load("transactions"), Ok(Some("[]".to_owned())));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut store = get_test_store();

        store.save("transactions", "[1]").unwrap();
        store.save("transactions", "[1,2]").unwrap();

        assert_eq!(store.load("transactions"), Ok(Some("[1,2]".to_owned())));
    }

    #[test]
    fn keys_are_independent() {
        let mut store = get_test_store();

        store.save("a", "1").unwrap();
        store.save("b", "2").unwrap();

        assert_eq!(store.load("a"), Ok(Some("1".to_owned())));
        assert_eq!(store.load("b"), Ok(Some("2".to_owned())));
    }

    #[test]
    fn recreating_table_keeps_data() {
        let mut store = get_test_store();
        store.save("transactions", "[]").unwrap();

        // Re-running the table creation must not drop existing rows.
        super::create_key_value_table(&store.connection).unwrap();

        assert_eq!(store.load("transactions"), Ok(Some("[]".to_owned())));
    }
}
