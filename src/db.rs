//! Sets up the application's database.

use rusqlite::Connection;

use crate::{Error, stores::create_key_value_table};

/// Create the tables the app needs in `connection`.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an error if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_key_value_table(connection)?;

    Ok(())
}
