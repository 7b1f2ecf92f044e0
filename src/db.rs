//! Creates the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{auth::create_user_table, trip::create_trip_table};

/// Create all of the application's tables in a single transaction.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an error if a table cannot be created or the transaction cannot be
/// committed.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_user_table(&transaction)?;
    create_trip_table(&transaction)?;

    transaction.commit()
}
