//! Creates the tables for the application's database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, calculation::create_calculation_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// # Errors
/// Returns an error if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_calculation_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        assert_eq!(Ok(()), initialize(&connection));
        assert_eq!(Ok(()), initialize(&connection));
    }
}
