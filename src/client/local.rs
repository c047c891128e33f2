//! Reaching the readings API from inside the server.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    calculation::{
        Calculation, CalculationId, NewCalculation, create_calculation, delete_calculation,
        get_all_calculations,
    },
    client::ReadingsApi,
};

/// Serves the readings API from the application database, without going over HTTP.
#[derive(Debug, Clone)]
pub struct LocalReadingsApi {
    db_connection: Arc<Mutex<Connection>>,
}

impl LocalReadingsApi {
    /// Serve the API from `db_connection`.
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

#[async_trait]
impl ReadingsApi for LocalReadingsApi {
    async fn create_calculation(
        &self,
        calculation: &NewCalculation,
    ) -> Result<Calculation, Error> {
        let connection = self.connection()?;
        create_calculation(calculation, OffsetDateTime::now_utc(), &connection)
    }

    async fn list_calculations(&self) -> Result<Vec<Calculation>, Error> {
        let connection = self.connection()?;
        get_all_calculations(&connection)
    }

    async fn delete_calculation(&self, id: CalculationId) -> Result<Calculation, Error> {
        let connection = self.connection()?;
        delete_calculation(id, &connection)
    }
}
