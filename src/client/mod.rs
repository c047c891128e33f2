//! The readings client: computes results from meter readings and keeps a
//! local copy of the stored calculations.
//!
//! The client reaches the readings API through [ReadingsApi]. The command
//! line client uses [HttpReadingsApi]; the pages served by this crate use
//! [LocalReadingsApi], which talks to the database directly.

mod http;
mod local;
mod state;

use async_trait::async_trait;

use crate::{
    Error,
    calculation::{Calculation, CalculationId, NewCalculation},
};

pub use http::{ClientConfig, HttpReadingsApi};
pub use local::LocalReadingsApi;
pub use state::{CalculatedResult, ReadingInputs, ReadingsClient, Submission, ViewMode};

/// The operations the readings API offers.
#[async_trait]
pub trait ReadingsApi: Send + Sync {
    /// Store a new calculation and return the stored record.
    async fn create_calculation(&self, calculation: &NewCalculation)
    -> Result<Calculation, Error>;

    /// Get every stored calculation.
    async fn list_calculations(&self) -> Result<Vec<Calculation>, Error>;

    /// Delete a calculation and return the deleted record.
    async fn delete_calculation(&self, id: CalculationId) -> Result<Calculation, Error>;
}
