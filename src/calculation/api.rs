//! The JSON endpoints for creating, listing and deleting calculations.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json,
    extract::{
        FromRef, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    calculation::{
        CalculationId, NewCalculation, create_calculation, delete_calculation,
        get_all_calculations,
    },
};

/// The state needed for the calculation endpoints.
#[derive(Debug, Clone)]
pub struct CalculationApiState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CalculationApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl CalculationApiState {
    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

/// A route handler for storing a new calculation, responds with the stored record and 201 Created.
///
/// The timestamp is set to the time the request was handled.
pub async fn create_calculation_endpoint(
    State(state): State<CalculationApiState>,
    payload: Result<Json<NewCalculation>, JsonRejection>,
) -> Response {
    let result = payload
        .map_err(|rejection| Error::InvalidRequest(rejection.body_text()))
        .and_then(|Json(new_calculation)| {
            let connection = state.connection()?;
            create_calculation(&new_calculation, OffsetDateTime::now_utc(), &connection)
        });

    match result {
        Ok(calculation) => {
            tracing::debug!("created calculation {}", calculation.id);
            (StatusCode::CREATED, Json(calculation)).into_response()
        }
        Err(error) => error.into_json_response(),
    }
}

/// A route handler for listing every stored calculation.
pub async fn list_calculations_endpoint(State(state): State<CalculationApiState>) -> Response {
    let result = state
        .connection()
        .and_then(|connection| get_all_calculations(&connection));

    match result {
        Ok(calculations) => (StatusCode::OK, Json(calculations)).into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// A route handler for deleting a calculation, responds with the deleted record.
///
/// Responds with 404 Not Found if the calculation does not exist.
pub async fn delete_calculation_endpoint(
    State(state): State<CalculationApiState>,
    calculation_id: Result<Path<CalculationId>, PathRejection>,
) -> Response {
    let result = calculation_id
        .map_err(|rejection| Error::InvalidRequest(rejection.body_text()))
        .and_then(|Path(calculation_id)| {
            let connection = state.connection()?;
            delete_calculation(calculation_id, &connection)
        });

    match result {
        Ok(calculation) => {
            tracing::debug!("deleted calculation {}", calculation.id);
            (StatusCode::OK, Json(calculation)).into_response()
        }
        Err(error) => error.into_json_response(),
    }
}
