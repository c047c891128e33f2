use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, database_id::DatabaseId};

/// The ID of a stored calculation.
pub type CalculationId = DatabaseId;

/// Compute the billed cost for a pair of meter readings.
///
/// Negative differences (the evening reading is lower than the morning
/// reading) produce a negative cost.
pub fn compute_result(morning_reading: f64, evening_reading: f64, price: f64) -> f64 {
    (evening_reading - morning_reading) * price
}

/// A stored pair of meter readings and the cost billed for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    /// The ID assigned by the database.
    pub id: CalculationId,
    /// The meter reading taken in the morning.
    pub morning_reading: f64,
    /// The meter reading taken in the evening.
    pub evening_reading: f64,
    /// The price per unit.
    pub price: f64,
    /// The billed cost as it was submitted.
    pub result: f64,
    /// When the record was created.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// The data needed to create a [Calculation].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculation {
    /// The meter reading taken in the morning.
    pub morning_reading: f64,
    /// The meter reading taken in the evening.
    pub evening_reading: f64,
    /// The price per unit.
    pub price: f64,
    /// The billed cost. When missing, it is computed from the other fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
}

impl NewCalculation {
    /// The result to store for this calculation.
    ///
    /// A submitted result is kept as is, even if it disagrees with the
    /// readings and price.
    ///
    /// # Errors
    /// Returns [Error::InvalidReadings] if any field or the result is not a
    /// finite number. JSON has no representation for infinity or NaN.
    pub fn result(&self) -> Result<f64, Error> {
        let fields = [self.morning_reading, self.evening_reading, self.price];
        if !fields.iter().all(|field| field.is_finite()) {
            return Err(Error::InvalidReadings);
        }

        let computed = compute_result(self.morning_reading, self.evening_reading, self.price);

        let result = match self.result {
            Some(result) => {
                if result != computed {
                    tracing::warn!(
                        "submitted result {result} does not match the computed result {computed} for {self:?}"
                    );
                }

                result
            }
            None => computed,
        };

        if !result.is_finite() {
            tracing::warn!("rejecting calculation with non-finite result {result}: {self:?}");
            return Err(Error::InvalidReadings);
        }

        Ok(result)
    }
}

/// Create the calculation table if it does not exist yet.
pub fn create_calculation_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS calculation (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            morning_reading REAL NOT NULL,
            evening_reading REAL NOT NULL,
            price REAL NOT NULL,
            result REAL NOT NULL,
            timestamp TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Map a row with the columns id, morning reading, evening reading, price, result and timestamp.
pub fn map_row_to_calculation(row: &Row) -> Result<Calculation, rusqlite::Error> {
    Ok(Calculation {
        id: row.get(0)?,
        morning_reading: row.get(1)?,
        evening_reading: row.get(2)?,
        price: row.get(3)?,
        result: row.get(4)?,
        timestamp: row.get(5)?,
    })
}

/// Store a new calculation created at `timestamp`.
///
/// # Errors
/// Returns [Error::InvalidReadings] if the result is not a finite number, or
/// [Error::SqlError] if the database could not be written to.
pub fn create_calculation(
    calculation: &NewCalculation,
    timestamp: OffsetDateTime,
    connection: &Connection,
) -> Result<Calculation, Error> {
    let result = calculation.result()?;

    connection
        .query_row(
            "INSERT INTO calculation (morning_reading, evening_reading, price, result, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, morning_reading, evening_reading, price, result, timestamp",
            params![
                calculation.morning_reading,
                calculation.evening_reading,
                calculation.price,
                result,
                timestamp
            ],
            map_row_to_calculation,
        )
        .map_err(Error::from)
}

/// Get every stored calculation in the order they were created.
pub fn get_all_calculations(connection: &Connection) -> Result<Vec<Calculation>, Error> {
    connection
        .prepare(
            "SELECT id, morning_reading, evening_reading, price, result, timestamp
            FROM calculation ORDER BY id ASC",
        )?
        .query_map([], map_row_to_calculation)?
        .map(|calculation| calculation.map_err(Error::from))
        .collect()
}

/// Get a single calculation.
///
/// # Errors
/// Returns [Error::NotFound] if there is no calculation with the ID `id`.
pub fn get_calculation(id: CalculationId, connection: &Connection) -> Result<Calculation, Error> {
    connection
        .query_row(
            "SELECT id, morning_reading, evening_reading, price, result, timestamp
            FROM calculation WHERE id = ?1",
            params![id],
            map_row_to_calculation,
        )
        .map_err(Error::from)
}

/// Delete a calculation and return it.
///
/// # Errors
/// Returns [Error::NotFound] if there is no calculation with the ID `id`.
pub fn delete_calculation(
    id: CalculationId,
    connection: &Connection,
) -> Result<Calculation, Error> {
    connection
        .query_row(
            "DELETE FROM calculation WHERE id = ?1
            RETURNING id, morning_reading, evening_reading, price, result, timestamp",
            params![id],
            map_row_to_calculation,
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod compute_result_tests {
    use super::compute_result;

    #[test]
    fn multiplies_difference_by_price() {
        assert_eq!(compute_result(100.0, 150.0, 5.0), 250.0);
    }

    #[test]
    fn negative_difference_gives_negative_result() {
        assert_eq!(compute_result(150.0, 100.0, 2.0), -100.0);
    }

    #[test]
    fn matches_formula_for_many_inputs() {
        let inputs = [
            (0.0, 0.0, 0.0),
            (12.5, 20.25, 0.3),
            (-4.0, 8.0, 1.5),
            (1e6, 1e6 + 1.0, 1e-3),
            (7.0, 3.0, -2.0),
        ];

        for (morning, evening, price) in inputs {
            assert_eq!(
                compute_result(morning, evening, price),
                (evening - morning) * price,
                "compute_result({morning}, {evening}, {price})"
            );
        }
    }
}
