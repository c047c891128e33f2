use serde::{Deserialize, Serialize};

use crate::{
    Error,
    calculation::{Calculation, CalculationId, NewCalculation, compute_result},
    client::ReadingsApi,
    pagination::{Page, get_page},
};

/// Which of the three panels the client is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The form for entering readings.
    #[default]
    Form,
    /// The result of the last calculation.
    Result,
    /// The table of stored calculations.
    Table,
}

/// The raw text of the three form inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingInputs {
    /// The morning reading as typed.
    #[serde(default)]
    pub morning: String,
    /// The evening reading as typed.
    #[serde(default)]
    pub evening: String,
    /// The price per unit as typed.
    #[serde(default)]
    pub price: String,
}

impl ReadingInputs {
    /// Parse the inputs as the morning reading, evening reading and price.
    ///
    /// # Errors
    /// Returns [Error::InvalidReadings] if any input is not a finite number.
    pub fn parse(&self) -> Result<(f64, f64, f64), Error> {
        match (
            parse_number(&self.morning),
            parse_number(&self.evening),
            parse_number(&self.price),
        ) {
            (Some(morning), Some(evening), Some(price)) => Ok((morning, evening, price)),
            _ => Err(Error::InvalidReadings),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Whether a calculated result has made it to the readings API.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The result has not been sent yet.
    Pending,
    /// The API stored the result under this ID.
    Saved(CalculationId),
    /// The API could not store the result.
    Failed(String),
}

/// The result shown after a successful calculation.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct CalculatedResult {
    pub morning_reading: f64,
    pub evening_reading: f64,
    pub price: f64,
    pub result: f64,
    pub submission: Submission,
}

/// The client side of the readings service.
///
/// Holds the form inputs, the last calculated result, and the calculations
/// fetched from the API. Calculations are paged locally.
pub struct ReadingsClient<A> {
    api: A,
    inputs: ReadingInputs,
    result: Option<CalculatedResult>,
    calculations: Vec<Calculation>,
    view: ViewMode,
    current_page: usize,
    page_size: usize,
}

impl<A: ReadingsApi> ReadingsClient<A> {
    /// Create a client showing the empty form.
    pub fn new(api: A, page_size: usize) -> Self {
        Self {
            api,
            inputs: ReadingInputs::default(),
            result: None,
            calculations: Vec::new(),
            view: ViewMode::Form,
            current_page: 1,
            page_size,
        }
    }

    /// The panel currently shown.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// The form inputs as typed.
    pub fn inputs(&self) -> &ReadingInputs {
        &self.inputs
    }

    /// Replace the form inputs.
    pub fn set_inputs(&mut self, inputs: ReadingInputs) {
        self.inputs = inputs;
    }

    /// The last calculated result, if one is shown.
    pub fn result(&self) -> Option<&CalculatedResult> {
        self.result.as_ref()
    }

    /// Every calculation known to the client.
    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    /// The 1-based page of the table.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Compute the result for the current inputs, show it, and send it to the API.
    ///
    /// The result is shown even if the API call fails; its
    /// [submission](CalculatedResult::submission) records what happened.
    /// On success the stored record is appended to the local list.
    ///
    /// # Errors
    /// Returns [Error::InvalidReadings] without calling the API if any input
    /// is not a number or the result overflows. Returns
    /// [Error::InvalidRequest] if the form is not being shown.
    pub async fn calculate(&mut self) -> Result<&CalculatedResult, Error> {
        if self.view != ViewMode::Form {
            return Err(Error::InvalidRequest(
                "go back to the form before calculating".to_owned(),
            ));
        }

        let (morning_reading, evening_reading, price) = self.inputs.parse()?;
        let result = compute_result(morning_reading, evening_reading, price);
        if !result.is_finite() {
            return Err(Error::InvalidReadings);
        }

        let mut calculated = CalculatedResult {
            morning_reading,
            evening_reading,
            price,
            result,
            submission: Submission::Pending,
        };
        self.result = Some(calculated.clone());
        self.view = ViewMode::Result;

        let new_calculation = NewCalculation {
            morning_reading,
            evening_reading,
            price,
            result: Some(result),
        };

        calculated.submission = match self.api.create_calculation(&new_calculation).await {
            Ok(calculation) => {
                let id = calculation.id;
                self.calculations.push(calculation);
                Submission::Saved(id)
            }
            Err(error) => {
                tracing::error!("There was a problem saving the calculation: {error}");
                Submission::Failed(error.to_string())
            }
        };

        Ok(&*self.result.insert(calculated))
    }

    /// Reset the form inputs. The result and table are left alone.
    pub fn clear(&mut self) {
        self.inputs = ReadingInputs::default();
    }

    /// Replace the local calculations with the ones stored by the API.
    ///
    /// On failure the error is logged and the local calculations are kept.
    pub async fn load(&mut self) -> Result<(), Error> {
        match self.api.list_calculations().await {
            Ok(calculations) => {
                self.calculations = calculations;
                self.clamp_current_page();
                Ok(())
            }
            Err(error) => {
                tracing::error!("There was a problem loading the calculations: {error}");
                Err(error)
            }
        }
    }

    /// Delete a calculation through the API and drop it from the local list.
    ///
    /// On failure the error is logged and the local calculations are kept.
    pub async fn delete(&mut self, id: CalculationId) -> Result<Calculation, Error> {
        match self.api.delete_calculation(id).await {
            Ok(deleted) => {
                self.calculations.retain(|calculation| calculation.id != id);
                self.clamp_current_page();
                Ok(deleted)
            }
            Err(error) => {
                tracing::error!("There was a problem deleting calculation {id}: {error}");
                Err(error)
            }
        }
    }

    /// Switch to the table of calculations.
    ///
    /// Returns `false` and stays put while a result is being shown.
    pub fn show_data(&mut self) -> bool {
        if self.result.is_some() || self.view != ViewMode::Form {
            return false;
        }

        self.view = ViewMode::Table;
        true
    }

    /// Return to the form, discarding any shown result. The inputs are kept.
    pub fn go_back(&mut self) {
        self.result = None;
        self.view = ViewMode::Form;
    }

    /// The calculations on the current page.
    pub fn page(&self) -> Page<'_, Calculation> {
        get_page(&self.calculations, self.current_page, self.page_size)
    }

    /// Move to page `page`, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
        self.clamp_current_page();
    }

    /// Move to the next page if there is one.
    pub fn next_page(&mut self) -> bool {
        if !self.page().has_next {
            return false;
        }

        self.current_page += 1;
        true
    }

    /// Move to the previous page if there is one.
    pub fn previous_page(&mut self) -> bool {
        if !self.page().has_previous {
            return false;
        }

        self.current_page -= 1;
        true
    }

    fn clamp_current_page(&mut self) {
        let last_page = self.page().page_count.max(1);

        if self.current_page > last_page {
            self.current_page = last_page;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_api {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use time::macros::datetime;

    use crate::{
        Error,
        calculation::{Calculation, CalculationId, NewCalculation},
        client::ReadingsApi,
    };

    /// An in-memory readings API that counts calls and can be told to fail.
    #[derive(Default)]
    pub(crate) struct FakeReadingsApi {
        pub(crate) calculations: Mutex<Vec<Calculation>>,
        pub(crate) calls: AtomicUsize,
        pub(crate) fail: bool,
    }

    impl FakeReadingsApi {
        pub(crate) fn with_calculations(count: usize) -> Self {
            let calculations = (1..=count)
                .map(|id| Calculation {
                    id: id as CalculationId,
                    morning_reading: id as f64,
                    evening_reading: id as f64 + 1.0,
                    price: 1.0,
                    result: 1.0,
                    timestamp: datetime!(2025-07-20 08:00 UTC),
                })
                .collect();

            Self {
                calculations: Mutex::new(calculations),
                ..Default::default()
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn record_call(&self) -> Result<(), Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.fail {
                Err(Error::Http("connection refused".to_owned()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ReadingsApi for FakeReadingsApi {
        async fn create_calculation(
            &self,
            calculation: &NewCalculation,
        ) -> Result<Calculation, Error> {
            self.record_call()?;
            let mut calculations = self.calculations.lock().unwrap();
            let id = calculations.last().map_or(1, |last| last.id + 1);
            let created = Calculation {
                id,
                morning_reading: calculation.morning_reading,
                evening_reading: calculation.evening_reading,
                price: calculation.price,
                result: calculation.result()?,
                timestamp: datetime!(2025-07-20 08:00 UTC),
            };
            calculations.push(created.clone());

            Ok(created)
        }

        async fn list_calculations(&self) -> Result<Vec<Calculation>, Error> {
            self.record_call()?;
            Ok(self.calculations.lock().unwrap().clone())
        }

        async fn delete_calculation(&self, id: CalculationId) -> Result<Calculation, Error> {
            self.record_call()?;
            let mut calculations = self.calculations.lock().unwrap();
            let position = calculations
                .iter()
                .position(|calculation| calculation.id == id)
                .ok_or(Error::ApiStatus {
                    status: 404,
                    body: r#"{"error":"Calculation not found"}"#.to_owned(),
                })?;

            Ok(calculations.remove(position))
        }
    }
}
