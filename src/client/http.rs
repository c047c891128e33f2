//! Reaching the readings API over HTTP.

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::{
    Error,
    calculation::{Calculation, CalculationId, NewCalculation},
    client::ReadingsApi,
    endpoints::{self, format_endpoint},
};

/// Settings for reaching the readings API, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// The scheme, host and port of the readings API, e.g. "http://localhost:5000".
    pub base_url: String,
}

impl ClientConfig {
    /// The environment variable that holds the base URL.
    pub const BASE_URL_VAR: &'static str = "READINGS_BASE_URL";

    /// Create a config for the API at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Create config from environment variables.
    ///
    /// - `READINGS_BASE_URL`: Required base URL of the readings API
    ///
    /// # Errors
    /// Returns [Error::MissingConfig] if the base URL is not set or is empty.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(Self::BASE_URL_VAR) {
            Ok(base_url) if !base_url.trim().is_empty() => Ok(Self::new(base_url.trim())),
            _ => Err(Error::MissingConfig(Self::BASE_URL_VAR)),
        }
    }
}

/// Calls the readings API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReadingsApi {
    client: Client,
    base_url: String,
}

impl HttpReadingsApi {
    /// Create a client for the API described by `config`.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Turn any non-2xx response into [Error::ApiStatus].
async fn ensure_success(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(Error::ApiStatus {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ReadingsApi for HttpReadingsApi {
    async fn create_calculation(
        &self,
        calculation: &NewCalculation,
    ) -> Result<Calculation, Error> {
        let response = self
            .client
            .post(self.url(endpoints::CALCULATIONS_API))
            .json(calculation)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn list_calculations(&self) -> Result<Vec<Calculation>, Error> {
        let response = self
            .client
            .get(self.url(endpoints::CALCULATIONS_API))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn delete_calculation(&self, id: CalculationId) -> Result<Calculation, Error> {
        let response = self
            .client
            .delete(self.url(&format_endpoint(endpoints::CALCULATION_API, id)))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }
}
