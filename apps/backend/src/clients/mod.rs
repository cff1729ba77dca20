//! Outbound lookups used to enrich cities at read time.
//!
//! Both sources sit behind traits so services never see reqwest and tests
//! can substitute fakes. `Ok(None)` means the source answered but knows
//! nothing about the key.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod open_weather;
pub mod rest_countries;

pub use open_weather::OpenWeatherClient;
pub use rest_countries::RestCountriesClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryInfo {
    pub country_code2: String,
    pub country_code3: String,
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherInfo {
    pub temperature: f64,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl WeatherInfo {
    pub fn unavailable() -> Self {
        Self {
            temperature: 0.0,
            description: "Data unavailable".to_string(),
            humidity: 0.0,
            wind_speed: 0.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("unexpected response shape: {0}")]
    Schema(String),
    #[error("lookup not configured")]
    NotConfigured,
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LookupError::Schema(e.to_string())
        } else {
            LookupError::Transport(e.to_string())
        }
    }
}

#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn country_info(&self, country_name: &str) -> Result<Option<CountryInfo>, LookupError>;
}

#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn current_weather(&self, city_name: &str) -> Result<Option<WeatherInfo>, LookupError>;
}

/// Lookup that is never configured; used when enrichment is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLookup;

#[async_trait]
impl CountryLookup for NoopLookup {
    async fn country_info(&self, _country_name: &str) -> Result<Option<CountryInfo>, LookupError> {
        Err(LookupError::NotConfigured)
    }
}

#[async_trait]
impl WeatherLookup for NoopLookup {
    async fn current_weather(&self, _city_name: &str) -> Result<Option<WeatherInfo>, LookupError> {
        Err(LookupError::NotConfigured)
    }
}

/// Map a non-2xx response to `LookupError::Status`.
pub(crate) fn check_status(resp: &reqwest::Response) -> Result<(), LookupError> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(LookupError::Status(status.as_u16()))
    }
}
