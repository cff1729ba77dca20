use std::sync::Arc;

use reqwest::{Client, Url};

use super::env::{opt_var, var_or};
use crate::clients::{OpenWeatherClient, RestCountriesClient};
use crate::error::AppError;
use crate::services::enrichment::Enricher;

pub const DEFAULT_COUNTRY_API: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_WEATHER_API: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub country_base_url: Url,
    pub weather_base_url: Url,
    pub weather_api_key: Option<String>,
}

fn parse_url(name: &str, raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::config(format!("{name}='{raw}' is not a URL: {e}")))
}

impl EnrichmentConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            country_base_url: parse_url(
                "COUNTRY_API_BASE_URL",
                &var_or("COUNTRY_API_BASE_URL", DEFAULT_COUNTRY_API),
            )?,
            weather_base_url: parse_url(
                "WEATHER_API_BASE_URL",
                &var_or("WEATHER_API_BASE_URL", DEFAULT_WEATHER_API),
            )?,
            weather_api_key: opt_var("OPENWEATHER_API_KEY"),
        })
    }

    /// Build the enricher on a shared HTTP client.
    pub fn build_enricher(&self, http: Client) -> Enricher {
        Enricher::new(
            Arc::new(RestCountriesClient::new(
                http.clone(),
                self.country_base_url.clone(),
            )),
            Arc::new(OpenWeatherClient::new(
                http,
                self.weather_base_url.clone(),
                self.weather_api_key.clone(),
            )),
        )
    }
}
