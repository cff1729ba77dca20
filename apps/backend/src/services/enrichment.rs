//! Read-time enrichment of cities with country and weather data.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::clients::{
    CountryInfo, CountryLookup, LookupError, NoopLookup, WeatherInfo, WeatherLookup,
};
use crate::repos::cities::City;

/// A city plus the data joined from external sources. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCity {
    #[serde(flatten)]
    pub city: City,
    pub country_code2: String,
    pub country_code3: String,
    pub currency_code: String,
    pub weather: WeatherInfo,
}

#[derive(Clone)]
pub struct Enricher {
    countries: Arc<dyn CountryLookup>,
    weather: Arc<dyn WeatherLookup>,
}

impl Enricher {
    pub fn new(countries: Arc<dyn CountryLookup>, weather: Arc<dyn WeatherLookup>) -> Self {
        Self { countries, weather }
    }

    /// Enricher whose lookups always fall back to placeholders.
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoopLookup), Arc::new(NoopLookup))
    }

    /// Both lookups run concurrently; either failing only degrades its
    /// own fields.
    pub async fn enrich(&self, city: City) -> EnrichedCity {
        let (country, weather) = tokio::join!(
            self.countries.country_info(&city.country),
            self.weather.current_weather(&city.name),
        );

        let country = settle("country", &city.country, country).unwrap_or(CountryInfo {
            country_code2: String::new(),
            country_code3: String::new(),
            currency_code: None,
        });
        let weather = settle("weather", &city.name, weather).unwrap_or_else(WeatherInfo::unavailable);

        EnrichedCity {
            city,
            country_code2: country.country_code2,
            country_code3: country.country_code3,
            currency_code: country.currency_code.unwrap_or_default(),
            weather,
        }
    }

    /// Enrich every city concurrently; output order matches input order.
    pub async fn enrich_all(&self, cities: Vec<City>) -> Vec<EnrichedCity> {
        join_all(cities.into_iter().map(|c| self.enrich(c))).await
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::disabled()
    }
}

fn settle<T>(source: &'static str, key: &str, result: Result<Option<T>, LookupError>) -> Option<T> {
    match result {
        Ok(Some(v)) => Some(v),
        Ok(None) => {
            debug!(source, key, "lookup returned no match");
            None
        }
        Err(LookupError::NotConfigured) => {
            warn!(source, key, "lookup skipped: not configured");
            None
        }
        Err(e) => {
            warn!(source, key, error = %e, "lookup failed; using placeholder");
            None
        }
    }
}
