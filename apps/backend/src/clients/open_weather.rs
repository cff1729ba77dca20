//! OpenWeatherMap current-weather client.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::{check_status, LookupError, WeatherInfo, WeatherLookup};

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainBlock,
    weather: Vec<Condition>,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(http: Client, base_url: Url, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn lookup_url(&self, city_name: &str, api_key: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Transport("base URL cannot hold a path".into()))?
            .pop_if_empty()
            .push("weather");
        url.query_pairs_mut()
            .append_pair("q", city_name)
            .append_pair("appid", api_key)
            .append_pair("units", "metric");
        Ok(url)
    }
}

pub fn parse_weather(body: &[u8]) -> Result<WeatherInfo, LookupError> {
    let resp: WeatherResponse =
        serde_json::from_slice(body).map_err(|e| LookupError::Schema(e.to_string()))?;
    let condition = resp
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Schema("empty weather array".into()))?;

    Ok(WeatherInfo {
        temperature: resp.main.temp,
        description: condition.description,
        humidity: resp.main.humidity,
        wind_speed: resp.wind.speed,
    })
}

#[async_trait]
impl WeatherLookup for OpenWeatherClient {
    async fn current_weather(&self, city_name: &str) -> Result<Option<WeatherInfo>, LookupError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(LookupError::NotConfigured);
        };
        let url = self.lookup_url(city_name, api_key)?;
        debug!(city = city_name, "weather lookup");

        let resp = self.http.get(url).send().await?;
        check_status(&resp)?;
        let body = resp.bytes().await?;
        parse_weather(&body).map(Some)
    }
}
