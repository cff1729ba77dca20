//! REST Countries v3.1 client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{check_status, CountryInfo, CountryLookup, LookupError};

#[derive(Debug, Deserialize)]
struct CountryRecord {
    cca2: String,
    cca3: String,
    #[serde(default)]
    currencies: Option<Map<String, Value>>,
}

#[derive(Clone)]
pub struct RestCountriesClient {
    http: Client,
    base_url: Url,
}

impl RestCountriesClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// `{base}/name/{country}` with the name as a single encoded segment.
    pub fn lookup_url(&self, country_name: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Transport("base URL cannot hold a path".into()))?
            .pop_if_empty()
            .push("name")
            .push(country_name);
        Ok(url)
    }
}

/// First array element wins; an empty array means the country is unknown.
pub fn parse_countries(body: &[u8]) -> Result<Option<CountryInfo>, LookupError> {
    let records: Vec<CountryRecord> =
        serde_json::from_slice(body).map_err(|e| LookupError::Schema(e.to_string()))?;

    Ok(records.into_iter().next().map(|r| CountryInfo {
        country_code2: r.cca2,
        country_code3: r.cca3,
        // Document order: `preserve_order` keeps the upstream key sequence.
        currency_code: r
            .currencies
            .and_then(|c| c.into_iter().next().map(|(code, _)| code)),
    }))
}

#[async_trait]
impl CountryLookup for RestCountriesClient {
    async fn country_info(&self, country_name: &str) -> Result<Option<CountryInfo>, LookupError> {
        let url = self.lookup_url(country_name)?;
        debug!(%url, "country lookup");

        let resp = self.http.get(url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(&resp)?;
        let body = resp.bytes().await?;
        parse_countries(&body)
    }
}
