use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt::Debug;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{Location, WeatherReport},
};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// WeatherAPI.com error code for "no matching location found".
const NO_MATCHING_LOCATION: i64 = 1006;

/// A source of current weather conditions.
///
/// One call, one attempt: implementations do not retry, cache, or
/// deduplicate. Callers re-invoke if they want another try.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherReport, FetchError>;
}

/// WeatherAPI.com client.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at a different endpoint. Used by tests to
    /// target a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/current.json", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        let parsed: WaResponse = serde_json::from_str(&body).map_err(|_| {
            FetchError::Provider(format!(
                "unexpected response from weather provider: {}",
                truncate_body(&body),
            ))
        })?;

        let observed_at = parsed
            .current
            .last_updated_epoch
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        debug!(city, temp_c = parsed.current.temp_c, "weather lookup succeeded");

        Ok(WeatherReport {
            location: Location {
                name: parsed.location.name,
                region: parsed.location.region,
                country: parsed.location.country,
            },
            temp_c: parsed.current.temp_c,
            condition: parsed.current.condition.text,
            observed_at,
        })
    }
}

/// Map an HTTP error response onto the fetch taxonomy, keeping the
/// provider's own message where one is present.
fn classify_failure(status: StatusCode, body: &str) -> FetchError {
    if let Ok(parsed) = serde_json::from_str::<WaErrorResponse>(body) {
        if parsed.error.code == NO_MATCHING_LOCATION {
            return FetchError::NotFound(parsed.error.message);
        }
        return FetchError::Provider(parsed.error.message);
    }

    FetchError::Provider(format!(
        "weather provider request failed with status {status}: {}",
        truncate_body(body),
    ))
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    #[serde(default)]
    region: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaErrorResponse {
    error: WaError,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multi-byte text cannot split.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...", &body[..cut])
}
