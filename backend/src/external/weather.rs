//! Weather API client for fetching current conditions
//!
//! Integrates with the WeatherAPI.com `current.json` endpoint, which accepts
//! both place names and `lat,lon` pairs through the same `q` parameter.

use reqwest::Client;
use serde::Deserialize;

use shared::models::WeatherSample;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI response for current conditions
#[derive(Debug, Deserialize)]
struct WACurrentResponse {
    location: WALocation,
    current: WACurrent,
}

#[derive(Debug, Deserialize)]
struct WALocation {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WACurrent {
    temp_c: f64,
    humidity: i32,
    wind_kph: f64,
    precip_mm: f64,
    condition: WACondition,
}

#[derive(Debug, Deserialize)]
struct WACondition {
    text: String,
}

/// WeatherAPI error body, e.g. `{"error": {"code": 1006, "message": "..."}}`
#[derive(Debug, Deserialize)]
struct WAErrorResponse {
    error: WAError,
}

#[derive(Debug, Deserialize)]
struct WAError {
    message: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the public WeatherAPI endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "http://api.weatherapi.com/v1".to_string())
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current conditions for a place name or `lat,lon` pair
    pub async fn fetch_current(&self, query: &str) -> AppResult<WeatherSample> {
        let url = format!("{}/current.json", self.base_url);
        tracing::debug!(query, "Requesting current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !status.is_success() {
            let message = upstream_error_message(&body);
            tracing::warn!(query, %status, ?message, "Weather API rejected query");
            return Err(AppError::LocationNotFound { message });
        }

        parse_current(&body)
    }
}

/// Parse a successful `current.json` body into a sample
fn parse_current(body: &str) -> AppResult<WeatherSample> {
    let data: WACurrentResponse =
        serde_json::from_str(body).map_err(|e| AppError::UpstreamParse(e.to_string()))?;

    Ok(WeatherSample {
        temperature_c: data.current.temp_c,
        humidity_pct: data.current.humidity,
        wind_speed_kph: data.current.wind_kph,
        precipitation_mm: data.current.precip_mm,
        condition_text: data.current.condition.text,
        location_name: data.location.name,
        latitude: data.location.lat,
        longitude: data.location.lon,
    })
}

/// Pull `error.message` out of an error body, if it has one
fn upstream_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<WAErrorResponse>(body)
        .ok()
        .and_then(|e| e.error.message)
}
