//! Forecast provider capability
//!
//! A deployment serves forecasts from exactly one provider, chosen at startup:
//! live upstream data scored by the threshold rule, or canned scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{AlertLevel, ConditionsSnapshot, Intensity};
use shared::types::{GpsCoordinates, LocationQuery};

use crate::config::{Config, ProviderMode};
use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;
use crate::services::{LiveForecastProvider, MockForecastProvider, SharedRng};

/// Everything a handler needs to answer for one location
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub alert_level: AlertLevel,
    pub intensity: Intensity,
    pub risk_score: u8,
    pub affected_districts: Vec<String>,
    pub track_summary: String,
    pub location_name: String,
    pub coordinates: GpsCoordinates,
    pub conditions: ConditionsSnapshot,
}

/// Source of per-location forecasts
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Short name reported by the health endpoint
    fn name(&self) -> &'static str;

    /// Produce a forecast for one location
    async fn forecast(&self, query: &LocationQuery) -> AppResult<ForecastReport>;
}

/// Build the provider selected by `provider.mode`
pub fn build_provider(config: &Config, rng: SharedRng) -> AppResult<Arc<dyn ForecastProvider>> {
    match config.provider.mode {
        ProviderMode::Live => {
            let api_key = config.weather.api_key.clone().ok_or_else(|| {
                AppError::Configuration("weather.api_key is not set".to_string())
            })?;
            let client = WeatherClient::with_base_url(api_key, config.weather.api_endpoint.clone());
            Ok(Arc::new(LiveForecastProvider::new(client)))
        }
        ProviderMode::Mock => Ok(Arc::new(MockForecastProvider::new(rng))),
    }
}
