//! Configuration management for the VaanMozhi alert relay
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with VAANMOZHI__ prefix
//!
//! Secrets (the upstream API key and the client key) have no defaults and
//! must come from the environment or a config file.

use axum::http::HeaderName;
use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream weather API configuration
    pub weather: WeatherConfig,

    /// Client key authorization
    pub auth: AuthConfig,

    /// Which forecast provider serves requests
    pub provider: ProviderConfig,

    /// Random source configuration
    #[serde(default)]
    pub random: RandomConfig,

    /// Request limits
    pub limits: LimitsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API base URL, without the `/current.json` suffix
    pub api_endpoint: String,

    /// Weather API key, required for the live provider
    pub api_key: Option<String>,

    /// Place queried when a request names no location
    pub default_query: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Header carrying the client key
    pub header_name: String,

    /// Expected client key value
    pub client_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub mode: ProviderMode,
}

/// Forecast provider selected at startup
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    /// Query the upstream weather API and score the result
    Live,
    /// Serve canned storm scenarios
    Mock,
}

impl std::fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderMode::Live => write!(f, "live"),
            ProviderMode::Mock => write!(f, "mock"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RandomConfig {
    /// Fixed seed; when unset every process start draws a fresh one
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    /// Maximum number of locations in one batch request
    pub max_batch_size: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("VAANMOZHI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "http://api.weatherapi.com/v1")?
            .set_default("weather.default_query", shared::DEFAULT_QUERY)?
            .set_default("auth.header_name", "X-Client-Key")?
            .set_default("provider.mode", "live")?
            .set_default("limits.max_batch_size", 25)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (VAANMOZHI__ prefix)
            .add_source(
                Environment::with_prefix("VAANMOZHI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> AppResult<()> {
        shared::validate_client_key(&self.auth.client_key)
            .map_err(|msg| AppError::Configuration(format!("auth.client_key: {}", msg)))?;

        if HeaderName::from_bytes(self.auth.header_name.as_bytes()).is_err() {
            return Err(AppError::Configuration(format!(
                "auth.header_name {:?} is not a valid HTTP header name",
                self.auth.header_name
            )));
        }

        if self.provider.mode == ProviderMode::Live {
            let has_key = self
                .weather
                .api_key
                .as_deref()
                .map(|key| !key.trim().is_empty())
                .unwrap_or(false);
            if !has_key {
                return Err(AppError::Configuration(
                    "weather.api_key is required when provider.mode is \"live\"".to_string(),
                ));
            }
        }

        if self.limits.max_batch_size == 0 {
            return Err(AppError::Configuration(
                "limits.max_batch_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}
