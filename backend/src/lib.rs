//! VaanMozhi alert relay - backend
//!
//! Serves simplified weather and cyclone alerts to the VaanMozhi mobile
//! client, either from live WeatherAPI data or from canned scenarios.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::districts::DistrictCatalog;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::error::AppResult;
use crate::middleware::{ClientAuthorizer, StaticKeyAuthorizer};
use crate::services::{ForecastProvider, SharedRng};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn ForecastProvider>,
    pub authorizer: Arc<dyn ClientAuthorizer>,
    pub districts: Arc<DistrictCatalog>,
    pub rng: SharedRng,
}

impl AppState {
    /// Wire up the state for a validated configuration
    pub fn from_config(config: Config) -> AppResult<Self> {
        config.validate()?;

        let rng = services::shared_rng(config.random.seed);
        let provider = services::build_provider(&config, rng.clone())?;
        let authorizer = StaticKeyAuthorizer::new(
            config.auth.header_name.clone(),
            config.auth.client_key.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            provider,
            authorizer: Arc::new(authorizer),
            districts: Arc::new(DistrictCatalog::default()),
            rng,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
