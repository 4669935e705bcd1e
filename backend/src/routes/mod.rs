//! Route definitions for the VaanMozhi alert relay

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::client_key_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Forecasts (client key required)
        .nest("/forecast", forecast_routes(state))
        // Districts (public)
        .nest("/districts", district_routes())
}

/// Forecast routes (protected)
fn forecast_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_forecast))
        .route("/batch", post(handlers::get_forecast_batch))
        .route_layer(middleware::from_fn_with_state(state, client_key_middleware))
}

/// District routes (public)
fn district_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_districts))
        .route("/:name", get(handlers::get_district))
}
