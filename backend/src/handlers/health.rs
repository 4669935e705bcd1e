//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct InfoResponse {
    pub system: String,
    pub status: String,
    pub location_support: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
}

/// Root banner
pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        system: "VaanMozhi ML Backend".to_string(),
        status: "Online".to_string(),
        location_support: "GPS (Lat/Lon) & Manual Search".to_string(),
    })
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.provider.name().to_string(),
    })
}
