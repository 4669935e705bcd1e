//! HTTP handlers for district endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use shared::districts::random_status;

use crate::error::{AppError, AppResult};
use crate::models::{DistrictListResponse, DistrictStatusResponse};
use crate::AppState;

/// List every monitored district, sorted
pub async fn list_districts(State(state): State<AppState>) -> Json<DistrictListResponse> {
    let districts: Vec<String> = state
        .districts
        .sorted()
        .iter()
        .map(|name| name.to_string())
        .collect();

    Json(DistrictListResponse {
        count: districts.len(),
        districts,
    })
}

/// Advisory status for one district.
///
/// The name must match the catalog spelling exactly.
pub async fn get_district(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<DistrictStatusResponse>> {
    let district = state
        .districts
        .find(&name)
        .ok_or_else(|| AppError::DistrictNotFound(name.clone()))?;

    let status = random_status(&mut *state.rng.lock().await);

    Ok(Json(DistrictStatusResponse {
        district: district.to_string(),
        status,
        timestamp: Local::now().naive_local(),
    }))
}
