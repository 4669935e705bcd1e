//! HTTP handlers for forecast endpoints
//!
//! Both handlers sit behind the client key middleware.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::Local;
use rand::RngExt;
use serde::Deserialize;
use shared::types::LocationQuery;

use crate::error::{AppError, AppResult};
use crate::models::{
    BatchForecastRequest, BatchForecastResponse, BatchPrediction, FailedPrediction,
    ForecastResponse,
};
use crate::AppState;

/// Query parameters for a single forecast
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub city: Option<String>,
}

/// Forecast for one location, by coordinates or place name
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ForecastResponse>> {
    let location = LocationQuery::from_parts(
        query.lat.as_deref(),
        query.lon.as_deref(),
        query.city.as_deref(),
        &state.config.weather.default_query,
    );

    let report = state.provider.forecast(&location).await?;
    let data_confidence: u8 = state.rng.lock().await.random_range(93..=98);

    Ok(Json(ForecastResponse::from_report(
        report,
        Local::now().naive_local(),
        data_confidence,
    )))
}

/// Forecasts for several locations.
///
/// Locations are processed one after another in request order. A failure for
/// one location is reported in its own entry and does not stop the rest.
pub async fn get_forecast_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchForecastRequest>, JsonRejection>,
) -> AppResult<Json<BatchForecastResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BatchProcessing(e.body_text()))?;
    let locations = request.locations.unwrap_or_default();

    shared::validate_batch_size(locations.len(), state.config.limits.max_batch_size)
        .map_err(|msg| AppError::BadRequest(msg.to_string()))?;

    let mut predictions = Vec::with_capacity(locations.len());
    for entry in &locations {
        let query = LocationQuery::from_json(entry, &state.config.weather.default_query);

        match state.provider.forecast(&query).await {
            Ok(report) => predictions.push(BatchPrediction::Summary(report.into())),
            Err(err) => {
                tracing::warn!(location = %query, "Batch entry failed: {}", err);
                predictions.push(BatchPrediction::Failed(FailedPrediction {
                    location: query.as_query(),
                    error: err.to_string(),
                }));
            }
        }
    }

    tracing::info!(
        requested = locations.len(),
        failed = predictions
            .iter()
            .filter(|p| matches!(p, BatchPrediction::Failed(_)))
            .count(),
        "Batch forecast complete"
    );

    Ok(Json(BatchForecastResponse { predictions }))
}
