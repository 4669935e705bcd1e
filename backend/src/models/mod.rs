//! Wire models for the VaanMozhi alert relay
//!
//! Re-exports models from the shared crate and adds the JSON response shapes
//! the mobile client reads. Field names are camelCase on the wire.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use shared::models::*;
use shared::types::format_measurement;

use crate::services::ForecastReport;

/// Single-location forecast response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub alert_level: AlertLevel,
    pub affected_districts: Vec<String>,
    pub track_summary: String,
    pub intensity: Intensity,
    pub timestamp: NaiveDateTime,
    pub location: LocationInfo,
    pub additional_info: AdditionalInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Human-readable measurements shown under the alert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfo {
    pub temp: String,
    pub humidity: String,
    pub wind_speed: String,
    pub precipitation: String,
    pub condition: String,
    pub data_confidence: u8,
    pub last_model_run: String,
}

impl ForecastResponse {
    pub fn from_report(report: ForecastReport, now: NaiveDateTime, data_confidence: u8) -> Self {
        let conditions = &report.conditions;
        let additional_info = AdditionalInfo {
            temp: format!("{}°C", format_measurement(conditions.temperature_c)),
            humidity: format!("{}%", conditions.humidity_pct),
            wind_speed: format!("{} km/h", format_measurement(conditions.wind_speed_kph)),
            precipitation: format!("{}mm", format_measurement(conditions.precipitation_mm)),
            condition: conditions.condition.clone(),
            data_confidence,
            last_model_run: now.format("%H:%M").to_string(),
        };

        Self {
            alert_level: report.alert_level,
            affected_districts: report.affected_districts,
            track_summary: report.track_summary,
            intensity: report.intensity,
            timestamp: now,
            location: LocationInfo {
                latitude: report.coordinates.latitude,
                longitude: report.coordinates.longitude,
                name: report.location_name,
            },
            additional_info,
        }
    }
}

/// Batch forecast request body
#[derive(Debug, Clone, Deserialize)]
pub struct BatchForecastRequest {
    /// Each entry is a place name, `{lat, lon}` or `{city}`
    #[serde(default)]
    pub locations: Option<Vec<Value>>,
}

/// Batch forecast response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchForecastResponse {
    pub predictions: Vec<BatchPrediction>,
}

/// One batch entry: a summary or the failure for that location alone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchPrediction {
    Summary(PredictionSummary),
    Failed(FailedPrediction),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub alert_level: AlertLevel,
    pub risk_score: u8,
    pub condition: String,
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
}

impl From<ForecastReport> for PredictionSummary {
    fn from(report: ForecastReport) -> Self {
        Self {
            location: report.location_name,
            latitude: report.coordinates.latitude,
            longitude: report.coordinates.longitude,
            alert_level: report.alert_level,
            risk_score: report.risk_score,
            condition: report.conditions.condition,
            temperature: format!("{}°C", format_measurement(report.conditions.temperature_c)),
            humidity: format!("{}%", report.conditions.humidity_pct),
            wind_speed: format!("{} km/h", format_measurement(report.conditions.wind_speed_kph)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedPrediction {
    pub location: String,
    pub error: String,
}

/// District listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictListResponse {
    pub districts: Vec<String>,
    pub count: usize,
}

/// Single district status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictStatusResponse {
    pub district: String,
    pub status: DistrictStatus,
    pub timestamp: NaiveDateTime,
}
