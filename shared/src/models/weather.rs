//! Weather data models

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Current conditions for one location, as reported by the upstream provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub humidity_pct: i32,
    pub wind_speed_kph: f64,
    pub precipitation_mm: f64,
    pub condition_text: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl WeatherSample {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }

    /// The measurement subset that goes back to the client
    pub fn conditions(&self) -> ConditionsSnapshot {
        ConditionsSnapshot {
            temperature_c: self.temperature_c,
            humidity_pct: self.humidity_pct,
            wind_speed_kph: self.wind_speed_kph,
            precipitation_mm: self.precipitation_mm,
            condition: self.condition_text.clone(),
        }
    }
}

/// Measurements echoed back alongside an alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsSnapshot {
    pub temperature_c: f64,
    pub humidity_pct: i32,
    pub wind_speed_kph: f64,
    pub precipitation_mm: f64,
    pub condition: String,
}
