//! Common types used across the relay

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Place queried when a request names no location at all
pub const DEFAULT_QUERY: &str = "Chennai";

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Chennai city centre, used as the reference point for place-name queries
/// that cannot be geocoded locally
pub const CHENNAI: GpsCoordinates = GpsCoordinates::new(13.0827, 80.2707);

/// A location as the upstream weather provider understands it.
///
/// The provider takes a single `q` parameter for both forms, so coordinates
/// are kept as the caller wrote them and joined verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    Coordinates { lat: String, lon: String },
    Place(String),
}

impl LocationQuery {
    /// Build a query from the `lat`, `lon` and `city` request parameters.
    ///
    /// Coordinates win when both are present and non-empty, then the city,
    /// then `default`.
    pub fn from_parts(
        lat: Option<&str>,
        lon: Option<&str>,
        city: Option<&str>,
        default: &str,
    ) -> Self {
        fn non_empty(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        match (non_empty(lat), non_empty(lon)) {
            (Some(lat), Some(lon)) => Self::Coordinates {
                lat: lat.to_string(),
                lon: lon.to_string(),
            },
            _ => Self::Place(non_empty(city).unwrap_or(default).to_string()),
        }
    }

    /// Build a query from one entry of a batch request.
    ///
    /// Accepts a bare string, `{lat, lon}` or `{city}`. Any other JSON value
    /// is passed upstream as its textual form and left for the provider to
    /// reject. An object without coordinates or city falls back to `default`.
    pub fn from_json(value: &Value, default: &str) -> Self {
        match value {
            Value::String(s) => Self::Place(s.clone()),
            Value::Object(map) => match (map.get("lat"), map.get("lon")) {
                (Some(lat), Some(lon)) => Self::Coordinates {
                    lat: scalar_text(lat),
                    lon: scalar_text(lon),
                },
                _ => {
                    let city = map
                        .get("city")
                        .map(scalar_text)
                        .filter(|c| !c.trim().is_empty());
                    Self::Place(city.unwrap_or_else(|| default.to_string()))
                }
            },
            other => Self::Place(scalar_text(other)),
        }
    }

    /// The `q` value sent upstream
    pub fn as_query(&self) -> String {
        match self {
            Self::Coordinates { lat, lon } => format!("{},{}", lat, lon),
            Self::Place(place) => place.clone(),
        }
    }

    /// Numeric coordinates, when the query carries parseable ones.
    /// A place string of the form `"12.9,80.1"` counts as coordinates.
    pub fn coordinates(&self) -> Option<GpsCoordinates> {
        let (lat, lon) = match self {
            Self::Coordinates { lat, lon } => (lat.as_str(), lon.as_str()),
            Self::Place(place) => place.split_once(',')?,
        };

        let latitude = lat.trim().parse::<f64>().ok()?;
        let longitude = lon.trim().parse::<f64>().ok()?;
        Some(GpsCoordinates::new(latitude, longitude))
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

impl Default for LocationQuery {
    fn default() -> Self {
        Self::Place(DEFAULT_QUERY.to_string())
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Render a measurement the way the mobile client expects: whole numbers keep
/// one decimal place (`31.0`), everything else prints as-is (`14.4`).
pub fn format_measurement(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
