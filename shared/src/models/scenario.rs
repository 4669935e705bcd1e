//! Canned storm scenario models

use serde::{Deserialize, Serialize};

use super::alert::{AlertLevel, Intensity};

/// Fabricated alert used in place of live upstream data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPayload {
    pub alert_level: AlertLevel,
    pub affected_districts: Vec<String>,
    pub track_summary: String,
    pub intensity: Intensity,
}

/// One entry of the fixed scenario catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioTemplate {
    pub alert_level: AlertLevel,
    pub intensity: Intensity,
    pub track_summary: &'static str,
    /// Inclusive range of districts a scenario of this level touches
    pub min_districts: usize,
    pub max_districts: usize,
    /// Inclusive range the fabricated risk score is drawn from
    pub risk_range: (u8, u8),
}
