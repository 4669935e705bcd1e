//! Alert classification models

use serde::{Deserialize, Serialize};

/// Discrete severity label for a location's current conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    Low,
    Moderate,
    /// Only produced by scenario templates
    High,
    Severe,
}

impl AlertLevel {
    pub const SEVERE_THRESHOLD: u8 = 70;
    pub const MODERATE_THRESHOLD: u8 = 40;

    /// Bucket a 0-100 risk score: 70 and up is Severe, 40 and up Moderate
    pub fn from_risk_score(score: u8) -> Self {
        match score {
            s if s >= Self::SEVERE_THRESHOLD => AlertLevel::Severe,
            s if s >= Self::MODERATE_THRESHOLD => AlertLevel::Moderate,
            _ => AlertLevel::Low,
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Low => write!(f, "Low"),
            AlertLevel::Moderate => write!(f, "Moderate"),
            AlertLevel::High => write!(f, "High"),
            AlertLevel::Severe => write!(f, "Severe"),
        }
    }
}

/// Storm intensity label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Intensity {
    Low,
    High,
}

impl Intensity {
    pub fn for_level(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Severe => Intensity::High,
            _ => Intensity::Low,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Low => write!(f, "Low"),
            Intensity::High => write!(f, "High"),
        }
    }
}

/// Result of scoring a weather sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertAssessment {
    pub alert_level: AlertLevel,
    pub risk_score: u8,
    pub intensity: Intensity,
}

/// Advisory status reported for a single district
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DistrictStatus {
    Normal,
    Watch,
    Warning,
    Alert,
}

impl DistrictStatus {
    pub const ALL: [DistrictStatus; 4] = [
        DistrictStatus::Normal,
        DistrictStatus::Watch,
        DistrictStatus::Warning,
        DistrictStatus::Alert,
    ];
}
