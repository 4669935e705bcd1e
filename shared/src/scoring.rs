//! Threshold scoring of current weather conditions
//!
//! Four independent rules add up to a 0-100 risk score which is then bucketed
//! into an alert level. The weights and thresholds are part of the client
//! contract and must not drift.

use crate::models::{AlertAssessment, AlertLevel, Intensity, WeatherSample};

pub const PRECIPITATION_THRESHOLD_MM: f64 = 0.5;
pub const HUMIDITY_THRESHOLD_PCT: i32 = 85;
pub const WIND_THRESHOLD_KPH: f64 = 20.0;

pub const PRECIPITATION_WEIGHT: u8 = 40;
pub const CONDITION_WEIGHT: u8 = 10;
pub const HUMIDITY_WEIGHT: u8 = 25;
pub const WIND_WEIGHT: u8 = 25;

/// Condition keywords, matched case-sensitively as substrings
pub const STORM_KEYWORDS: [&str; 2] = ["Rain", "Storm"];

/// Compute the 0-100 risk score for a sample
pub fn risk_score(sample: &WeatherSample) -> u8 {
    let mut score = 0;

    if sample.precipitation_mm > PRECIPITATION_THRESHOLD_MM {
        score += PRECIPITATION_WEIGHT;
    }
    if STORM_KEYWORDS
        .iter()
        .any(|keyword| sample.condition_text.contains(keyword))
    {
        score += CONDITION_WEIGHT;
    }
    if sample.humidity_pct > HUMIDITY_THRESHOLD_PCT {
        score += HUMIDITY_WEIGHT;
    }
    if sample.wind_speed_kph > WIND_THRESHOLD_KPH {
        score += WIND_WEIGHT;
    }

    score
}

/// Score a sample and derive its alert level and intensity
pub fn assess(sample: &WeatherSample) -> AlertAssessment {
    let risk_score = risk_score(sample);
    let alert_level = AlertLevel::from_risk_score(risk_score);

    AlertAssessment {
        alert_level,
        risk_score,
        intensity: Intensity::for_level(alert_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(precip: f64, condition: &str, humidity: i32, wind: f64) -> WeatherSample {
        WeatherSample {
            temperature_c: 29.0,
            humidity_pct: humidity,
            wind_speed_kph: wind,
            precipitation_mm: precip,
            condition_text: condition.to_string(),
            location_name: "Chennai".to_string(),
            latitude: 13.08,
            longitude: 80.27,
        }
    }

    #[test]
    fn test_light_rain_is_severe() {
        let result = assess(&sample(0.6, "Light Rain", 90, 10.0));
        assert_eq!(result.risk_score, 75);
        assert_eq!(result.alert_level, AlertLevel::Severe);
        assert_eq!(result.intensity, Intensity::High);
    }

    #[test]
    fn test_clear_sky_is_low() {
        let result = assess(&sample(0.0, "Clear", 50, 5.0));
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.alert_level, AlertLevel::Low);
        assert_eq!(result.intensity, Intensity::Low);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(risk_score(&sample(0.5, "Clear", 85, 20.0)), 0);
        assert_eq!(risk_score(&sample(0.51, "Clear", 86, 20.1)), 90);
    }

    #[test]
    fn test_score_forty_is_moderate() {
        let result = assess(&sample(1.2, "Overcast", 60, 5.0));
        assert_eq!(result.risk_score, 40);
        assert_eq!(result.alert_level, AlertLevel::Moderate);
        assert_eq!(result.intensity, Intensity::Low);
    }

    #[test]
    fn test_everything_but_precipitation_stays_moderate() {
        let result = assess(&sample(0.0, "Thunder Storm", 90, 30.0));
        assert_eq!(result.risk_score, 60);
        assert_eq!(result.alert_level, AlertLevel::Moderate);
    }

    #[test]
    fn test_lowercase_storm_is_not_a_keyword() {
        let result = assess(&sample(0.0, "Thunderstorm", 90, 30.0));
        assert_eq!(result.risk_score, 50);
        assert_eq!(result.alert_level, AlertLevel::Moderate);
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        assert_eq!(risk_score(&sample(0.0, "Patchy rain possible", 50, 5.0)), 0);
        assert_eq!(risk_score(&sample(0.0, "Patchy Rain possible", 50, 5.0)), 10);
        assert_eq!(risk_score(&sample(0.0, "Storm", 50, 5.0)), 10);
    }

    #[test]
    fn test_keywords_do_not_stack() {
        assert_eq!(risk_score(&sample(0.0, "Rain Storm", 50, 5.0)), 10);
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert_eq!(risk_score(&sample(-4.0, "", -10, -30.0)), 0);
        assert_eq!(risk_score(&sample(f64::NAN, "Clear", 0, f64::NAN)), 0);
        assert_eq!(risk_score(&sample(1e9, "Rain", 1000, 1e9)), 100);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_assess_is_deterministic(
            precip in -10.0f64..200.0,
            humidity in -10i32..120,
            wind in -10.0f64..250.0,
            condition in "[A-Za-z ]{0,20}"
        ) {
            let s = sample(precip, &condition, humidity, wind);
            let first = assess(&s);
            let second = assess(&s.clone());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_score_is_reachable_sum(
            precip in -10.0f64..200.0,
            humidity in -10i32..120,
            wind in -10.0f64..250.0,
            condition in "[A-Za-z ]{0,20}"
        ) {
            let score = risk_score(&sample(precip, &condition, humidity, wind));
            prop_assert!(score <= 100);
            let reachable = [0u8, 10, 25, 35, 40, 50, 60, 65, 75, 90, 100];
            prop_assert!(reachable.contains(&score));
        }

        #[test]
        fn prop_level_matches_score(
            precip in -10.0f64..200.0,
            humidity in -10i32..120,
            wind in -10.0f64..250.0
        ) {
            let result = assess(&sample(precip, "Clear", humidity, wind));
            let expected = if result.risk_score >= 70 {
                AlertLevel::Severe
            } else if result.risk_score >= 40 {
                AlertLevel::Moderate
            } else {
                AlertLevel::Low
            };
            prop_assert_eq!(result.alert_level, expected);
            prop_assert_ne!(result.alert_level, AlertLevel::High);
        }
    }
}
