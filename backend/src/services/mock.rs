//! Scenario forecasts for demo deployments
//!
//! No upstream traffic. The alert comes from the scenario catalog for the
//! current local hour and the measurements are drawn to match its level.

use async_trait::async_trait;
use chrono::{Local, Timelike};
use rand::{rngs::StdRng, RngExt};
use shared::models::{AlertLevel, ConditionsSnapshot};
use shared::scenario::{current_scenario, template_for};
use shared::types::{LocationQuery, CHENNAI};

use crate::error::AppResult;
use crate::services::forecast::{ForecastProvider, ForecastReport};
use crate::services::SharedRng;

/// Label used for coordinate queries, which have no place name
const COAST_LABEL: &str = "Tamil Nadu Coast";

/// Forecast provider serving canned storm scenarios
#[derive(Clone)]
pub struct MockForecastProvider {
    rng: SharedRng,
}

impl MockForecastProvider {
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl ForecastProvider for MockForecastProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn forecast(&self, query: &LocationQuery) -> AppResult<ForecastReport> {
        let now = Local::now();
        let mut rng = self.rng.lock().await;
        let report = scenario_report(query, &now, &mut rng);

        tracing::debug!(
            query = %query,
            alert_level = %report.alert_level,
            districts = report.affected_districts.len(),
            "Served scenario forecast"
        );

        Ok(report)
    }
}

/// Build a scenario-backed report for a query at the given moment
pub fn scenario_report<T: Timelike>(
    query: &LocationQuery,
    now: &T,
    rng: &mut StdRng,
) -> ForecastReport {
    let scenario = current_scenario(now, rng);
    let template = template_for(scenario.alert_level);
    let (low, high) = template.risk_range;
    let risk_score = rng.random_range(low..=high);
    let conditions = fabricated_conditions(scenario.alert_level, rng);

    let location_name = match query {
        LocationQuery::Place(place) if query.coordinates().is_none() => place.clone(),
        _ => COAST_LABEL.to_string(),
    };

    ForecastReport {
        alert_level: scenario.alert_level,
        intensity: scenario.intensity,
        risk_score,
        affected_districts: scenario.affected_districts,
        track_summary: scenario.track_summary,
        location_name,
        coordinates: query.coordinates().unwrap_or(CHENNAI),
        conditions,
    }
}

/// Measurements plausible for a scenario of the given level
fn fabricated_conditions(level: AlertLevel, rng: &mut StdRng) -> ConditionsSnapshot {
    let (temp, humidity, wind, precip, condition) = match level {
        AlertLevel::Severe => (
            (24.0, 27.0),
            (90, 98),
            (60.0, 110.0),
            (20.0, 80.0),
            "Heavy rain with thunder",
        ),
        AlertLevel::High => (
            (25.0, 28.0),
            (85, 95),
            (35.0, 60.0),
            (8.0, 20.0),
            "Moderate or heavy rain shower",
        ),
        AlertLevel::Moderate => (
            (26.0, 30.0),
            (75, 90),
            (18.0, 35.0),
            (1.0, 8.0),
            "Patchy rain nearby",
        ),
        AlertLevel::Low => (
            (28.0, 33.0),
            (55, 75),
            (5.0, 18.0),
            (0.0, 0.5),
            "Partly cloudy",
        ),
    };

    ConditionsSnapshot {
        temperature_c: one_decimal(rng.random_range(temp.0..=temp.1)),
        humidity_pct: rng.random_range(humidity.0..=humidity.1),
        wind_speed_kph: one_decimal(rng.random_range(wind.0..=wind.1)),
        precipitation_mm: one_decimal(rng.random_range(precip.0..=precip.1)),
        condition: condition.to_string(),
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rand::SeedableRng;
    use shared::types::GpsCoordinates;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_place_query_keeps_name() {
        let mut rng = StdRng::seed_from_u64(5);
        let query = LocationQuery::Place("Madurai".to_string());
        let report = scenario_report(&query, &at(12), &mut rng);

        assert_eq!(report.location_name, "Madurai");
        assert_eq!(report.coordinates, CHENNAI);
        assert!(matches!(
            report.alert_level,
            AlertLevel::Moderate | AlertLevel::Low
        ));
    }

    #[test]
    fn test_coordinate_query_keeps_coordinates() {
        let mut rng = StdRng::seed_from_u64(5);
        let query = LocationQuery::from_parts(Some("11.75"), Some("79.75"), None, "Chennai");
        let report = scenario_report(&query, &at(2), &mut rng);

        assert_eq!(report.location_name, COAST_LABEL);
        assert_eq!(report.coordinates, GpsCoordinates::new(11.75, 79.75));
    }

    #[test]
    fn test_risk_score_within_template_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for hour in 0..24 {
            let report = scenario_report(&LocationQuery::default(), &at(hour), &mut rng);
            let (low, high) = template_for(report.alert_level).risk_range;
            assert!(report.risk_score >= low && report.risk_score <= high);
            assert!(report.conditions.humidity_pct <= 100);
        }
    }
}
