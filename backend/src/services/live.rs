//! Live forecasts: upstream conditions run through the threshold scoring rule

use async_trait::async_trait;
use shared::models::WeatherSample;
use shared::scoring::assess;
use shared::types::{format_measurement, LocationQuery};

use crate::error::AppResult;
use crate::external::WeatherClient;
use crate::services::forecast::{ForecastProvider, ForecastReport};

/// Forecast provider backed by the upstream weather API
#[derive(Clone)]
pub struct LiveForecastProvider {
    client: WeatherClient,
}

impl LiveForecastProvider {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ForecastProvider for LiveForecastProvider {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn forecast(&self, query: &LocationQuery) -> AppResult<ForecastReport> {
        let sample = self.client.fetch_current(&query.as_query()).await?;
        let report = report_from_sample(&sample);

        tracing::info!(
            location = %report.location_name,
            risk_score = report.risk_score,
            alert_level = %report.alert_level,
            "Scored current conditions"
        );

        Ok(report)
    }
}

/// Score a sample and shape it into a report
pub fn report_from_sample(sample: &WeatherSample) -> ForecastReport {
    let assessment = assess(sample);

    ForecastReport {
        alert_level: assessment.alert_level,
        intensity: assessment.intensity,
        risk_score: assessment.risk_score,
        affected_districts: vec![sample.location_name.clone()],
        track_summary: format!(
            "Inference for {}: {} with {}mm rain. Risk probability: {}%.",
            sample.location_name,
            sample.condition_text,
            format_measurement(sample.precipitation_mm),
            assessment.risk_score
        ),
        location_name: sample.location_name.clone(),
        coordinates: sample.coordinates(),
        conditions: sample.conditions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{AlertLevel, Intensity};

    #[test]
    fn test_report_from_sample() {
        let sample = WeatherSample {
            temperature_c: 28.0,
            humidity_pct: 90,
            wind_speed_kph: 10.0,
            precipitation_mm: 0.6,
            condition_text: "Light Rain".to_string(),
            location_name: "Cuddalore".to_string(),
            latitude: 11.75,
            longitude: 79.75,
        };

        let report = report_from_sample(&sample);
        assert_eq!(report.alert_level, AlertLevel::Severe);
        assert_eq!(report.intensity, Intensity::High);
        assert_eq!(report.risk_score, 75);
        assert_eq!(report.affected_districts, vec!["Cuddalore".to_string()]);
        assert_eq!(
            report.track_summary,
            "Inference for Cuddalore: Light Rain with 0.6mm rain. Risk probability: 75%."
        );
        assert_eq!(report.coordinates.latitude, 11.75);
        assert_eq!(report.conditions.humidity_pct, 90);
    }
}
