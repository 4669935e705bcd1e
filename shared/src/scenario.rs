//! Storm scenario generator
//!
//! Produces placeholder alerts for demo deployments. The hour of day narrows
//! the catalog to a few plausible levels, then the injected generator picks
//! one template and a set of affected districts.

use chrono::Timelike;
use rand::{rngs::StdRng, seq::index, RngExt};

use crate::districts::DISTRICTS;
use crate::models::{AlertLevel, Intensity, ScenarioPayload, ScenarioTemplate};

/// The scenario catalog, one template per alert level
pub const TEMPLATES: [ScenarioTemplate; 4] = [
    ScenarioTemplate {
        alert_level: AlertLevel::Severe,
        intensity: Intensity::High,
        track_summary: "Severe cyclonic storm over the south-west Bay of Bengal, \
                        expected to cross the coast within 12 hours with gusts up to 110 km/h.",
        min_districts: 5,
        max_districts: 8,
        risk_range: (75, 95),
    },
    ScenarioTemplate {
        alert_level: AlertLevel::High,
        intensity: Intensity::High,
        track_summary: "Deep depression intensifying over the Bay of Bengal, \
                        moving north-west at 15 km/h towards the coast.",
        min_districts: 3,
        max_districts: 6,
        risk_range: (60, 74),
    },
    ScenarioTemplate {
        alert_level: AlertLevel::Moderate,
        intensity: Intensity::Low,
        track_summary: "Depression over the south-east Bay of Bengal. \
                        Heavy rainfall likely along coastal districts.",
        min_districts: 2,
        max_districts: 4,
        risk_range: (40, 59),
    },
    ScenarioTemplate {
        alert_level: AlertLevel::Low,
        intensity: Intensity::Low,
        track_summary: "Low pressure area over the Bay of Bengal with isolated showers. \
                        No cyclone threat at present.",
        min_districts: 1,
        max_districts: 2,
        risk_range: (5, 39),
    },
];

/// Alert levels a scenario may take at the given hour (0-23)
pub fn candidate_levels(hour: u32) -> &'static [AlertLevel] {
    match hour {
        22..=23 | 0..=3 => &[AlertLevel::Severe, AlertLevel::High],
        4..=9 => &[AlertLevel::High, AlertLevel::Moderate],
        10..=15 => &[AlertLevel::Moderate, AlertLevel::Low],
        _ => &[AlertLevel::Severe, AlertLevel::High, AlertLevel::Moderate],
    }
}

/// Catalog template for a level
pub fn template_for(level: AlertLevel) -> &'static ScenarioTemplate {
    match level {
        AlertLevel::Severe => &TEMPLATES[0],
        AlertLevel::High => &TEMPLATES[1],
        AlertLevel::Moderate => &TEMPLATES[2],
        AlertLevel::Low => &TEMPLATES[3],
    }
}

/// Pick a template plausible for the hour of `now`
pub fn pick_template<T: Timelike>(now: &T, rng: &mut StdRng) -> &'static ScenarioTemplate {
    let levels = candidate_levels(now.hour());
    template_for(levels[rng.random_range(0..levels.len())])
}

/// Draw `count` distinct districts, uniformly and without replacement
pub fn sample_districts(count: usize, rng: &mut StdRng) -> Vec<String> {
    let count = count.min(DISTRICTS.len());
    index::sample(rng, DISTRICTS.len(), count)
        .iter()
        .map(|i| DISTRICTS[i].to_string())
        .collect()
}

/// Build the scenario for the given moment
pub fn current_scenario<T: Timelike>(now: &T, rng: &mut StdRng) -> ScenarioPayload {
    let template = pick_template(now, rng);
    let count = rng.random_range(template.min_districts..=template.max_districts);

    ScenarioPayload {
        alert_level: template.alert_level,
        affected_districts: sample_districts(count, rng),
        track_summary: template.track_summary.to_string(),
        intensity: template.intensity,
    }
}
