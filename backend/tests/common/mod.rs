//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get as route_get,
    Json, Router,
};
use serde_json::{json, Value};
use shared::districts::DistrictCatalog;
use shared::models::WeatherSample;
use shared::types::LocationQuery;
use tower::ServiceExt;

use vaanmozhi_backend::config::{
    AuthConfig, Config, LimitsConfig, ProviderConfig, ProviderMode, RandomConfig, ServerConfig,
    WeatherConfig,
};
use vaanmozhi_backend::error::{AppError, AppResult};
use vaanmozhi_backend::middleware::StaticKeyAuthorizer;
use vaanmozhi_backend::services::{live::report_from_sample, shared_rng, ForecastProvider, ForecastReport};
use vaanmozhi_backend::AppState;

pub const CLIENT_KEY: &str = "VAANMOZHI_CLIENT_2025";
pub const API_KEY: &str = "test-key";

pub fn test_config(mode: ProviderMode, api_endpoint: &str) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        weather: WeatherConfig {
            api_endpoint: api_endpoint.to_string(),
            api_key: Some(API_KEY.to_string()),
            default_query: "Chennai".to_string(),
        },
        auth: AuthConfig {
            header_name: "X-Client-Key".to_string(),
            client_key: CLIENT_KEY.to_string(),
        },
        provider: ProviderConfig { mode },
        random: RandomConfig { seed: Some(2025) },
        limits: LimitsConfig { max_batch_size: 5 },
    }
}

/// Sample the fake upstream reports for a place
pub fn sample_for(place: &str) -> WeatherSample {
    match place {
        "Chennai" | "13.08,80.27" => WeatherSample {
            temperature_c: 28.0,
            humidity_pct: 90,
            wind_speed_kph: 10.0,
            precipitation_mm: 0.6,
            condition_text: "Light Rain".to_string(),
            location_name: "Chennai".to_string(),
            latitude: 13.08,
            longitude: 80.27,
        },
        other => WeatherSample {
            temperature_c: 31.0,
            humidity_pct: 50,
            wind_speed_kph: 5.0,
            precipitation_mm: 0.0,
            condition_text: "Clear".to_string(),
            location_name: other.to_string(),
            latitude: 11.0,
            longitude: 78.0,
        },
    }
}

/// Provider that answers from [`sample_for`] without any network traffic.
/// "Atlantis" is unknown and "Garbled" fails to parse.
pub struct StubProvider;

#[async_trait]
impl ForecastProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn forecast(&self, query: &LocationQuery) -> AppResult<ForecastReport> {
        match query.as_query().as_str() {
            "Atlantis" => Err(AppError::LocationNotFound {
                message: Some("No matching location found.".to_string()),
            }),
            "Garbled" => Err(AppError::UpstreamParse("missing field `current`".to_string())),
            place => Ok(report_from_sample(&sample_for(place))),
        }
    }
}

pub fn stub_state() -> AppState {
    let config = test_config(ProviderMode::Mock, "http://127.0.0.1:9");
    AppState {
        rng: shared_rng(config.random.seed),
        config: Arc::new(config),
        provider: Arc::new(StubProvider),
        authorizer: Arc::new(StaticKeyAuthorizer::new("X-Client-Key", CLIENT_KEY)),
        districts: Arc::new(DistrictCatalog::default()),
    }
}

/// Send one request through the router and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn get(uri: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(key) = key {
        builder = builder.header("X-Client-Key", key);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = key {
        builder = builder.header("X-Client-Key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn fake_current(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("key").map(String::as_str) != Some(API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"code": 2006, "message": "API key is invalid."}})),
        )
            .into_response();
    }

    match params.get("q").map(String::as_str) {
        None | Some("") => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": 1003, "message": "Parameter q is missing."}})),
        )
            .into_response(),
        Some("Atlantis") => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": 1006, "message": "No matching location found."}})),
        )
            .into_response(),
        Some("Garbled") => (StatusCode::OK, "{\"unexpected\": true}").into_response(),
        Some("Gateway") => (StatusCode::BAD_GATEWAY, "upstream down").into_response(),
        Some(q) => {
            let s = sample_for(q);
            Json(json!({
                "location": {
                    "name": s.location_name,
                    "region": "Tamil Nadu",
                    "country": "India",
                    "lat": s.latitude,
                    "lon": s.longitude
                },
                "current": {
                    "temp_c": s.temperature_c,
                    "humidity": s.humidity_pct,
                    "wind_kph": s.wind_speed_kph,
                    "precip_mm": s.precipitation_mm,
                    "condition": {"text": s.condition_text, "code": 1183}
                }
            }))
            .into_response()
        }
    }
}

/// Start a stand-in for WeatherAPI on an ephemeral port and return its base URL
pub async fn spawn_fake_weather_api() -> String {
    let app = Router::new().route("/v1/current.json", route_get(fake_current));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1", addr)
}
