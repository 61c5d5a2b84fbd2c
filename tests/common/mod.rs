//! Shared test utilities for Helios integration tests.
//!
//! Provides helpers for building an app router pointed at a wiremock
//! vendor upstream, plus fixture payloads for the standard happy path.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use helios::api::{create_router, AppState};
use helios::config::HeliosConfig;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// Build an app router whose vendor client points at the mock server.
pub fn make_app(mock: &MockServer) -> axum::Router {
    make_app_with_timeout(mock, 5)
}

/// Like [`make_app`], with an explicit per-call vendor deadline.
pub fn make_app_with_timeout(mock: &MockServer, call_timeout_seconds: u64) -> axum::Router {
    let mut config = HeliosConfig::default();
    config.vendor.base_url = mock.uri();
    config.vendor.call_timeout_seconds = call_timeout_seconds;

    let state = Arc::new(AppState::new(Arc::new(config)));
    create_router(state)
}

/// Build an authenticated GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {}", TEST_TOKEN))
        .body(Body::empty())
        .unwrap()
}

/// Parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Device listing with one dongle and one inverter.
pub fn device_list() -> Value {
    json!({
        "data": [
            {"serial_number": "D1", "inverter": {"serial": "INV1", "model": "Giv-HY5.0"}}
        ]
    })
}

/// System-data payload matching the documented scenario: 2 kW solar,
/// battery at 80% discharging 0.5 kW, 0.1 kW grid, 300 W consumption.
pub fn system_data() -> Value {
    json!({
        "data": {
            "time": "2024-03-07T10:00:00Z",
            "solar": {"power": 2000, "arrays": [{"array": 1, "power": 2000, "voltage": 320.0, "current": 6.2}]},
            "battery": {"percent": 80, "power": -500, "temperature": 21.0},
            "grid": {"power": 100, "voltage": 241.0, "frequency": 50.0},
            "consumption": 300,
            "inverter": {"temperature": 38.5, "output_voltage": 240.0, "output_frequency": 49.99, "power": 1800}
        }
    })
}

/// A short interval series whose last sample carries the day totals.
pub fn data_points() -> Value {
    json!({
        "data": [
            {
                "time": "2024-03-07T09:55:00Z",
                "power": {"solar": {"power": 1800}, "consumption": {"power": 500}, "battery": {"power": -300}, "grid": {"power": 0}},
                "today": {"solar": 11.0}
            },
            {
                "time": "2024-03-07T10:00:00Z",
                "power": {"solar": {"power": 2000}, "consumption": {"power": 300}, "battery": {"power": -500}, "grid": {"power": 100}},
                "today": {
                    "solar": 12.4,
                    "consumption": 9.1,
                    "grid": {"import": 2.2, "export": 4.9},
                    "battery": {"charge": 3.3, "discharge": 2.8}
                }
            }
        ]
    })
}

/// Mount the full set of happy-path vendor endpoints.
pub async fn mount_happy_path(mock: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/communication-device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(device_list()))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/inverter/INV1/system-data/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(system_data()))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/inverter/INV1/meter-data/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/inverter/INV1/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"name": "Test User"}})),
        )
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/ems/INV1/system-data/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(mock)
        .await;

    // The data-points path embeds today's UTC date.
    Mock::given(method("GET"))
        .and(path_regex(r"^/inverter/INV1/data-points/\d{4}-\d{2}-\d{2}$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data_points()))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/inverter/INV1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(mock)
        .await;

    // Matches both the 7-day and month-to-date aggregate calls.
    Mock::given(method("POST"))
        .and(path("/inverter/INV1/energy-flows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/site"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/ev-charger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/smart-device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(mock)
        .await;
}
