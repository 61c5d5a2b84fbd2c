//! # Dashboard HTTP surface
//!
//! HTTP endpoints serving the assembled dashboard snapshot and raw vendor
//! passthroughs to the UI.
//!
//! ## Endpoints
//!
//! - `GET /api/dashboard` - The assembled snapshot document
//! - `GET /api/...` - Raw vendor passthrough routes (devices, inverter
//!   data, sites, EV chargers, smart devices)
//! - `GET /health` - Liveness
//!
//! The caller supplies the vendor credential as a bearer token on every
//! request; session management lives outside this service.
//!
//! ## Example
//!
//! ```no_run
//! use helios::api::{AppState, create_router};
//! use helios::config::HeliosConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(HeliosConfig::default());
//! let state = Arc::new(AppState::new(config));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod error;
pub mod health;
pub mod passthrough;

pub use error::ApiError;

use crate::config::HeliosConfig;
use crate::vendor::VendorClient;
use axum::http::{header, HeaderMap};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: Arc<HeliosConfig>,
    pub vendor: VendorClient,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state from configuration.
    pub fn new(config: Arc<HeliosConfig>) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to create HTTP client");

        let vendor = VendorClient::new(&config.vendor, http_client);

        Self {
            config,
            vendor,
            start_time: Instant::now(),
        }
    }
}

/// Extract the bearer token from the Authorization header.
///
/// The token is forwarded to the vendor as-is and never stored or logged.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let request_timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .route("/api/dashboard", get(dashboard::handle))
        .route("/api/devices", get(passthrough::devices))
        .route("/api/devices/:serial", get(passthrough::device))
        .route("/api/account", get(passthrough::account))
        .route(
            "/api/inverter/:serial/system-data",
            get(passthrough::inverter_system_data),
        )
        .route(
            "/api/inverter/:serial/meter-data",
            get(passthrough::inverter_meter_data),
        )
        .route(
            "/api/inverter/:serial/data-points/:date",
            get(passthrough::inverter_data_points),
        )
        .route(
            "/api/inverter/:serial/events",
            get(passthrough::inverter_events),
        )
        .route(
            "/api/inverter/:serial/settings",
            get(passthrough::inverter_settings),
        )
        .route(
            "/api/inverter/:serial/settings/:id/read",
            post(passthrough::read_inverter_setting),
        )
        .route(
            "/api/inverter/:serial/presets",
            get(passthrough::inverter_presets),
        )
        .route(
            "/api/inverter/:serial/energy-flows",
            post(passthrough::energy_flows),
        )
        .route(
            "/api/ems/:serial/system-data",
            get(passthrough::ems_system_data),
        )
        .route("/api/sites", get(passthrough::sites))
        .route("/api/sites/:id", get(passthrough::site))
        .route(
            "/api/sites/:id/energy-data",
            get(passthrough::site_energy_data),
        )
        .route(
            "/api/sites/:id/data-latest",
            get(passthrough::site_data_latest),
        )
        .route("/api/sites/:id/status", get(passthrough::site_status))
        .route("/api/ev-chargers", get(passthrough::ev_chargers))
        .route("/api/ev-chargers/:uuid", get(passthrough::ev_charger_details))
        .route(
            "/api/ev-chargers/:uuid/meter-data",
            get(passthrough::ev_charger_meter_data),
        )
        .route(
            "/api/ev-chargers/:uuid/sessions",
            get(passthrough::ev_charger_sessions),
        )
        .route("/api/smart-devices", get(passthrough::smart_devices))
        .route("/api/smart-devices/:uuid", get(passthrough::smart_device))
        .route(
            "/api/smart-devices/:uuid/data",
            get(passthrough::smart_device_data),
        )
        .route("/health", get(health::handle))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
