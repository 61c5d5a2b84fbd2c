//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub vendor_base_url: String,
}

/// GET /health - Liveness with uptime.
///
/// Deliberately does not probe the vendor API; a vendor outage degrades
/// snapshot fields, it does not make this service unhealthy.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        vendor_base_url: state.vendor.base_url().to_string(),
    })
}
