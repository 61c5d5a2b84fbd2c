//! Dashboard snapshot endpoint handler.

use crate::api::{bearer_token, ApiError, AppState};
use crate::dashboard;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use tracing::info;

/// GET /api/dashboard - Assemble and return the full snapshot.
///
/// The response is live data; caching headers forbid any intermediary
/// from serving a stale snapshot.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)?;

    info!("Dashboard snapshot requested");
    let snapshot = dashboard::get_dashboard(&state.vendor, &token).await?;

    let mut response = Json(snapshot).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    Ok(response)
}
