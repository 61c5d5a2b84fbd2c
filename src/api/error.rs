//! HTTP error responses.

use crate::vendor::VendorError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;

/// Error response body: `{error}` plus, for unresolved topology, the raw
/// device list for diagnostics.
///
/// Authentication failures map to 401 so the UI can prompt a re-login;
/// every other mandatory-path failure is a 500.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Value>>,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    pub fn unauthorized(message: &str) -> Self {
        Self {
            error: message.to_string(),
            devices: None,
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            error: message.to_string(),
            devices: None,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<VendorError> for ApiError {
    fn from(err: VendorError) -> Self {
        match err {
            VendorError::Authentication => Self::unauthorized(&err.to_string()),
            VendorError::NoInverter { devices } => Self {
                error: "No inverter found".to_string(),
                devices: Some(devices),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            other => Self::internal(&other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
