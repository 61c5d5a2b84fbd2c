//! Vendor API configuration

use serde::{Deserialize, Serialize};

/// Upstream vendor API settings.
///
/// The base URL is explicit configuration rather than ambient global
/// state, so tests can point the client at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorConfig {
    /// Vendor API base URL, without a trailing slash.
    pub base_url: String,
    /// Per-call deadline for each upstream request, in seconds.
    pub call_timeout_seconds: u64,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.givenergy.cloud/v1".to_string(),
            call_timeout_seconds: 15,
        }
    }
}
