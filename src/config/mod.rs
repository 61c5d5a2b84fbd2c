//! Configuration module for Helios
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`HELIOS_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use helios::config::HeliosConfig;
//!
//! // Load defaults
//! let config = HeliosConfig::default();
//! assert_eq!(config.server.port, 3001);
//!
//! // Parse from TOML
//! let toml = r#"
//! [server]
//! port = 9000
//! "#;
//! let config: HeliosConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

pub mod error;
pub mod logging;
pub mod server;
pub mod vendor;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use vendor::VendorConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tests that set or read `HELIOS_*` environment variables hold this lock
/// so a variable set by one test cannot leak into another running in
/// parallel.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Unified configuration for the Helios server.
///
/// Aggregates the HTTP server settings, the upstream vendor API settings,
/// and logging.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HeliosConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Upstream vendor API configuration
    pub vendor: VendorConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl HeliosConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports HELIOS_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("HELIOS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("HELIOS_HOST") {
            self.server.host = host;
        }

        if let Ok(url) = std::env::var("HELIOS_VENDOR_BASE_URL") {
            self.vendor.base_url = url;
        }
        if let Ok(timeout) = std::env::var("HELIOS_VENDOR_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.vendor.call_timeout_seconds = t;
            }
        }

        if let Ok(level) = std::env::var("HELIOS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HELIOS_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.vendor.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "vendor.base_url".to_string(),
                message: "base URL cannot be empty".to_string(),
            });
        }
        if self.vendor.base_url.ends_with('/') {
            return Err(ConfigError::Validation {
                field: "vendor.base_url".to_string(),
                message: "base URL must not end with a slash".to_string(),
            });
        }

        if self.vendor.call_timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "vendor.call_timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
