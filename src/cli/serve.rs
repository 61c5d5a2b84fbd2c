//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::{HeliosConfig, LogFormat};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(args: &ServeArgs) -> Result<HeliosConfig> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        HeliosConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        HeliosConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if let Some(ref base_url) = args.vendor_base_url {
        config.vendor.base_url = base_url.clone();
    }

    Ok(config)
}

/// Initialize tracing based on configuration
pub fn init_tracing(config: &crate::config::LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    init_tracing(&config.logging)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(Arc::new(config)));
    let app = create_router(Arc::clone(&state));

    tracing::info!(%addr, vendor = %state.vendor.base_url(), "Starting Helios server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_args(config: PathBuf) -> ServeArgs {
        ServeArgs {
            config,
            port: None,
            host: None,
            log_level: None,
            vendor_base_url: None,
        }
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        // Reads HELIOS_* vars; hold the lock so env-mutating tests cannot
        // interleave.
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let args = make_args(PathBuf::from("/nonexistent/helios.toml"));
        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_cli_overrides_beat_file() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let mut args = make_args(temp.path().to_path_buf());
        args.port = Some(9999);
        args.vendor_base_url = Some("http://localhost:1234/v1".to_string());

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.vendor.base_url, "http://localhost:1234/v1");
    }
}
