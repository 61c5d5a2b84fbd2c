//! Command-line interface definitions.

pub mod serve;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Helios - solar/battery dashboard aggregation gateway
#[derive(Debug, Parser)]
#[command(name = "helios", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "helios.toml")]
    pub config: PathBuf,

    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override the vendor API base URL
    #[arg(long)]
    pub vendor_base_url: Option<String>,
}
