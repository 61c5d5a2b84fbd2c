//! Helios - solar/battery energy dashboard gateway
//!
//! This library aggregates telemetry from a residential energy-management
//! vendor's cloud REST API into a single dashboard snapshot document and
//! serves it over HTTP.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod vendor;
