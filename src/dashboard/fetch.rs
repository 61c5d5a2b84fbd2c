//! Fan-out fetch orchestration with per-call failure isolation.
//!
//! Every optional upstream resource is wrapped in [`Partial`]: a failed
//! call degrades that one field to an `{error}` marker instead of
//! aborting its siblings. That asymmetry is the central invariant of the
//! aggregation layer.

use crate::vendor::{VendorClient, VendorError};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;

/// A full day of interval samples at 5-minute resolution.
const DAY_PAGE_SIZE: u32 = 288;

/// Either a successful upstream payload or an `{error}` marker.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Partial {
    Payload(Value),
    Error { error: String },
}

impl Partial {
    /// Payload value, or None for an errored fetch.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Partial::Payload(value) => Some(value),
            Partial::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Partial::Error { .. })
    }
}

/// Run one upstream call, absorbing its failure into an error marker.
pub async fn isolate<F>(fut: F) -> Partial
where
    F: Future<Output = Result<Value, VendorError>>,
{
    match fut.await {
        Ok(value) => Partial::Payload(value),
        Err(e) => Partial::Error {
            error: e.to_string(),
        },
    }
}

/// Named results of the full dashboard fan-out.
#[derive(Debug, Clone)]
pub struct FetchResults {
    pub system_data: Partial,
    pub meter_data: Partial,
    pub settings: Partial,
    pub account: Partial,
    pub ems_data: Partial,
    pub data_points: Partial,
    pub events: Partial,
    pub energy_flows: Partial,
    pub monthly_flows: Partial,
    pub sites: Partial,
    pub ev_chargers: Partial,
    pub smart_devices: Partial,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Issue the full set of per-inverter and account-wide fetches.
///
/// The inverter data group runs concurrently; the rest run in sequence.
/// Every call is individually isolated, so a single upstream outage
/// degrades one field and never the whole snapshot.
pub async fn fetch_all(client: &VendorClient, token: &str, inverter_serial: &str) -> FetchResults {
    let (system_data, meter_data, settings) = tokio::join!(
        isolate(client.inverter_system_data(token, inverter_serial)),
        isolate(client.inverter_meter_data(token, inverter_serial)),
        isolate(client.inverter_settings(token, inverter_serial)),
    );

    let account = isolate(client.account(token)).await;
    let ems_data = isolate(client.ems_system_data(token, inverter_serial)).await;

    // All date math is UTC wall clock at request time.
    let today = Utc::now().date_naive();
    let data_points = isolate(client.inverter_data_points(
        token,
        inverter_serial,
        &format_date(today),
        1,
        DAY_PAGE_SIZE,
    ))
    .await;

    let events = isolate(client.inverter_events(token, inverter_serial, 1)).await;

    let week_start = today - chrono::Duration::days(7);
    let energy_flows = isolate(client.energy_flows(
        token,
        inverter_serial,
        &format_date(week_start),
        &format_date(today),
        "day",
    ))
    .await;

    let month_start = today.with_day(1).unwrap_or(today);
    let monthly_flows = isolate(client.energy_flows(
        token,
        inverter_serial,
        &format_date(month_start),
        &format_date(today),
        "day",
    ))
    .await;

    let sites = isolate(client.sites(token)).await;
    let ev_chargers = isolate(client.ev_chargers(token)).await;
    let smart_devices = isolate(client.smart_devices(token)).await;

    FetchResults {
        system_data,
        meter_data,
        settings,
        account,
        ems_data,
        data_points,
        events,
        energy_flows,
        monthly_flows,
        sites,
        ev_chargers,
        smart_devices,
    }
}
