//! Snapshot assembly.
//!
//! A pure merge of resolver output, fetch results, and normalized fields
//! into the one document the UI consumes. `fetchedAt` is stamped fresh at
//! assembly time, independent of any upstream timestamp.

use super::fetch::{FetchResults, Partial};
use super::normalize::{
    Battery, Consumption, Grid, IntervalPoint, Inverter, Normalized, Solar, TodayStats,
};
use super::topology::DeviceTopology;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// The assembled dashboard document.
///
/// Every fetched slot is independently optional: an errored sub-fetch
/// serializes as `{error}` in place without invalidating the rest.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    // Device topology
    pub devices: Vec<Value>,
    pub device: Value,
    pub dongle_serial: String,
    pub inverter_serial: String,
    pub inverter_info: Value,

    // Real-time metrics, normalized to kW
    pub solar: Solar,
    pub battery: Battery,
    pub grid: Grid,
    pub consumption: Consumption,
    pub inverter: Inverter,
    pub today_stats: TodayStats,

    // Raw upstream payloads
    pub system_data: Partial,
    pub meter_data: Partial,
    pub ems_data: Partial,

    // Historical series
    pub data_points: Vec<IntervalPoint>,
    pub energy_flows: Partial,
    pub monthly_flows: Partial,
    pub events: Partial,

    // Configuration
    pub settings: Partial,

    // Sites & account
    pub sites: Partial,
    pub account: Partial,

    // Auxiliary devices
    pub ev_chargers: Partial,
    pub smart_devices: Partial,

    /// Vendor-reported sample time of the system-data payload.
    pub timestamp: Value,
    /// Assembly time, ISO-8601 UTC.
    pub fetched_at: String,
}

/// Merge topology, fetch results, and normalized fields into one document.
pub fn assemble(
    topology: DeviceTopology,
    partials: FetchResults,
    normalized: Normalized,
) -> SnapshotDocument {
    let inverter_info = topology.device.get("inverter").cloned().unwrap_or(Value::Null);

    SnapshotDocument {
        devices: topology.devices,
        device: topology.device,
        dongle_serial: topology.dongle_serial,
        inverter_serial: topology.inverter_serial,
        inverter_info,

        solar: normalized.solar,
        battery: normalized.battery,
        grid: normalized.grid,
        consumption: normalized.consumption,
        inverter: normalized.inverter,
        today_stats: normalized.today_stats,

        system_data: partials.system_data,
        meter_data: partials.meter_data,
        ems_data: partials.ems_data,

        data_points: normalized.data_points,
        energy_flows: partials.energy_flows,
        monthly_flows: partials.monthly_flows,
        events: partials.events,

        settings: partials.settings,

        sites: partials.sites,
        account: partials.account,

        ev_chargers: partials.ev_chargers,
        smart_devices: partials.smart_devices,

        timestamp: normalized.timestamp,
        fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
