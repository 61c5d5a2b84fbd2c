//! Device topology resolution.
//!
//! One account can register several communication devices; the first one
//! is authoritative and its inverter serial parameterizes every
//! subsequent per-inverter fetch.

use crate::vendor::{VendorClient, VendorError};
use serde::Serialize;
use serde_json::Value;

/// Resolved device topology for one account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTopology {
    /// All communication devices, as returned by the vendor.
    pub devices: Vec<Value>,
    /// The first device; authoritative, no ranking logic.
    pub device: Value,
    pub inverter_serial: String,
    pub dongle_serial: String,
}

/// Resolve the account's device topology from the device listing.
///
/// Fails with `NoDevice` on an empty list and `NoInverter` when the first
/// device has no inverter serial; the latter keeps the raw device list
/// for diagnostics.
pub async fn resolve(client: &VendorClient, token: &str) -> Result<DeviceTopology, VendorError> {
    let response = client.communication_devices(token).await?;
    let devices: Vec<Value> = response
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if devices.is_empty() {
        return Err(VendorError::NoDevice);
    }

    let device = devices[0].clone();
    let inverter_serial = device
        .pointer("/inverter/serial")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if inverter_serial.is_empty() {
        return Err(VendorError::NoInverter { devices });
    }

    let dongle_serial = device
        .get("serial_number")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    tracing::debug!(inverter = %inverter_serial, dongle = %dongle_serial, "Resolved device topology");

    Ok(DeviceTopology {
        devices,
        device,
        inverter_serial,
        dongle_serial,
    })
}
