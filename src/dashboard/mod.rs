//! Dashboard aggregation pipeline.
//!
//! Given a credential: resolve the device topology, fan out to the vendor
//! endpoints with per-call failure isolation, normalize units, and
//! assemble one snapshot document.
//!
//! Only the mandatory path (authentication, topology resolution) can fail
//! the whole request; every optional fetch degrades its own field.

pub mod fetch;
pub mod normalize;
pub mod snapshot;
pub mod topology;

pub use fetch::{fetch_all, isolate, FetchResults, Partial};
pub use normalize::{normalize, Normalized};
pub use snapshot::{assemble, SnapshotDocument};
pub use topology::{resolve, DeviceTopology};

use crate::vendor::{VendorClient, VendorError};

/// Run the full aggregation pipeline for one credential.
pub async fn get_dashboard(
    client: &VendorClient,
    token: &str,
) -> Result<SnapshotDocument, VendorError> {
    let topology = topology::resolve(client, token).await?;
    let partials = fetch::fetch_all(client, token, &topology.inverter_serial).await;

    let degraded = [
        ("systemData", &partials.system_data),
        ("meterData", &partials.meter_data),
        ("settings", &partials.settings),
        ("account", &partials.account),
        ("emsData", &partials.ems_data),
        ("dataPoints", &partials.data_points),
        ("events", &partials.events),
        ("energyFlows", &partials.energy_flows),
        ("monthlyFlows", &partials.monthly_flows),
        ("sites", &partials.sites),
        ("evChargers", &partials.ev_chargers),
        ("smartDevices", &partials.smart_devices),
    ]
    .iter()
    .filter(|(_, partial)| partial.is_error())
    .map(|(name, _)| *name)
    .collect::<Vec<_>>();

    if !degraded.is_empty() {
        tracing::warn!(fields = ?degraded, "Snapshot assembled with degraded fields");
    }

    let normalized = normalize::normalize(
        partials.system_data.payload(),
        partials.data_points.payload(),
    );

    Ok(snapshot::assemble(topology, partials, normalized))
}
