//! Unit normalization for the UI-facing schema.
//!
//! The vendor reports instantaneous power in watts; the UI schema is kW,
//! so every raw power field is divided by 1000. Percentages, temperatures,
//! voltages, and frequencies pass through unchanged. Daily totals embedded
//! in interval samples are already kWh and are not rescaled.
//!
//! Missing numeric fields default to 0 so `null` never reaches the UI
//! schema. The one exception is battery temperature, which stays absent
//! when the vendor omits it; 0°C would be a misleading reading.

use serde::Serialize;
use serde_json::Value;

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Real-time solar metrics in kW.
#[derive(Debug, Clone, Serialize)]
pub struct Solar {
    pub power: f64,
    /// Per-string array readings; `power` is rescaled to kW, the other
    /// fields (voltage, current) pass through as the vendor sent them.
    pub arrays: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Battery {
    pub percent: f64,
    pub power: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    pub power: f64,
    pub voltage: f64,
    pub frequency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Consumption {
    pub power: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inverter {
    pub temperature: f64,
    pub output_voltage: f64,
    pub output_frequency: f64,
    pub power: f64,
}

/// Day-to-date totals in kWh, taken from the last interval sample.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    pub solar: f64,
    pub consumption: f64,
    pub import: f64,
    pub export: f64,
    pub battery_charge: f64,
    pub battery_discharge: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerReading {
    pub power: f64,
}

/// One chart sample, chronological order preserved from upstream.
#[derive(Debug, Clone, Serialize)]
pub struct IntervalPoint {
    pub time: Value,
    pub solar: PowerReading,
    pub consumption: PowerReading,
    pub battery: PowerReading,
    pub grid: PowerReading,
}

/// The normalized real-time and historical fields of a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Normalized {
    pub solar: Solar,
    pub battery: Battery,
    pub grid: Grid,
    pub consumption: Consumption,
    pub inverter: Inverter,
    pub today_stats: TodayStats,
    pub data_points: Vec<IntervalPoint>,
    /// Vendor-reported sample time of the system-data payload.
    pub timestamp: Value,
}

fn num(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}

fn kw(value: Option<&Value>) -> f64 {
    num(value) / WATTS_PER_KILOWATT
}

fn normalize_array(array: &Value) -> Value {
    let mut out = array.clone();
    if let Some(obj) = out.as_object_mut() {
        obj.insert("power".to_string(), kw(array.get("power")).into());
    }
    out
}

/// Power for one category of an interval sample, in kW.
///
/// Two shapes occur across vendor responses: nested under a `power`
/// object (`point.power.solar.power`) or directly under the category
/// (`point.solar.power`). Both are accepted; normalize on read.
fn point_power(point: &Value, category: &str) -> PowerReading {
    let nested = point.pointer(&format!("/power/{category}/power"));
    let direct = point.pointer(&format!("/{category}/power"));
    PowerReading {
        power: kw(nested.or(direct)),
    }
}

fn normalize_point(point: &Value) -> IntervalPoint {
    IntervalPoint {
        time: point.get("time").cloned().unwrap_or(Value::Null),
        solar: point_power(point, "solar"),
        consumption: point_power(point, "consumption"),
        battery: point_power(point, "battery"),
        grid: point_power(point, "grid"),
    }
}

/// Reshape the raw system-data payload and interval series into the
/// stable kW/kWh schema.
///
/// Both inputs come from isolated fetches: `None` (errored or absent)
/// normalizes to an all-zero structure rather than failing.
pub fn normalize(system_data: Option<&Value>, data_points: Option<&Value>) -> Normalized {
    let d = system_data
        .and_then(|v| v.get("data"))
        .cloned()
        .unwrap_or(Value::Null);

    let solar = Solar {
        power: kw(d.pointer("/solar/power")),
        arrays: d
            .pointer("/solar/arrays")
            .and_then(Value::as_array)
            .map(|arrays| arrays.iter().map(normalize_array).collect())
            .unwrap_or_default(),
    };

    let battery = Battery {
        percent: num(d.pointer("/battery/percent")),
        power: kw(d.pointer("/battery/power")),
        temperature: d.pointer("/battery/temperature").and_then(Value::as_f64),
    };

    let grid = Grid {
        power: kw(d.pointer("/grid/power")),
        voltage: num(d.pointer("/grid/voltage")),
        frequency: num(d.pointer("/grid/frequency")),
    };

    // consumption is a bare number in some system-data payloads and a
    // {power} object in others; accept both.
    let consumption_watts = match d.get("consumption") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(other) => num(other.get("power")),
        None => 0.0,
    };
    let consumption = Consumption {
        power: consumption_watts / WATTS_PER_KILOWATT,
    };

    let inverter = Inverter {
        temperature: num(d.pointer("/inverter/temperature")),
        output_voltage: num(d.pointer("/inverter/output_voltage")),
        output_frequency: num(d.pointer("/inverter/output_frequency")),
        power: kw(d.pointer("/inverter/power")),
    };

    let points: Vec<Value> = data_points
        .and_then(|v| v.get("data"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    // Each interval sample embeds a running daily total; the last sample
    // holds the full day-to-date figure, already in kWh.
    let today = points
        .last()
        .and_then(|p| p.get("today"))
        .cloned()
        .unwrap_or(Value::Null);

    let today_stats = TodayStats {
        solar: num(today.get("solar")),
        consumption: num(today.get("consumption")),
        import: num(today.pointer("/grid/import")),
        export: num(today.pointer("/grid/export")),
        battery_charge: num(today.pointer("/battery/charge")),
        battery_discharge: num(today.pointer("/battery/discharge")),
    };

    let data_points = points.iter().map(normalize_point).collect();

    Normalized {
        solar,
        battery,
        grid,
        consumption,
        inverter,
        today_stats,
        data_points,
        timestamp: d.get("time").cloned().unwrap_or(Value::Null),
    }
}
