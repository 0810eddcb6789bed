//! # Compact Array Decoder
//!
//! The compact form is the JSON shape stored and relayed by the backend:
//!
//! ```json
//! { "d": "ARDUINO_MEGA_007", "t": 1700000000000, "c": 2,
//!   "s": [[1, 1, 33, 1, 2512, 4833], [2, 17, 49, 1, 35]] }
//! ```
//!
//! Each entry is `[sensorId, typeCode, combinedAddress, physicalChannel, ...rawValues]`.
//! Entries that cannot be read are skipped; the rest of the batch still decodes.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::batch::{CombinedAddress, RawSensorRecord};
use crate::constants::COMPACT_ENTRY_MIN_LEN;
use crate::error::SensorFrameError;

/// Device id as found in compact records: stored ids are text, live ids may be numeric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeviceRef {
    Text(String),
    Number(u64),
}

impl std::fmt::Display for DeviceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceRef::Text(s) => f.write_str(s),
            DeviceRef::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A compact telemetry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactRecord {
    #[serde(rename = "d")]
    pub device_id: DeviceRef,
    /// Epoch milliseconds
    #[serde(rename = "t")]
    pub timestamp: i64,
    /// Declared sensor count
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub sensor_count: Option<usize>,
    /// Per-sensor entries, kept as raw JSON so one bad entry cannot reject the record
    #[serde(rename = "s")]
    pub sensors: Vec<Value>,
}

impl CompactRecord {
    pub fn from_json(json: &str) -> Result<Self, SensorFrameError> {
        serde_json::from_str(json).map_err(|e| SensorFrameError::InvalidCompactRecord(e.to_string()))
    }
}

fn header_byte(entry: &[Value], index: usize) -> Option<u8> {
    entry
        .get(index)
        .and_then(Value::as_i64)
        .and_then(|v| u8::try_from(v).ok())
}

/// Reads one compact entry, or `None` if it is not an array of at least four
/// integers or a field is out of range.
pub fn parse_entry(entry: &Value) -> Option<RawSensorRecord> {
    let entry = entry.as_array()?;
    if entry.len() < COMPACT_ENTRY_MIN_LEN {
        return None;
    }

    let raw_values = entry[COMPACT_ENTRY_MIN_LEN..]
        .iter()
        .map(|v| v.as_i64().and_then(|v| i32::try_from(v).ok()))
        .collect::<Option<Vec<_>>>()?;

    Some(RawSensorRecord {
        sensor_id: header_byte(entry, 0)?,
        type_code: header_byte(entry, 1)?,
        combined_address: CombinedAddress(header_byte(entry, 2)?),
        physical_channel: header_byte(entry, 3)?,
        raw_values,
    })
}

/// Decodes every readable entry of a compact record, in order.
pub fn decode_compact_records(record: &CompactRecord) -> Vec<RawSensorRecord> {
    let mut records = Vec::with_capacity(record.sensors.len());

    for (index, entry) in record.sensors.iter().enumerate() {
        match parse_entry(entry) {
            Some(raw) => {
                if raw.raw_values.len() > 2 {
                    debug!(
                        "entry #{index}: {} raw values, only the first two are interpreted",
                        raw.raw_values.len()
                    );
                }
                records.push(raw);
            }
            None => warn!("device {}: skipping unreadable entry #{index}: {entry}", record.device_id),
        }
    }

    if let Some(declared) = record.sensor_count {
        if declared != records.len() {
            warn!(
                "device {}: declared {} sensors, decoded {}",
                record.device_id,
                declared,
                records.len()
            );
        }
    }

    records
}
