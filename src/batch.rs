//! Decoded telemetry data model
//!
//! [`RawSensorRecord`] is what the wire decoders produce; [`InterpretedSensor`]
//! is a record after value interpretation and channel renumbering, and
//! [`SensorBatch`] is the unit handed to storage, alerting and rendering.

use serde::{Deserialize, Serialize};

use crate::checksum::ChecksumStatus;
use crate::constants::{COMBINED_ADDRESS_POSITION_SHIFT, COMBINED_ADDRESS_SUB_TYPE_MASK};
use crate::interpret::{Interpretation, SensorValue};
use crate::registry::{self, BusProtocol};
use crate::validate::{self, ValidationReport};

/// Combined address byte: sub-type code in bits 4..0, bus position in bits 7..5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinedAddress(pub u8);

impl CombinedAddress {
    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn sub_type(&self) -> u8 {
        self.0 & COMBINED_ADDRESS_SUB_TYPE_MASK
    }

    pub fn bus_position(&self) -> u8 {
        self.0 >> COMBINED_ADDRESS_POSITION_SHIFT
    }
}

/// One sensor record as carried on the wire, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSensorRecord {
    pub sensor_id: u8,
    pub type_code: u8,
    pub combined_address: CombinedAddress,
    /// Bus position 1..6 assigned by the node
    pub physical_channel: u8,
    /// Raw register values in wire order; scalar frames always carry two
    pub raw_values: Vec<i32>,
}

impl RawSensorRecord {
    pub fn raw_value1(&self) -> i32 {
        self.raw_values.first().copied().unwrap_or(0)
    }

    pub fn raw_value2(&self) -> i32 {
        self.raw_values.get(1).copied().unwrap_or(0)
    }
}

/// A sensor after value interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretedSensor {
    pub sensor_id: u8,
    pub type_code: u8,
    pub bus_protocol: BusProtocol,
    pub combined_address: CombinedAddress,
    pub physical_channel: u8,
    /// Per-type ordinal 1..N, set by the renumbering pass
    pub friendly_channel: u32,
    pub active: bool,
    pub values: Vec<SensorValue>,
    pub value_names: Vec<String>,
    /// `{type name}_CH{friendly channel}`
    pub display_name: String,
}

impl InterpretedSensor {
    /// Build from a raw record and its interpretation. The friendly channel
    /// starts out equal to the physical one.
    pub fn new(record: &RawSensorRecord, interpretation: Interpretation) -> Self {
        let descriptor = registry::lookup(record.type_code);
        let friendly_channel = u32::from(record.physical_channel);
        Self {
            sensor_id: record.sensor_id,
            type_code: record.type_code,
            bus_protocol: descriptor.bus_protocol,
            combined_address: record.combined_address,
            physical_channel: record.physical_channel,
            friendly_channel,
            active: !interpretation.is_empty(),
            values: interpretation.values,
            value_names: interpretation
                .value_names
                .into_iter()
                .map(str::to_string)
                .collect(),
            display_name: format!("{}_CH{}", descriptor.display_name, friendly_channel),
        }
    }

    /// Value by its semantic name
    pub fn value(&self, name: &str) -> Option<&SensorValue> {
        self.value_names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i))
    }
}

/// Sensor counts per bus protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProtocolSummary {
    pub i2c: usize,
    pub modbus: usize,
    pub analog: usize,
    pub digital: usize,
    pub unknown: usize,
}

/// One decoded telemetry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorBatch {
    pub device_id: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub sensor_count: usize,
    pub sensors: Vec<InterpretedSensor>,
    /// Outcome of the frame trailer check; compact records carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<ChecksumStatus>,
}

impl SensorBatch {
    pub fn new(device_id: String, timestamp: i64, sensors: Vec<InterpretedSensor>) -> Self {
        Self {
            device_id,
            timestamp,
            sensor_count: sensors.len(),
            sensors,
            checksum: None,
        }
    }

    pub fn with_checksum(mut self, status: ChecksumStatus) -> Self {
        self.checksum = Some(status);
        self
    }

    pub fn protocol_summary(&self) -> ProtocolSummary {
        self.sensors
            .iter()
            .fold(ProtocolSummary::default(), |mut summary, sensor| {
                match sensor.bus_protocol {
                    BusProtocol::I2c => summary.i2c += 1,
                    BusProtocol::Modbus => summary.modbus += 1,
                    BusProtocol::Analog => summary.analog += 1,
                    BusProtocol::Digital => summary.digital += 1,
                    BusProtocol::Unknown => summary.unknown += 1,
                }
                summary
            })
    }

    /// Find a sensor by its display name (e.g. "SHT20_CH2")
    pub fn sensor(&self, display_name: &str) -> Option<&InterpretedSensor> {
        self.sensors.iter().find(|s| s.display_name == display_name)
    }

    /// Structural check of the batch as it will be serialized downstream
    pub fn validate(&self) -> ValidationReport {
        validate::validate(self)
    }
}
