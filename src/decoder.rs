//! Decode pipeline
//!
//! Both wire forms go through the same steps:
//!
//! 1. wire decoder ([`frame`](crate::frame) or [`compact`](crate::compact)) to raw records
//! 2. [`Interpreter`] to named values
//! 3. [`renumber`](crate::renumber) to friendly channels and display names
//!
//! Scalar frames additionally have their CRC-16 trailer checked.

use chrono::Utc;
use log::{debug, warn};

use crate::batch::{InterpretedSensor, RawSensorRecord, SensorBatch};
use crate::checksum::{self, ChecksumStatus};
use crate::compact::{self, CompactRecord, DeviceRef};
use crate::config::DecoderConfig;
use crate::error::SensorFrameError;
use crate::format::format_device_id;
use crate::frame;
use crate::interpret::Interpreter;
use crate::registry;
use crate::renumber;

/// Stateless decoder; one instance may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a scalar frame, stamping it with the current time.
    pub fn decode_frame(&self, bytes: &[u8]) -> Result<SensorBatch, SensorFrameError> {
        self.decode_frame_at(bytes, Utc::now().timestamp_millis())
    }

    /// Decode a scalar frame received at `received_at_ms` (epoch millis).
    ///
    /// The frame's own timestamp field is not used.
    pub fn decode_frame_at(
        &self,
        bytes: &[u8],
        received_at_ms: i64,
    ) -> Result<SensorBatch, SensorFrameError> {
        let decoded = frame::decode_frame_records(bytes)?;

        let device_id = match &self.config.device_label_prefix {
            Some(prefix) => format_device_id(decoded.header.device_id, prefix),
            None => decoded.header.device_id.to_string(),
        };

        let batch = SensorBatch::new(device_id, received_at_ms, self.interpret_all(&decoded.records));

        if !self.config.verify_checksum {
            return Ok(batch);
        }

        let status = checksum::verify_trailer(bytes);
        if let ChecksumStatus::Mismatch {
            received,
            calculated,
        } = status
        {
            warn!(
                "device {}: checksum mismatch, received 0x{received:04X}, calculated 0x{calculated:04X}",
                batch.device_id
            );
        }
        Ok(batch.with_checksum(status))
    }

    /// Decode a compact record.
    pub fn decode_compact(&self, record: &CompactRecord) -> SensorBatch {
        let raw = compact::decode_compact_records(record);

        let device_id = match (&record.device_id, &self.config.device_label_prefix) {
            (DeviceRef::Number(id), Some(prefix)) => format_device_id(id, prefix),
            (id, _) => id.to_string(),
        };

        SensorBatch::new(device_id, record.timestamp, self.interpret_all(&raw))
    }

    /// Parse and decode a compact record given as JSON text.
    pub fn decode_compact_json(&self, json: &str) -> Result<SensorBatch, SensorFrameError> {
        let record = CompactRecord::from_json(json)?;
        Ok(self.decode_compact(&record))
    }

    fn interpret_all(&self, records: &[RawSensorRecord]) -> Vec<InterpretedSensor> {
        let interpreter = Interpreter::new(self.config.ec_scaling);

        let sensors: Vec<InterpretedSensor> = records
            .iter()
            .map(|record| {
                if !registry::is_known(record.type_code) {
                    debug!(
                        "sensor {}: unknown type {}, using generic interpretation",
                        record.sensor_id, record.type_code
                    );
                }
                let values =
                    interpreter.interpret(record.type_code, record.raw_value1(), record.raw_value2());
                InterpretedSensor::new(record, values)
            })
            .collect();

        if self.config.renumber_channels {
            renumber::renumber(sensors)
        } else {
            sensors
        }
    }
}
