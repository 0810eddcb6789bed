//! # sensorframe-rs - Field Node Sensor Telemetry Decoder
//!
//! The sensorframe-rs crate turns the raw telemetry emitted by field nodes
//! (environmental and agricultural sensor hubs) into structured, unit-correct,
//! human-labelled readings.
//!
//! ## Features
//!
//! - Decode the dense binary scalar frame (8-byte header, 10-byte records, CRC-16 trailer)
//! - Decode the compact numeric-array JSON form (`{d, t, c, s}`)
//! - Interpret raw registers per sensor type, including bit-packed weather and soil types
//! - Renumber channels into per-type friendly ordinals (`SHT20_CH1`, `SHT20_CH2`, ...)
//! - Structurally validate decoded batches without rejecting them
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! sensorframe-rs = "0.3.0"
//! ```
//!
//! ```rust
//! use sensorframe_rs::decode_compact_json;
//!
//! let batch = decode_compact_json(
//!     r#"{"d":"ARDUINO_MEGA_001","t":1700000000000,"c":1,"s":[[1,1,33,1,2512,4833]]}"#,
//! )?;
//! assert_eq!(batch.sensors[0].display_name, "SHT20_CH1");
//! assert!(batch.validate().valid);
//! # Ok::<(), sensorframe_rs::SensorFrameError>(())
//! ```
//!
//! Decoding is synchronous and stateless; the type registry is a read-only
//! static, so decode calls may run in parallel without synchronization.

pub mod batch;
pub mod checksum;
pub mod compact;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod format;
pub mod frame;
pub mod interpret;
pub mod logging;
pub mod registry;
pub mod renumber;
pub mod util;
pub mod validate;

pub use crate::batch::{
    CombinedAddress, InterpretedSensor, ProtocolSummary, RawSensorRecord, SensorBatch,
};
pub use crate::checksum::ChecksumStatus;
pub use crate::compact::{CompactRecord, DeviceRef};
pub use crate::config::{DecoderConfig, EcScaling};
pub use crate::decoder::Decoder;
pub use crate::error::SensorFrameError;
pub use crate::interpret::{interpret, Interpretation, Interpreter, SensorValue};
pub use crate::logging::{init_logger, log_info};
pub use crate::registry::{lookup, BusProtocol, SensorTypeDescriptor};
pub use crate::validate::{validate, validate_value, ValidationReport};

/// Decode a scalar binary frame with the default configuration.
///
/// # Arguments
/// * `bytes` - The complete frame, including the checksum trailer
///
/// # Returns
/// * `Ok(SensorBatch)` - Decoded batch, stamped with the receipt time
/// * `Err(SensorFrameError::MalformedFrame)` - Frame shorter than its header
pub fn decode_frame(bytes: &[u8]) -> Result<SensorBatch, SensorFrameError> {
    Decoder::default().decode_frame(bytes)
}

/// Decode a scalar binary frame with an explicit configuration.
pub fn decode_frame_with(
    bytes: &[u8],
    config: &DecoderConfig,
) -> Result<SensorBatch, SensorFrameError> {
    Decoder::new(config.clone()).decode_frame(bytes)
}

/// Decode a compact record with the default configuration.
///
/// Never fails: unreadable entries are skipped.
pub fn decode_compact(record: &CompactRecord) -> SensorBatch {
    Decoder::default().decode_compact(record)
}

/// Decode a compact record with an explicit configuration.
pub fn decode_compact_with(record: &CompactRecord, config: &DecoderConfig) -> SensorBatch {
    Decoder::new(config.clone()).decode_compact(record)
}

/// Parse and decode a compact record given as JSON text.
///
/// # Returns
/// * `Ok(SensorBatch)` - Decoded batch
/// * `Err(SensorFrameError::InvalidCompactRecord)` - Text is not a `{d, t, c, s}` record
pub fn decode_compact_json(json: &str) -> Result<SensorBatch, SensorFrameError> {
    Decoder::default().decode_compact_json(json)
}
