//! # Decoder Error Handling
//!
//! This module defines the SensorFrameError enum, which represents the error
//! types that can abort a decode call. Recoverable conditions (truncated
//! records, unknown sensor types, validation failures) are not errors; they
//! degrade to partial or generically interpreted results.

use thiserror::Error;

/// Represents the different error types that can occur in the decoder crate.
#[derive(Debug, Error)]
pub enum SensorFrameError {
    /// The scalar frame is shorter than its fixed header.
    #[error("Malformed frame: {len} bytes is shorter than the 8-byte header")]
    MalformedFrame { len: usize },

    /// The compact record does not have the `{d, t, c, s}` shape.
    #[error("Invalid compact record: {0}")]
    InvalidCompactRecord(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Indicates an invalid hexadecimal string was provided.
    #[error("Invalid hexadecimal string: {0}")]
    InvalidHexString(String),

    /// Decoder configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure while reading input or configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::util::hex::HexError> for SensorFrameError {
    fn from(err: crate::util::hex::HexError) -> Self {
        SensorFrameError::InvalidHexString(err.to_string())
    }
}
