//! # Hex Encoding/Decoding Utilities
//!
//! Scalar frames usually travel through logs, test fixtures and the CLI as
//! hex text. These helpers convert between that text and raw bytes and render
//! frames for debug output.
//!
//! ```rust
//! use sensorframe_rs::util::hex::{decode_hex, encode_hex, format_hex_compact};
//!
//! let frame = decode_hex("07 10 00 00 00 00 01 00").unwrap();
//! assert_eq!(frame[0], 0x07);
//! assert_eq!(encode_hex(&frame[..2]), "0710");
//! assert_eq!(format_hex_compact(&frame[..2]), "07 10");
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex text to bytes.
///
/// Whitespace and the usual byte separators (`:`, `-`, `,`) are ignored and an
/// optional `0x` prefix is accepted, so frames pasted from serial monitors
/// decode as-is.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = hex_str.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let cleaned: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ':' | '-' | ','))
        .collect();

    if cleaned.is_empty() {
        return Err(HexError::EmptyString);
    }

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Pretty-print a frame, one row per `bytes_per_line` bytes with an offset column.
pub fn pretty_hex(data: &[u8], bytes_per_line: usize) -> String {
    let width = bytes_per_line.max(1);
    data.chunks(width)
        .enumerate()
        .map(|(row, chunk)| format!("{:04x}: {}", row * width, format_hex_compact(chunk)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "07 10 00 00" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
