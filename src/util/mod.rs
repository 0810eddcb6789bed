//! # Utility Modules
//!
//! Hex helpers shared by the CLI, the debug logging in the frame decoder and
//! the test fixtures.

pub mod hex;

pub use hex::{decode_hex, encode_hex, format_hex_compact, pretty_hex, HexError};
