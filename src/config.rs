//! Decoder configuration
//!
//! All fields have defaults, so a config file only needs the keys it changes:
//!
//! ```json
//! { "ec_scaling": "double", "device_label_prefix": "NODE_" }
//! ```
//!
//! `"device_label_prefix": null` keeps numeric device ids bare.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DEVICE_LABEL_PREFIX;
use crate::error::SensorFrameError;

/// Divisor applied to the raw EC register of the ADS1115 front end (type 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcScaling {
    /// EC = raw / 100
    #[default]
    Single,
    /// EC = raw / 100 / 100, as older binary-frame consumers expect
    Double,
}

impl FromStr for EcScaling {
    type Err = SensorFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(EcScaling::Single),
            "double" => Ok(EcScaling::Double),
            other => Err(SensorFrameError::Config(format!(
                "unknown EC scaling '{other}', expected 'single' or 'double'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub ec_scaling: EcScaling,
    /// Render numeric device ids as `{prefix}{id:03}`; `None` keeps the bare number
    pub device_label_prefix: Option<String>,
    /// Check the CRC-16 trailer of scalar frames and record the result
    pub verify_checksum: bool,
    /// Assign per-type friendly channels; when off the physical channel is kept
    pub renumber_channels: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            ec_scaling: EcScaling::Single,
            device_label_prefix: Some(DEFAULT_DEVICE_LABEL_PREFIX.to_string()),
            verify_checksum: true,
            renumber_channels: true,
        }
    }
}

impl DecoderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SensorFrameError> {
        serde_json::from_str(json).map_err(|e| SensorFrameError::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SensorFrameError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| SensorFrameError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = DecoderConfig::from_json_str(r#"{"ec_scaling": "double"}"#).unwrap();
        assert_eq!(config.ec_scaling, EcScaling::Double);
        assert!(config.verify_checksum);
        assert!(config.renumber_channels);
        assert_eq!(config.device_label_prefix.as_deref(), Some("ARDUINO_MEGA_"));
    }

    #[test]
    fn test_null_prefix_disables_labels() {
        let config = DecoderConfig::from_json_str(r#"{"device_label_prefix": null}"#).unwrap();
        assert_eq!(config.device_label_prefix, None);
    }

    #[test]
    fn test_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"device_label_prefix": "NODE_", "renumber_channels": false}}"#
        )
        .unwrap();

        let config = DecoderConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.device_label_prefix.as_deref(), Some("NODE_"));
        assert!(!config.renumber_channels);
        assert_eq!(config.ec_scaling, EcScaling::Single);
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            DecoderConfig::from_json_str(r#"{"ec_scaling": "triple"}"#),
            Err(SensorFrameError::Config(_))
        ));
        assert!(DecoderConfig::from_json_file("/nonexistent/decoder.json").is_err());
    }

    #[test]
    fn test_ec_scaling_from_str() {
        assert_eq!("Double".parse::<EcScaling>().unwrap(), EcScaling::Double);
        assert!("x".parse::<EcScaling>().is_err());
    }
}
