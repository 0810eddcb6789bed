//! Presentation helpers for decoded values

use crate::constants::*;
use crate::interpret::SensorValue;

/// Render one value with the unit its type and position imply.
///
/// Text values pass through unchanged.
pub fn format_value(value: &SensorValue, type_code: u8, index: usize) -> String {
    let v = match value {
        SensorValue::Text(s) => return s.clone(),
        SensorValue::Numeric(v) => *v,
    };

    match (type_code, index) {
        (TYPE_SHT20 | TYPE_SHT20_MODBUS, 0) => format!("{v:.1}°C"),
        (TYPE_SHT20 | TYPE_SHT20_MODBUS, _) => format!("{v:.1}%"),
        (TYPE_TSL2591, _) => format!("{v:.0} lux"),
        (TYPE_ADS1115, 0) => format!("{v:.2}"),
        (TYPE_ADS1115, _) => format!("{v:.2} dS/m"),
        (TYPE_SCD30, _) => format!("{v:.0} ppm"),
        (TYPE_DS18B20, _) => format!("{v:.1}°C"),
        (TYPE_WIND_SPEED, 0) => format!("{v:.1} m/s"),
        (TYPE_WIND_SPEED, _) => value.to_string(),
        (TYPE_SOIL, 0) => format!("{v:.1}%"),
        (TYPE_SOIL, 1) => format!("{v:.1}°C"),
        (TYPE_SOIL, 2) => format!("{v:.2} dS/m"),
        (TYPE_SOIL, 3) => format!("{v:.2}"),
        (TYPE_SOIL, _) => value.to_string(),
        _ => format!("{v:.2}"),
    }
}

/// Device label: `{prefix}{id}` with the id zero-padded to three digits
pub fn format_device_id(id: impl std::fmt::Display, prefix: &str) -> String {
    format!("{prefix}{:0>3}", id.to_string())
}
