//! Sensor Type Registry
//!
//! Static lookup table from the numeric sensor type code carried on the wire
//! to its display name, bus protocol class and ordered value names.
//!
//! ```rust
//! use sensorframe_rs::registry::{lookup, BusProtocol};
//!
//! let sht20 = lookup(1);
//! assert_eq!(sht20.display_name, "SHT20");
//! assert_eq!(sht20.bus_protocol, BusProtocol::I2c);
//!
//! // Unknown codes resolve to a sentinel instead of failing
//! assert_eq!(lookup(200).display_name, "UNKNOWN");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Bus a sensor is attached through on the field node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusProtocol {
    I2c,
    Modbus,
    Analog,
    Digital,
    Unknown,
}

impl BusProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusProtocol::I2c => "i2c",
            BusProtocol::Modbus => "modbus",
            BusProtocol::Analog => "analog",
            BusProtocol::Digital => "digital",
            BusProtocol::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BusProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry entry for one sensor type code
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTypeDescriptor {
    /// Type code as transmitted on the wire
    pub code: u8,
    /// Name used to build per-channel display names (e.g. "SHT20")
    pub display_name: &'static str,
    /// Bus protocol class
    pub bus_protocol: BusProtocol,
    /// Semantic names of the values this type reports, in order
    pub value_names: &'static [&'static str],
}

impl SensorTypeDescriptor {
    pub const fn new(
        code: u8,
        display_name: &'static str,
        bus_protocol: BusProtocol,
        value_names: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            display_name,
            bus_protocol,
            value_names,
        }
    }

    /// True for the sentinel returned for unregistered codes
    pub fn is_unknown(&self) -> bool {
        self.bus_protocol == BusProtocol::Unknown
    }
}

/// Sentinel returned by [`lookup`] for codes that are not registered.
pub static UNKNOWN_SENSOR_TYPE: SensorTypeDescriptor =
    SensorTypeDescriptor::new(0, "UNKNOWN", BusProtocol::Unknown, &[]);

/// Known sensor types keyed by type code
pub static SENSOR_TYPES: Lazy<BTreeMap<u8, SensorTypeDescriptor>> = Lazy::new(|| {
    use BusProtocol::*;

    let entries = [
        // ===== I2C / ONE-WIRE SENSORS (1-10) =====
        SensorTypeDescriptor::new(TYPE_SHT20, "SHT20", I2c, &["temperature", "humidity"]),
        SensorTypeDescriptor::new(TYPE_TSL2591, "TSL2591", I2c, &["light_level"]),
        SensorTypeDescriptor::new(TYPE_ADS1115, "ADS1115", I2c, &["ph", "ec"]),
        SensorTypeDescriptor::new(TYPE_SCD30, "SCD30", I2c, &["co2_ppm"]),
        SensorTypeDescriptor::new(TYPE_DS18B20, "DS18B20", Digital, &["temperature"]),
        // ===== MODBUS SENSORS (11+) =====
        SensorTypeDescriptor::new(
            TYPE_MODBUS_TEMP_HUMID,
            "온습도센서",
            Modbus,
            &["temperature", "humidity"],
        ),
        SensorTypeDescriptor::new(TYPE_MODBUS_PRESSURE, "압력센서", Modbus, &["pressure"]),
        SensorTypeDescriptor::new(TYPE_MODBUS_FLOW, "유량센서", Modbus, &["flow_rate"]),
        SensorTypeDescriptor::new(TYPE_MODBUS_RELAY, "릴레이모듈", Modbus, &["status"]),
        SensorTypeDescriptor::new(TYPE_MODBUS_ENERGY, "전력계", Modbus, &["voltage", "current"]),
        SensorTypeDescriptor::new(
            TYPE_WIND_DIRECTION,
            "풍향센서",
            Modbus,
            &["gear_direction", "degree_direction", "direction_text"],
        ),
        SensorTypeDescriptor::new(
            TYPE_WIND_SPEED,
            "풍속센서",
            Modbus,
            &["wind_speed_ms", "wind_scale", "wind_condition"],
        ),
        SensorTypeDescriptor::new(
            TYPE_PRECIPITATION,
            "강우강설센서",
            Modbus,
            &[
                "precip_status",
                "precip_status_text",
                "moisture_level",
                "moisture_intensity",
                "temperature",
                "humidity",
                "temp_status",
                "precip_icon",
            ],
        ),
        SensorTypeDescriptor::new(
            TYPE_SOIL,
            "토양센서",
            Modbus,
            &[
                "soil_humidity",
                "soil_temperature",
                "soil_ec",
                "soil_ph",
                "moisture_status",
                "ph_status",
                "ec_status",
            ],
        ),
        SensorTypeDescriptor::new(TYPE_SHT20_MODBUS, "SHT20", Modbus, &["temperature", "humidity"]),
    ];

    entries.into_iter().map(|d| (d.code, d)).collect()
});

/// Look up a sensor type, falling back to [`UNKNOWN_SENSOR_TYPE`].
pub fn lookup(code: u8) -> &'static SensorTypeDescriptor {
    SENSOR_TYPES.get(&code).unwrap_or(&UNKNOWN_SENSOR_TYPE)
}

/// Whether the code is registered
pub fn is_known(code: u8) -> bool {
    SENSOR_TYPES.contains_key(&code)
}

/// All registered descriptors in ascending code order
pub fn all() -> impl Iterator<Item = &'static SensorTypeDescriptor> {
    SENSOR_TYPES.values()
}
