//! Per-type value interpretation
//!
//! Turns the raw 16-bit integers of one sensor record into named, unit-correct
//! values plus any derived classification text. Both wire decoders share this
//! single dispatch.
//!
//! ```rust
//! use sensorframe_rs::interpret::{interpret, SensorValue};
//!
//! let out = interpret(1, 2345, 6010);
//! assert_eq!(out.value_names, vec!["temperature", "humidity"]);
//! assert_eq!(out.values[0], SensorValue::Numeric(23.45));
//! ```

pub mod soil;
pub mod weather;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EcScaling;
use crate::constants::*;
use crate::registry;

/// A single interpreted value: a physical measurement or a derived label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    Numeric(f64),
    Text(String),
}

impl SensorValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SensorValue::Numeric(v) => Some(*v),
            SensorValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SensorValue::Numeric(_) => None,
            SensorValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for SensorValue {
    fn from(v: f64) -> Self {
        SensorValue::Numeric(v)
    }
}

impl From<i32> for SensorValue {
    fn from(v: i32) -> Self {
        SensorValue::Numeric(f64::from(v))
    }
}

impl From<u32> for SensorValue {
    fn from(v: u32) -> Self {
        SensorValue::Numeric(f64::from(v))
    }
}

impl From<&str> for SensorValue {
    fn from(v: &str) -> Self {
        SensorValue::Text(v.to_string())
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::Numeric(v) => write!(f, "{v}"),
            SensorValue::Text(s) => f.write_str(s),
        }
    }
}

/// Values produced for one sensor, with a name per value in the same order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interpretation {
    pub values: Vec<SensorValue>,
    pub value_names: Vec<&'static str>,
}

impl Interpretation {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            values: Vec::with_capacity(n),
            value_names: Vec::with_capacity(n),
        }
    }

    /// Values of a registered type, named from its registry entry.
    pub(crate) fn for_type(type_code: u8, values: Vec<SensorValue>) -> Self {
        let names = registry::lookup(type_code).value_names;
        debug_assert_eq!(names.len(), values.len(), "value count for type {type_code}");
        Self {
            values,
            value_names: names.to_vec(),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: impl Into<SensorValue>) {
        self.value_names.push(name);
        self.values.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value by its semantic name
    pub fn get(&self, name: &str) -> Option<&SensorValue> {
        self.value_names
            .iter()
            .position(|n| *n == name)
            .and_then(|i| self.values.get(i))
    }
}

/// Scale a raw integer by a decimal divisor
pub(crate) fn scaled(raw: i32, divisor: f64) -> f64 {
    f64::from(raw) / divisor
}

/// Value interpreter with its scaling options
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    pub ec_scaling: EcScaling,
}

impl Interpreter {
    pub fn new(ec_scaling: EcScaling) -> Self {
        Self { ec_scaling }
    }

    /// Interpret the first two raw values of a sensor of `type_code`.
    ///
    /// Never fails: unregistered codes fall through to the generic branch,
    /// which scales by 1/100 in the modbus range (>= 11) and passes the raw
    /// integers through below it.
    pub fn interpret(&self, type_code: u8, raw_value1: i32, raw_value2: i32) -> Interpretation {
        match type_code {
            TYPE_SHT20 | TYPE_SHT20_MODBUS => Interpretation::for_type(
                type_code,
                vec![
                    scaled(raw_value1, 100.0).into(),
                    scaled(raw_value2, 100.0).into(),
                ],
            ),
            TYPE_TSL2591 => {
                Interpretation::for_type(type_code, vec![scaled(raw_value1, 10.0).into()])
            }
            TYPE_ADS1115 => {
                let ec = match self.ec_scaling {
                    EcScaling::Single => scaled(raw_value2, 100.0),
                    EcScaling::Double => scaled(raw_value2, 100.0) / 100.0,
                };
                Interpretation::for_type(type_code, vec![scaled(raw_value1, 100.0).into(), ec.into()])
            }
            TYPE_SCD30 => Interpretation::for_type(type_code, vec![raw_value1.into()]),
            TYPE_DS18B20 => {
                Interpretation::for_type(type_code, vec![scaled(raw_value1, 100.0).into()])
            }
            TYPE_WIND_DIRECTION => weather::wind_direction(raw_value1, raw_value2),
            TYPE_WIND_SPEED => weather::wind_speed(raw_value1),
            TYPE_PRECIPITATION => weather::precipitation(raw_value1, raw_value2),
            TYPE_SOIL => soil::soil(raw_value1, raw_value2),
            code if code >= MODBUS_TYPE_RANGE_START => {
                let mut out = Interpretation::with_capacity(2);
                out.push("value1", scaled(raw_value1, 100.0));
                out.push("value2", scaled(raw_value2, 100.0));
                out
            }
            _ => {
                let mut out = Interpretation::with_capacity(2);
                out.push("value1", raw_value1);
                out.push("value2", raw_value2);
                out
            }
        }
    }
}

/// Interpret with the default options (single EC scaling)
pub fn interpret(type_code: u8, raw_value1: i32, raw_value2: i32) -> Interpretation {
    Interpreter::default().interpret(type_code, raw_value1, raw_value2)
}
