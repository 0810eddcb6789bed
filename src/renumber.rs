//! Channel renumbering
//!
//! Physical channels repeat across independent sub-boards, so they are not a
//! usable label once a node carries several sensors of one type. This pass
//! gives every sensor a per-type ordinal (1..N, in input order) and rebuilds
//! its display name from it. Sensors are never reordered, dropped or
//! duplicated.

use std::collections::HashMap;

use crate::batch::InterpretedSensor;
use crate::registry;

/// `{type name}_CH{channel}`
pub fn display_name(type_code: u8, channel: u32) -> String {
    format!("{}_CH{}", registry::lookup(type_code).display_name, channel)
}

/// Assign friendly channels in place.
pub fn renumber_in_place(sensors: &mut [InterpretedSensor]) {
    let mut counters: HashMap<u8, u32> = HashMap::new();

    for sensor in sensors.iter_mut() {
        let counter = counters.entry(sensor.type_code).or_insert(0);
        *counter += 1;
        sensor.friendly_channel = *counter;
        sensor.display_name = display_name(sensor.type_code, *counter);
    }
}

/// Assign friendly channels, returning the renamed sensors in the same order.
pub fn renumber(mut sensors: Vec<InterpretedSensor>) -> Vec<InterpretedSensor> {
    renumber_in_place(&mut sensors);
    sensors
}
