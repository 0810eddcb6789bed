#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorframe_rs::decode_compact_json;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(batch) = decode_compact_json(text) {
            assert_eq!(batch.sensor_count, batch.sensors.len());
            let _ = batch.validate();
        }
    }
});
