#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorframe_rs::constants::{FRAME_CHECKSUM_LEN, FRAME_HEADER_LEN, FRAME_RECORD_LEN};
use sensorframe_rs::{Decoder, SensorFrameError};

fuzz_target!(|data: &[u8]| {
    match Decoder::default().decode_frame_at(data, 0) {
        Ok(batch) => {
            let declared = usize::from(data[6]);
            let fits = (data.len() - FRAME_HEADER_LEN).saturating_sub(FRAME_CHECKSUM_LEN)
                / FRAME_RECORD_LEN;
            assert_eq!(batch.sensor_count, declared.min(fits));
            assert_eq!(batch.sensor_count, batch.sensors.len());
            assert!(batch.validate().valid);
        }
        Err(SensorFrameError::MalformedFrame { len }) => assert!(len < FRAME_HEADER_LEN),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
