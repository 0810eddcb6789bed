//! Tests for the scalar binary frame decoder and the frame decode pipeline.

use sensorframe_rs::checksum::{append_trailer, verify_trailer};
use sensorframe_rs::constants::{
    FRAME_HEADER_LEN, FRAME_OFFSET_DEVICE_ID, FRAME_OFFSET_SENSOR_COUNT, FRAME_RECORD_LEN,
};
use sensorframe_rs::frame::decode_frame_records;
use sensorframe_rs::{
    decode_frame, decode_frame_with, ChecksumStatus, Decoder, DecoderConfig, SensorFrameError,
    SensorValue,
};

/// Builds a frame body (no trailer) from `(id, type, address, channel, raw1, raw2)` tuples.
fn frame_body(device_id: u8, records: &[(u8, u8, u8, u8, u16, u16)]) -> Vec<u8> {
    let mut bytes = vec![0u8; FRAME_HEADER_LEN];
    bytes[FRAME_OFFSET_DEVICE_ID] = device_id;
    bytes[1] = 0x10;
    bytes[2..6].copy_from_slice(&0x6553_F100u32.to_be_bytes());
    bytes[FRAME_OFFSET_SENSOR_COUNT] = records.len() as u8;

    for &(id, type_code, address, channel, raw1, raw2) in records {
        bytes.extend_from_slice(&[id, type_code, address, channel]);
        bytes.extend_from_slice(&raw1.to_be_bytes());
        bytes.extend_from_slice(&raw2.to_be_bytes());
        bytes.extend_from_slice(&[0, 0]);
    }
    bytes
}

fn frame(device_id: u8, records: &[(u8, u8, u8, u8, u16, u16)]) -> Vec<u8> {
    let mut bytes = frame_body(device_id, records);
    append_trailer(&mut bytes);
    bytes
}

/// Tests that a two-sensor frame decodes with its header fields.
#[test]
fn test_decode_two_sensor_frame() {
    let bytes = frame(3, &[(1, 1, 0x21, 1, 2345, 6010), (2, 5, 0x45, 2, 1875, 0)]);
    let decoded = decode_frame_records(&bytes).unwrap();

    assert_eq!(decoded.header.device_id, 3);
    assert_eq!(decoded.header.function_code, 0x10);
    assert_eq!(decoded.header.frame_timestamp, 0x6553_F100);
    assert_eq!(decoded.header.sensor_count, 2);
    assert_eq!(decoded.records.len(), 2);
    assert_eq!(decoded.records[1].type_code, 5);
    assert_eq!(decoded.records[1].raw_values, vec![1875, 0]);
}

/// Tests that frames shorter than the header are rejected and produce no batch.
#[test]
fn test_short_frame_is_malformed() {
    let result = decode_frame(&[0x01, 0x10, 0x00]);
    assert!(matches!(result, Err(SensorFrameError::MalformedFrame { len: 3 })));
    assert!(decode_frame(&[]).is_err());
}

/// Tests that a header-only frame is a valid empty batch.
#[test]
fn test_header_only_frame() {
    let batch = decode_frame(&frame(9, &[])).unwrap();
    assert_eq!(batch.device_id, "ARDUINO_MEGA_009");
    assert_eq!(batch.sensor_count, 0);
    assert!(batch.sensors.is_empty());
    assert_eq!(batch.checksum, Some(ChecksumStatus::Valid));
}

/// Tests that frame device ids are labelled by default and can be kept bare or re-prefixed.
#[test]
fn test_device_id_labels() {
    let bytes = frame(42, &[]);
    assert_eq!(decode_frame(&bytes).unwrap().device_id, "ARDUINO_MEGA_042");

    let bare = DecoderConfig {
        device_label_prefix: None,
        ..DecoderConfig::default()
    };
    assert_eq!(decode_frame_with(&bytes, &bare).unwrap().device_id, "42");

    let custom = DecoderConfig::from_json_str(r#"{"device_label_prefix": "NODE_"}"#).unwrap();
    assert_eq!(decode_frame_with(&bytes, &custom).unwrap().device_id, "NODE_042");
}

/// Tests that a frame declaring more sensors than it carries yields a partial batch.
#[test]
fn test_overstated_sensor_count() {
    let mut bytes = frame_body(4, &[(1, 1, 0x21, 1, 2000, 5000), (2, 4, 0x24, 1, 415, 0)]);
    bytes[FRAME_OFFSET_SENSOR_COUNT] = 6;
    append_trailer(&mut bytes);

    let batch = decode_frame(&bytes).unwrap();
    assert_eq!(batch.sensor_count, 2);
    assert_eq!(batch.sensors[1].display_name, "SCD30_CH1");
}

/// Tests that the decoder stops before the trailing checksum bytes.
#[test]
fn test_stops_before_trailer() {
    let bytes = frame(1, &[(1, 1, 0x21, 1, 1, 2)]);
    // drop one byte: the record now overlaps the trailer
    let cut = &bytes[..FRAME_HEADER_LEN + FRAME_RECORD_LEN + 1];
    let decoded = decode_frame_records(cut).unwrap();
    assert!(decoded.records.is_empty());
    assert!(decoded.truncated);
}

/// Tests that the frame timestamp is ignored in favour of the receipt time.
#[test]
fn test_receipt_time_is_used() {
    let bytes = frame(1, &[(1, 1, 0x21, 1, 1, 2)]);
    let batch = Decoder::default().decode_frame_at(&bytes, 42).unwrap();
    assert_eq!(batch.timestamp, 42);

    let live = decode_frame(&bytes).unwrap();
    assert!(live.timestamp > 1_600_000_000_000);
}

/// Tests that a bad checksum is reported on the batch without rejecting it.
#[test]
fn test_checksum_mismatch_is_reported() {
    let mut bytes = frame_body(2, &[(1, 1, 0x21, 1, 2500, 5000)]);
    bytes.extend_from_slice(&[0x00, 0x00]);
    let status = verify_trailer(&bytes);
    assert!(matches!(status, ChecksumStatus::Mismatch { received: 0, .. }));

    let batch = decode_frame(&bytes).unwrap();
    assert_eq!(batch.sensor_count, 1);
    assert_eq!(batch.checksum, Some(status));
    assert!(batch.validate().valid);
}

/// Tests that interpretation and renumbering run on frame input.
#[test]
fn test_frame_values_and_labels() {
    let bytes = frame(
        7,
        &[
            (1, 1, 0x21, 3, 2345, 6010),
            (2, 1, 0x21, 1, 2100, 5500),
            (3, 21, 0x35, 1, 1990, 7100),
        ],
    );
    let batch = decode_frame(&bytes).unwrap();

    assert_eq!(batch.device_id, "ARDUINO_MEGA_007");
    let names: Vec<&str> = batch.sensors.iter().map(|s| s.display_name.as_str()).collect();
    assert_eq!(names, vec!["SHT20_CH1", "SHT20_CH2", "SHT20_CH1"]);
    assert_eq!(batch.sensors[0].physical_channel, 3);
    assert_eq!(batch.sensors[0].values[0], SensorValue::Numeric(23.45));
    assert_eq!(batch.sensors[2].value("humidity"), Some(&SensorValue::Numeric(71.0)));
}

mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Record count is min(declared, records that fit before the trailer).
        #[test]
        fn prop_record_count(
            declared in 0u8..=12,
            body in prop::collection::vec(any::<u8>(), 0..140),
        ) {
            let mut bytes = vec![1, 0x10, 0, 0, 0, 0, declared, 0];
            bytes.extend_from_slice(&body);

            let available = bytes.len().saturating_sub(FRAME_HEADER_LEN + 2) / FRAME_RECORD_LEN;
            let expected = usize::from(declared).min(available);

            let decoded = decode_frame_records(&bytes).unwrap();
            prop_assert_eq!(decoded.records.len(), expected);
            prop_assert_eq!(decoded.truncated, expected < usize::from(declared));

            let batch = decode_frame(&bytes).unwrap();
            prop_assert_eq!(batch.sensor_count, expected);
            prop_assert_eq!(batch.sensors.len(), expected);
        }

        /// Any input shorter than the header is rejected; anything longer decodes.
        #[test]
        fn prop_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
            let result = decode_frame(&bytes);
            prop_assert_eq!(result.is_err(), bytes.len() < FRAME_HEADER_LEN);
        }
    }
}
