//! Captured scalar frames from field nodes with their expected decoded form.

use sensorframe_rs::util::hex::decode_hex;
use sensorframe_rs::{ChecksumStatus, Decoder, SensorBatch, SensorValue};

const GREENHOUSE_HEX: &str = "01106553F1000400010121010929177A00000201410208A21996000003032301028A00B4000004042401032C00000000460A";

const WEATHER_MAST_HEX: &str = "0C106553F10003000110300100090064000002113101002300000000031232011640413C0000428D";

const SOIL_STATION_HEX: &str = "05106553F100030001133301463232410000021333011E3C9650000003052502075300000000E766";

const RECEIVED_AT: i64 = 1_700_000_000_000;

fn decode(hex: &str) -> SensorBatch {
    let bytes = decode_hex(hex).unwrap();
    match Decoder::default().decode_frame_at(&bytes, RECEIVED_AT) {
        Ok(batch) => batch,
        Err(e) => panic!("Failed to decode: {:?}", e),
    }
}

fn text(s: &str) -> SensorValue {
    SensorValue::Text(s.to_string())
}

#[test]
fn test_greenhouse_node() {
    let batch = decode(GREENHOUSE_HEX);

    assert_eq!(batch.device_id, "ARDUINO_MEGA_001");
    assert_eq!(batch.timestamp, RECEIVED_AT);
    assert_eq!(batch.sensor_count, 4);
    assert_eq!(batch.checksum, Some(ChecksumStatus::Valid));

    let sht_ch2 = batch.sensor("SHT20_CH2").unwrap();
    assert_eq!(sht_ch2.physical_channel, 2);
    assert_eq!(sht_ch2.combined_address.bus_position(), 2);
    assert_eq!(sht_ch2.combined_address.sub_type(), 1);
    assert_eq!(sht_ch2.values, vec![SensorValue::Numeric(22.1), SensorValue::Numeric(65.5)]);

    let ph_ec = batch.sensor("ADS1115_CH1").unwrap();
    assert_eq!(ph_ec.values, vec![SensorValue::Numeric(6.5), SensorValue::Numeric(1.8)]);

    let co2 = batch.sensor("SCD30_CH1").unwrap();
    assert_eq!(co2.values, vec![SensorValue::Numeric(812.0)]);

    let summary = batch.protocol_summary();
    assert_eq!((summary.i2c, summary.modbus), (4, 0));
}

#[test]
fn test_weather_mast() {
    let batch = decode(WEATHER_MAST_HEX);

    assert_eq!(batch.device_id, "ARDUINO_MEGA_012");
    assert_eq!(batch.checksum, Some(ChecksumStatus::Valid));

    let direction = batch.sensor("풍향센서_CH1").unwrap();
    assert_eq!(
        direction.values,
        vec![SensorValue::Numeric(9.0), SensorValue::Numeric(100.0), text("동풍(E)")]
    );

    let speed = batch.sensor("풍속센서_CH1").unwrap();
    assert_eq!(
        speed.values,
        vec![SensorValue::Numeric(3.5), text("산들바람"), text("나뭇잎이 흔들림")]
    );

    let precip = batch.sensor("강우강설센서_CH1").unwrap();
    assert_eq!(
        precip.values,
        vec![
            SensorValue::Numeric(1.0),
            text("강우"),
            SensorValue::Numeric(1600.0),
            text("보통"),
            SensorValue::Numeric(25.0),
            SensorValue::Numeric(60.0),
            text("적정"),
            text("rain.png"),
        ]
    );
    assert_eq!(batch.protocol_summary().modbus, 3);
}

#[test]
fn test_soil_station_repeated_channel() {
    let batch = decode(SOIL_STATION_HEX);

    // both probes sit on physical channel 1 of different sub-boards
    let first = batch.sensor("토양센서_CH1").unwrap();
    let second = batch.sensor("토양센서_CH2").unwrap();
    assert_eq!(first.physical_channel, second.physical_channel);

    assert_eq!(
        first.values,
        vec![
            SensorValue::Numeric(70.0),
            SensorValue::Numeric(10.0),
            SensorValue::Numeric(50.0),
            SensorValue::Numeric(6.5),
            text("적정"),
            text("중성"),
            text("낮음"),
        ]
    );
    assert_eq!(
        second.values,
        vec![
            SensorValue::Numeric(30.0),
            SensorValue::Numeric(20.0),
            SensorValue::Numeric(150.0),
            SensorValue::Numeric(8.0),
            text("건조"),
            text("알칼리"),
            text("보통"),
        ]
    );

    let probe = batch.sensor("DS18B20_CH1").unwrap();
    assert_eq!(probe.physical_channel, 2);
    assert_eq!(probe.values, vec![SensorValue::Numeric(18.75)]);
    assert_eq!(batch.protocol_summary().digital, 1);
}

#[test]
fn test_golden_json_output() {
    let batch = decode(SOIL_STATION_HEX);
    let json = serde_json::to_value(&batch).unwrap();

    assert_eq!(json["deviceId"], "ARDUINO_MEGA_005");
    assert_eq!(json["checksum"]["status"], "valid");
    assert_eq!(json["sensors"][1]["displayName"], "토양센서_CH2");
    assert_eq!(json["sensors"][1]["friendlyChannel"], 2);
    assert_eq!(json["sensors"][1]["physicalChannel"], 1);
    assert_eq!(json["sensors"][1]["busProtocol"], "modbus");
    assert_eq!(json["sensors"][1]["valueNames"][3], "soil_ph");

    let back: SensorBatch = serde_json::from_value(json).unwrap();
    assert_eq!(back, batch);
}
