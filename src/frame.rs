//! # Scalar Frame Decoder
//!
//! Parses the dense binary telemetry frame into raw sensor records using
//! `nom`. Multi-byte fields are big-endian.
//!
//! ```text
//! offset 0       device id
//! offset 1       function code        (ignored)
//! offset 2..5    frame timestamp      (ignored, receipt time is used)
//! offset 6       sensor count
//! offset 7       reserved
//! offset 8..N-3  sensor records, 10 bytes each:
//!                  id, type, combined address, channel,
//!                  raw value 1 (u16), raw value 2 (u16), reserved (2)
//! offset N-2..   CRC-16 trailer
//! ```
//!
//! A frame shorter than its header is rejected. A frame that runs out of
//! bytes before the declared number of records yields the records that fit.

use log::{debug, trace, warn};
use nom::{
    bytes::complete::take,
    number::complete::{be_u16, be_u32, be_u8},
    IResult,
};

use crate::batch::{CombinedAddress, RawSensorRecord};
use crate::constants::{FRAME_CHECKSUM_LEN, FRAME_HEADER_LEN, FRAME_RECORD_LEN};
use crate::error::SensorFrameError;
use crate::util::hex::pretty_hex;

/// Fixed 8-byte frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub device_id: u8,
    pub function_code: u8,
    pub frame_timestamp: u32,
    pub sensor_count: u8,
    pub reserved: u8,
}

/// A parsed scalar frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarFrame {
    pub header: FrameHeader,
    pub records: Vec<RawSensorRecord>,
    /// Fewer records fit in the frame than the header declared
    pub truncated: bool,
}

/// Parses the frame header.
pub fn parse_header(input: &[u8]) -> IResult<&[u8], FrameHeader> {
    let (input, device_id) = be_u8(input)?;
    let (input, function_code) = be_u8(input)?;
    let (input, frame_timestamp) = be_u32(input)?;
    let (input, sensor_count) = be_u8(input)?;
    let (input, reserved) = be_u8(input)?;
    Ok((
        input,
        FrameHeader {
            device_id,
            function_code,
            frame_timestamp,
            sensor_count,
            reserved,
        },
    ))
}

/// Parses one 10-byte sensor record.
pub fn parse_record(input: &[u8]) -> IResult<&[u8], RawSensorRecord> {
    let (input, sensor_id) = be_u8(input)?;
    let (input, type_code) = be_u8(input)?;
    let (input, combined_address) = be_u8(input)?;
    let (input, physical_channel) = be_u8(input)?;
    let (input, raw_value1) = be_u16(input)?;
    let (input, raw_value2) = be_u16(input)?;
    let (input, _reserved) = take(2usize)(input)?;
    Ok((
        input,
        RawSensorRecord {
            sensor_id,
            type_code,
            combined_address: CombinedAddress(combined_address),
            physical_channel,
            raw_values: vec![i32::from(raw_value1), i32::from(raw_value2)],
        },
    ))
}

/// Decodes a scalar frame into its header and raw records.
pub fn decode_frame_records(bytes: &[u8]) -> Result<ScalarFrame, SensorFrameError> {
    if bytes.len() < FRAME_HEADER_LEN {
        return Err(SensorFrameError::MalformedFrame { len: bytes.len() });
    }
    trace!("scalar frame:\n{}", pretty_hex(bytes, 16));

    let (_, header) =
        parse_header(bytes).map_err(|_| SensorFrameError::MalformedFrame { len: bytes.len() })?;

    // Records live between the header and the checksum trailer
    let records_end = bytes
        .len()
        .saturating_sub(FRAME_CHECKSUM_LEN)
        .max(FRAME_HEADER_LEN);
    let mut remaining = &bytes[FRAME_HEADER_LEN..records_end];

    let declared = usize::from(header.sensor_count);
    let mut records = Vec::with_capacity(declared.min(remaining.len() / FRAME_RECORD_LEN));

    for index in 0..declared {
        if remaining.len() < FRAME_RECORD_LEN {
            break;
        }
        match parse_record(remaining) {
            Ok((rest, record)) => {
                debug!(
                    "record #{index}: id={} type={} addr=0x{:02x} ch={} raw={:?}",
                    record.sensor_id,
                    record.type_code,
                    record.combined_address.raw(),
                    record.physical_channel,
                    record.raw_values
                );
                records.push(record);
                remaining = rest;
            }
            Err(_) => break,
        }
    }

    let truncated = records.len() < declared;
    if truncated {
        warn!(
            "frame from device {} declares {} sensors but only {} records fit in {} bytes",
            header.device_id,
            declared,
            records.len(),
            bytes.len()
        );
    }

    Ok(ScalarFrame {
        header,
        records,
        truncated,
    })
}
