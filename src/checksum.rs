//! Scalar frame trailer checksum
//!
//! The node appends a CRC-16/MODBUS over every preceding byte, low byte
//! first. A mismatch is reported on the batch but never rejects the frame.

use crc::{Crc, CRC_16_MODBUS};
use serde::{Deserialize, Serialize};

use crate::constants::{FRAME_CHECKSUM_LEN, FRAME_HEADER_LEN};

const MODBUS_CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ChecksumStatus {
    Valid,
    Mismatch { received: u16, calculated: u16 },
    /// Frame too short to carry a trailer after its header
    Absent,
}

impl ChecksumStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, ChecksumStatus::Valid)
    }
}

/// CRC-16/MODBUS of `data`
pub fn crc16_modbus(data: &[u8]) -> u16 {
    MODBUS_CRC.checksum(data)
}

/// Check the two trailing bytes of a scalar frame
pub fn verify_trailer(frame: &[u8]) -> ChecksumStatus {
    if frame.len() < FRAME_HEADER_LEN + FRAME_CHECKSUM_LEN {
        return ChecksumStatus::Absent;
    }

    let split = frame.len() - FRAME_CHECKSUM_LEN;
    let (body, trailer) = frame.split_at(split);
    let received = u16::from_le_bytes([trailer[0], trailer[1]]);
    let calculated = crc16_modbus(body);

    if received == calculated {
        ChecksumStatus::Valid
    } else {
        ChecksumStatus::Mismatch {
            received,
            calculated,
        }
    }
}

/// Append the trailer to a frame body (used by fixtures and simulators)
pub fn append_trailer(body: &mut Vec<u8>) {
    let crc = crc16_modbus(body);
    body.extend_from_slice(&crc.to_le_bytes());
}
