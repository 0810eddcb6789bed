//! Weather station sensors: wind direction (16), wind speed (17) and the
//! bit-packed rain/snow sensor (18).

use super::{scaled, Interpretation};
use crate::constants::{TYPE_PRECIPITATION, TYPE_WIND_DIRECTION, TYPE_WIND_SPEED};

/// 8-point compass labels, index 0 = north, clockwise
pub const COMPASS_LABELS: [&str; 8] = [
    "북풍(N)",
    "북동풍(NE)",
    "동풍(E)",
    "남동풍(SE)",
    "남풍(S)",
    "남서풍(SW)",
    "서풍(W)",
    "북서풍(NW)",
];

/// Wind speed bands: (exclusive upper bound in m/s, scale label, condition).
/// Calm (exactly 0 m/s) is handled separately; the last band has no bound.
const WIND_BANDS: [(f64, &str, &str); 9] = [
    (0.2, "감지한계", "연기 방향 감지 곤란"),
    (1.5, "실바람", "연기 방향으로 감지"),
    (3.3, "남실바람", "바람이 얼굴에 느껴짐"),
    (5.4, "산들바람", "나뭇잎이 흔들림"),
    (7.9, "건들바람", "작은 가지가 흔들림"),
    (10.7, "흔들바람", "큰 가지가 흔들림"),
    (13.8, "된바람", "나무 전체가 흔들림"),
    (17.1, "센바람", "걷기 곤란"),
    (f64::INFINITY, "강풍", "심한 손상 가능"),
];

const CALM: (&str, &str) = ("무풍", "고요");

/// Exclusive upper bounds of the NE..NW sectors; N covers [0, 22.5) and >= 337.5
const SECTOR_UPPER_BOUNDS: [f64; 7] = [67.5, 112.5, 157.5, 202.5, 247.5, 292.5, 337.5];

/// Compass label for a heading in degrees, 45° sectors centred on N, NE, ...
///
/// Headings are not reduced modulo 360: anything from 337.5 up is north, and
/// negative headings land in the NE sector.
pub fn direction_from_degrees(degrees: i32) -> &'static str {
    let heading = f64::from(degrees);
    if (0.0..22.5).contains(&heading) {
        return COMPASS_LABELS[0];
    }
    SECTOR_UPPER_BOUNDS
        .iter()
        .position(|bound| heading < *bound)
        .map_or(COMPASS_LABELS[0], |i| COMPASS_LABELS[i + 1])
}

/// Wind scale label and condition for a speed in m/s
pub fn classify_wind_speed(speed_ms: f64) -> (&'static str, &'static str) {
    if speed_ms == 0.0 {
        return CALM;
    }
    WIND_BANDS
        .iter()
        .find(|(limit, _, _)| speed_ms < *limit)
        .map(|(_, scale, condition)| (*scale, *condition))
        .unwrap_or((WIND_BANDS[8].1, WIND_BANDS[8].2))
}

/// Type 16: gear index 0-7 selects the compass point directly; anything
/// else falls back to the degree reading.
pub fn wind_direction(gear: i32, degrees: i32) -> Interpretation {
    let label = match usize::try_from(gear) {
        Ok(idx) if idx < COMPASS_LABELS.len() => COMPASS_LABELS[idx],
        _ => direction_from_degrees(degrees),
    };

    Interpretation::for_type(
        TYPE_WIND_DIRECTION,
        vec![gear.into(), degrees.into(), label.into()],
    )
}

/// Type 17: raw value is speed in 0.1 m/s
pub fn wind_speed(raw: i32) -> Interpretation {
    let speed = scaled(raw, 10.0);
    let (scale, condition) = classify_wind_speed(speed);

    Interpretation::for_type(TYPE_WIND_SPEED, vec![speed.into(), scale.into(), condition.into()])
}

/// Precipitation state from the high nibble of the first register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipStatus {
    Dry,
    Rain,
    Snow,
    Unknown(u8),
}

impl PrecipStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => PrecipStatus::Dry,
            1 => PrecipStatus::Rain,
            2 => PrecipStatus::Snow,
            other => PrecipStatus::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrecipStatus::Dry => "건조",
            PrecipStatus::Rain => "강우",
            PrecipStatus::Snow => "강설",
            PrecipStatus::Unknown(_) => "알 수 없음",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PrecipStatus::Dry => "sun.png",
            PrecipStatus::Rain => "rain.png",
            PrecipStatus::Snow => "snow.png",
            PrecipStatus::Unknown(_) => "❓",
        }
    }
}

/// Moisture intensity label; thresholds are exclusive
pub fn moisture_intensity(status: PrecipStatus, moisture_level: u32) -> &'static str {
    match status {
        PrecipStatus::Dry if moisture_level > 500 => "잔여수분",
        PrecipStatus::Dry => "완전건조",
        _ if moisture_level > 3000 => "강함",
        _ if moisture_level > 1500 => "보통",
        _ if moisture_level > 500 => "약함",
        _ => "미약",
    }
}

/// Air temperature label; thresholds are inclusive lower bounds
pub fn temperature_status(temperature: i32) -> &'static str {
    match temperature {
        t if t >= 30 => "높음",
        t if t >= 20 => "적정",
        t if t >= 10 => "낮음",
        t if t >= 0 => "매우낮음",
        _ => "결빙위험",
    }
}

/// Type 18 register layout:
///
/// ```text
/// raw1: [15..12] status  [11..0] moisture level
/// raw2: [15..8]  temperature + 40  [7..0] humidity
/// ```
pub fn precipitation(raw1: i32, raw2: i32) -> Interpretation {
    let word1 = (raw1 as u32) & 0xFFFF;
    let word2 = (raw2 as u32) & 0xFFFF;

    let status_code = ((word1 >> 12) & 0x0F) as u8;
    let moisture_level = word1 & 0x0FFF;
    let temp_byte = (word2 >> 8) & 0xFF;
    let humidity = word2 & 0xFF;
    let temperature = temp_byte as i32 - 40;

    let status = PrecipStatus::from_code(status_code);

    Interpretation::for_type(
        TYPE_PRECIPITATION,
        vec![
            u32::from(status_code).into(),
            status.label().into(),
            moisture_level.into(),
            moisture_intensity(status, moisture_level).into(),
            temperature.into(),
            humidity.into(),
            temperature_status(temperature).into(),
            status.icon().into(),
        ],
    )
}
