//! Soil probe (type 19), four readings packed into two registers.
//!
//! ```text
//! raw1: [15..8] humidity %        [7..0] temperature + 40
//! raw2: [15..8] EC                [7..0] pH x 10
//! ```

use super::Interpretation;
use crate::constants::TYPE_SOIL;

/// Soil moisture label; inclusive lower bounds
pub fn moisture_status(humidity: u32) -> &'static str {
    match humidity {
        h if h >= 70 => "적정",
        h if h >= 40 => "보통",
        h if h >= 20 => "건조",
        _ => "매우건조",
    }
}

/// Soil pH label; 6.0..=7.5 is neutral
pub fn ph_status(ph: f64) -> &'static str {
    if (6.0..=7.5).contains(&ph) {
        "중성"
    } else if ph < 6.0 {
        "산성"
    } else {
        "알칼리"
    }
}

/// Soil EC label; inclusive upper bounds
pub fn ec_status(ec: u32) -> &'static str {
    match ec {
        e if e <= 20 => "매우낮음",
        e if e <= 50 => "낮음",
        e if e <= 150 => "보통",
        _ => "높음",
    }
}

pub fn soil(raw1: i32, raw2: i32) -> Interpretation {
    let word1 = (raw1 as u32) & 0xFFFF;
    let word2 = (raw2 as u32) & 0xFFFF;

    let humidity = (word1 & 0xFF00) >> 8;
    let temperature = (word1 & 0x00FF) as i32 - 40;
    let ec = (word2 & 0xFF00) >> 8;
    let ph = f64::from(word2 & 0x00FF) / 10.0;

    Interpretation::for_type(
        TYPE_SOIL,
        vec![
            humidity.into(),
            temperature.into(),
            ec.into(),
            ph.into(),
            moisture_status(humidity).into(),
            ph_status(ph).into(),
            ec_status(ec).into(),
        ],
    )
}
