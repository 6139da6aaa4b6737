// src/core/angle.rs
//! Degrees/minutes/seconds → signed decimal degrees.
//!
//! Accepts the notation the encyclopedia renders in its coordinate spans:
//! `13°42′36″N`, `8°37′S`, `40°N`, `105.5°W`, and the ASCII fallbacks
//! `13°42'36"N` / `13°42'36''N`. Whitespace between parts is tolerated.

use crate::error::ParseError;

/// Which half of a coordinate pair an angle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn hemispheres(self) -> [&'static str; 2] {
        match self {
            Axis::Latitude => ["N", "S"],
            Axis::Longitude => ["E", "W"],
        }
    }
}

/// [`dms_to_decimal`], rejecting a hemisphere letter that belongs to the
/// other axis (`120°E` read as a latitude).
pub fn dms_on_axis(text: &str, axis: Axis) -> Result<f64, ParseError> {
    let letter = text.trim_end().chars().last().map(String::from).unwrap_or_default();
    if !axis.hemispheres().contains(&letter.as_str()) {
        return Err(ParseError::new(text, "hemisphere does not match axis"));
    }
    dms_to_decimal(text)
}

/// Convert an angle string to decimal degrees, rounded to 6 places.
/// `S` and `W` negate the magnitude.
pub fn dms_to_decimal(text: &str) -> Result<f64, ParseError> {
    let re = regex!(
        r#"^\s*(\d+(?:\.\d+)?)\s*°\s*(?:(\d+(?:\.\d+)?)\s*[′']\s*)?(?:(\d+(?:\.\d+)?)\s*(?:″|′′|"|'')\s*)?([NSEW])\s*$"#
    );
    let caps = re
        .captures(text)
        .ok_or_else(|| ParseError::new(text, "expected D°[M′][S″] followed by N, S, E or W"))?;

    let part = |i: usize| -> Result<f64, ParseError> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|_| ParseError::new(text, "bad number")),
            None => Ok(0.0),
        }
    };
    let degrees = part(1)?;
    let minutes = part(2)?;
    let seconds = part(3)?;

    if minutes >= 60.0 {
        return Err(ParseError::new(text, "minutes out of range"));
    }
    if seconds >= 60.0 {
        return Err(ParseError::new(text, "seconds out of range"));
    }

    let hemisphere = caps.get(4).map(|m| m.as_str()).unwrap_or_default();
    let limit = match hemisphere {
        "N" | "S" => 90.0,
        _ => 180.0,
    };

    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    if magnitude > limit {
        return Err(ParseError::new(text, "degrees out of range"));
    }

    let signed = match hemisphere {
        "S" | "W" => -magnitude,
        _ => magnitude,
    };
    Ok(round6(signed))
}

fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}
