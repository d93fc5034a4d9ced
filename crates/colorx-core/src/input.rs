//! Input validation at the boundary
//!
//! The engine accepts any number; keeping values inside their nominal ranges
//! is the caller's job. These helpers turn user text into validated color
//! values using the same ranges the interactive editor enforced.

use crate::color::{CmykColor, LabColor, RgbColor, XyzColor};
use crate::error::{Error, Result};

/// Accepted range for one input channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    /// Channel label used in error messages
    pub name: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Whether only whole numbers are accepted
    pub integer: bool,
}

impl ChannelRange {
    const fn int(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            min,
            max,
            integer: true,
        }
    }

    const fn real(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            min,
            max,
            integer: false,
        }
    }

    /// Check a number against this range
    pub fn check(&self, value: f64) -> Result<f64> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(Error::OutOfRange {
                channel: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Parse and range-check user text
    pub fn parse(&self, input: &str) -> Result<f64> {
        let text = input.trim();
        let invalid = || Error::InvalidNumber {
            channel: self.name,
            input: input.to_string(),
        };

        let value = if self.integer {
            text.parse::<i64>().map_err(|_| invalid())? as f64
        } else {
            text.parse::<f64>().map_err(|_| invalid())?
        };
        if !value.is_finite() {
            return Err(invalid());
        }
        self.check(value)
    }
}

pub const RGB_RANGES: [ChannelRange; 3] = [
    ChannelRange::int("R", 0.0, 255.0),
    ChannelRange::int("G", 0.0, 255.0),
    ChannelRange::int("B", 0.0, 255.0),
];

pub const LAB_RANGES: [ChannelRange; 3] = [
    ChannelRange::real("L", 0.0, 100.0),
    ChannelRange::real("a", -128.0, 127.0),
    ChannelRange::real("b", -128.0, 127.0),
];

/// CMYK is entered as percentages
pub const CMYK_PERCENT_RANGES: [ChannelRange; 4] = [
    ChannelRange::real("C", 0.0, 100.0),
    ChannelRange::real("M", 0.0, 100.0),
    ChannelRange::real("Y", 0.0, 100.0),
    ChannelRange::real("K", 0.0, 100.0),
];

/// XYZ has no upper bound; values above white are legal and simply clip
pub const XYZ_RANGES: [ChannelRange; 3] = [
    ChannelRange::real("X", 0.0, f64::MAX),
    ChannelRange::real("Y", 0.0, f64::MAX),
    ChannelRange::real("Z", 0.0, f64::MAX),
];

fn parse_all<const N: usize>(ranges: &[ChannelRange; N], inputs: [&str; N]) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    for ((slot, range), input) in out.iter_mut().zip(ranges).zip(inputs) {
        *slot = range.parse(input)?;
    }
    Ok(out)
}

/// Parse three integer channels in 0..=255
pub fn parse_rgb(inputs: [&str; 3]) -> Result<RgbColor> {
    let [r, g, b] = parse_all(&RGB_RANGES, inputs)?;
    Ok(RgbColor::new(r as u8, g as u8, b as u8))
}

/// Parse L (0..=100), a and b (-128..=127)
pub fn parse_lab(inputs: [&str; 3]) -> Result<LabColor> {
    Ok(LabColor::from_array(parse_all(&LAB_RANGES, inputs)?))
}

/// Parse four CMYK percentages (0..=100) into fractions
pub fn parse_cmyk_percent(inputs: [&str; 4]) -> Result<CmykColor> {
    let [c, m, y, k] = parse_all(&CMYK_PERCENT_RANGES, inputs)?;
    Ok(CmykColor::from_percent(c, m, y, k))
}

/// Parse three non-negative XYZ components (0..100 scale)
pub fn parse_xyz(inputs: [&str; 3]) -> Result<XyzColor> {
    Ok(XyzColor::from_array(parse_all(&XYZ_RANGES, inputs)?))
}
