//! 8-bit sRGB color
//!
//! The hub representation: every other space is a view derived from it.

use std::fmt;
use std::str::FromStr;

use crate::color::{CmykColor, LabColor, XyzColor};
use crate::convert;
use crate::error::Error;

/// Gamma-encoded sRGB color with 8-bit channels
///
/// Channels are `u8`, so a value outside 0..=255 cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbColor {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to [0, 1]
    #[inline]
    pub fn to_unit(&self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Quantize normalized channels back to 8 bits
    ///
    /// Each channel is scaled by 255, rounded to the nearest integer and
    /// clamped to 0..=255. NaN maps to 0.
    #[inline]
    pub fn from_unit(unit: [f64; 3]) -> Self {
        Self {
            r: quantize(unit[0]),
            g: quantize(unit[1]),
            b: quantize(unit[2]),
        }
    }

    /// Largest channel, normalized to [0, 1]
    #[inline]
    pub fn max_unit(&self) -> f64 {
        self.r.max(self.g).max(self.b) as f64 / 255.0
    }

    /// CSS `rgb()` notation, as used for a preview swatch
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to CMYK
    #[inline]
    pub fn to_cmyk(self) -> CmykColor {
        convert::rgb_to_cmyk(self)
    }

    /// Convert to CIE XYZ
    #[inline]
    pub fn to_xyz(self) -> XyzColor {
        convert::rgb_to_xyz(self)
    }

    /// Convert to CIE Lab
    #[inline]
    pub fn to_lab(self) -> LabColor {
        convert::rgb_to_lab(self)
    }

    /// Black color
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red primary
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green primary
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0, 0, 255);
}

/// Scale a [0,1] value to 0..=255 with round-half-away-from-zero, then clamp
#[inline]
pub(crate) fn quantize(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for RgbColor {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(rgb: RgbColor) -> Self {
        rgb.to_array()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = Error;

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}
