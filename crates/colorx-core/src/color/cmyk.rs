//! Subtractive CMYK color
//!
//! A naive device-independent CMYK: no ink limits, no profile. Components are
//! fractions in [0, 1]; user-facing code usually shows them as percentages.

use crate::color::RgbColor;
use crate::convert;

/// CMYK color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CmykColor {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
    /// Key (black)
    pub k: f64,
}

impl CmykColor {
    /// Create a new CMYK color from fractions
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Create from percentages (0 to 100)
    #[inline]
    pub fn from_percent(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self::new(c / 100.0, m / 100.0, y / 100.0, k / 100.0)
    }

    /// Components as percentages (0 to 100)
    #[inline]
    pub fn to_percent(&self) -> [f64; 4] {
        [self.c * 100.0, self.m * 100.0, self.y * 100.0, self.k * 100.0]
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Check that every component lies in [0, 1]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.to_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// Convert to RGB
    #[inline]
    pub fn to_rgb(self) -> RgbColor {
        convert::cmyk_to_rgb(self)
    }

    /// Check if approximately equal to another CMYK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl From<[f64; 4]> for CmykColor {
    fn from(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}
