//! CIE XYZ Color Space
//!
//! Linear-light tristimulus values on a 0..100 scale (Y = 100 for the
//! reference white). XYZ sits between RGB and Lab in every conversion chain.

use crate::color::{LabColor, RgbColor};
use crate::convert::{self, GamutMapped};

/// CIE 1931 XYZ color coordinates, scaled so white has Y = 100
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XyzColor {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl XyzColor {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Convert to xyY chromaticity coordinates
    ///
    /// Returns (x, y, Y). Black has no chromaticity and yields zeros.
    #[inline]
    pub fn to_xyy(&self) -> (f64, f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum, self.y)
        } else {
            (0.0, 0.0, 0.0)
        }
    }

    /// Convert to sRGB, reporting whether the color had to be clipped
    #[inline]
    pub fn to_rgb(self) -> GamutMapped {
        convert::xyz_to_rgb(self)
    }

    /// Convert to CIE Lab against the fixed reference white
    #[inline]
    pub fn to_lab(self) -> LabColor {
        convert::xyz_to_lab(self)
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for XyzColor {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<XyzColor> for [f64; 3] {
    fn from(xyz: XyzColor) -> Self {
        xyz.to_array()
    }
}

impl From<RgbColor> for XyzColor {
    fn from(rgb: RgbColor) -> Self {
        convert::rgb_to_xyz(rgb)
    }
}
