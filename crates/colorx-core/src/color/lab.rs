//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! All values here are relative to [`REFERENCE_WHITE`](crate::color::REFERENCE_WHITE).

use crate::color::XyzColor;
use crate::convert::{self, GamutMapped};

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabColor {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl LabColor {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert to XYZ
    #[inline]
    pub fn to_xyz(self) -> XyzColor {
        convert::lab_to_xyz(self)
    }

    /// Convert to sRGB, reporting whether the color had to be clipped
    #[inline]
    pub fn to_rgb(self) -> GamutMapped {
        convert::lab_to_rgb(self)
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Get hue angle in degrees (0-360)
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for LabColor {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LabColor> for [f64; 3] {
    fn from(lab: LabColor) -> Self {
        lab.to_array()
    }
}

impl From<XyzColor> for LabColor {
    fn from(xyz: XyzColor) -> Self {
        convert::xyz_to_lab(xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_chroma() {
        let lab = LabColor::new(50.0, 3.0, 4.0);
        assert!((lab.chroma() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_hue_degrees() {
        assert!(LabColor::new(50.0, 1.0, 0.0).hue_degrees().abs() < EPSILON);
        assert!((LabColor::new(50.0, 0.0, 1.0).hue_degrees() - 90.0).abs() < EPSILON);
        assert!((LabColor::new(50.0, 0.0, -1.0).hue_degrees() - 270.0).abs() < EPSILON);
    }

    #[test]
    fn test_method_roundtrip() {
        let original = LabColor::new(50.0, 25.0, -30.0);
        let back = LabColor::from(original.to_xyz());
        assert!(original.approx_eq(&back, EPSILON), "{:?} vs {:?}", original, back);
    }
}
