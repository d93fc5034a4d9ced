//! Reference white for Lab conversions
//!
//! A single fixed D65 white on the 0..100 XYZ scale. It is not
//! configurable: every Lab value in this crate is relative to it.

use crate::color::XyzColor;

/// A named white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y = 100)
    pub xyz: XyzColor,
}

impl WhitePoint {
    const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: XyzColor::new(x, y, z),
        }
    }
}

/// CIE Standard Illuminant D65, 2° observer
///
/// The reference white used by every XYZ↔Lab conversion.
pub const REFERENCE_WHITE: WhitePoint = WhitePoint::new("D65", 95.047, 100.0, 108.883);
