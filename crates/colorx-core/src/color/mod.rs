//! Color value types
//!
//! Four plain `Copy` structs, one per representation:
//! - [`RgbColor`]: 8-bit gamma-encoded sRGB
//! - [`CmykColor`]: subtractive fractions
//! - [`XyzColor`]: CIE XYZ on a 0..100 scale
//! - [`LabColor`]: CIELAB relative to [`REFERENCE_WHITE`]

pub mod cmyk;
pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use cmyk::CmykColor;
pub use lab::LabColor;
pub use rgb::RgbColor;
pub use white_point::{REFERENCE_WHITE, WhitePoint};
pub use xyz::XyzColor;

/// Identifies one of the supported representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpace {
    Rgb,
    Cmyk,
    Xyz,
    Lab,
}

impl ColorSpace {
    /// Short display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
            Self::Xyz => "XYZ",
            Self::Lab => "Lab",
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
