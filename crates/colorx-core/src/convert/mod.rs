//! The conversion engine
//!
//! Stateless, total functions between the four representations. RGB is the
//! hub: there is no direct CMYK↔XYZ or CMYK↔Lab path, callers chain through
//! [`RgbColor`].
//!
//! ```text
//!   CMYK ──cmyk_to_rgb──▶ RGB ──rgb_to_xyz──▶ XYZ ──xyz_to_lab──▶ Lab
//!   CMYK ◀─rgb_to_cmyk── RGB ◀─xyz_to_rgb── XYZ ◀─lab_to_xyz── Lab
//! ```
//!
//! Only the XYZ→RGB step can lose information (gamut clipping); it reports
//! that through [`GamutMapped::clipped`].

mod cmyk;
mod lab;
mod xyz;

pub use cmyk::{cmyk_to_rgb, rgb_to_cmyk};
pub use lab::{lab_to_xyz, xyz_to_lab};
pub use xyz::{GAMUT_EPSILON, rgb_to_xyz, xyz_to_rgb};

use crate::color::{LabColor, RgbColor};

/// An RGB color produced by gamut mapping, with the clipping flag
///
/// `clipped` is set when at least one channel fell outside the sRGB gamut
/// and was clamped. It is the only signal that information was lost.
#[must_use = "the clipped flag reports lost information and must be surfaced"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GamutMapped {
    /// Clamped 8-bit result
    pub rgb: RgbColor,
    /// True if any channel was outside [0, 1] before clamping
    pub clipped: bool,
}

impl GamutMapped {
    /// Split into `(rgb, clipped)`
    #[inline]
    pub fn into_parts(self) -> (RgbColor, bool) {
        (self.rgb, self.clipped)
    }
}

/// sRGB → CIE Lab (through XYZ)
#[inline]
pub fn rgb_to_lab(rgb: RgbColor) -> LabColor {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// CIE Lab → sRGB (through XYZ), propagating the clipping flag
#[inline]
pub fn lab_to_rgb(lab: LabColor) -> GamutMapped {
    xyz_to_rgb(lab_to_xyz(lab))
}
