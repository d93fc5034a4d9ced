//! RGB ↔ XYZ
//!
//! sRGB decode, the D65 sRGB primaries matrix, and the reverse path with
//! gamut detection.

use crate::color::{RgbColor, XyzColor};
use crate::convert::GamutMapped;
use crate::math::{SRGB_TO_XYZ, XYZ_TO_SRGB, srgb_gamma_decode, srgb_gamma_encode};

/// How far outside [0, 1] an encoded channel may drift before it counts as
/// clipped
///
/// Far below one 8-bit step (1/255 ≈ 0.004). It absorbs floating-point
/// noise and the rounding in the published matrix: its rows put sRGB white at
/// Y = 100.00001, so the exact reference white (Lab 100, 0, 0) lands ~7e-8
/// outside the unit cube.
pub const GAMUT_EPSILON: f64 = 1e-6;

/// sRGB → CIE XYZ (0..100 scale)
pub fn rgb_to_xyz(rgb: RgbColor) -> XyzColor {
    let linear = rgb.to_unit().map(srgb_gamma_decode);
    XyzColor::from_array((SRGB_TO_XYZ * linear).map(|v| v * 100.0))
}

/// CIE XYZ (0..100 scale) → sRGB
///
/// Colors outside the sRGB gamut are clipped per channel. The returned
/// [`GamutMapped::clipped`] flag is set whenever any gamma-encoded channel
/// was outside [0, 1] before clamping.
pub fn xyz_to_rgb(xyz: XyzColor) -> GamutMapped {
    let linear = XYZ_TO_SRGB * xyz.to_array().map(|v| v / 100.0);
    let encoded = linear.map(srgb_gamma_encode);

    let clipped = encoded
        .iter()
        .any(|v| !(-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v));

    GamutMapped {
        rgb: RgbColor::from_unit(encoded),
        clipped,
    }
}
