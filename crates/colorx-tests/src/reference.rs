//! Reference conversions through the `palette` crate
//!
//! palette derives its sRGB matrix from the primaries' chromaticities and
//! uses the exact CIE Lab constants, so agreement with colorx is close but
//! not bit-exact. Its XYZ is on a 0..1 scale; these wrappers rescale to
//! white at Y = 100.

use colorx_core::{LabColor, RgbColor, XyzColor};
use palette::white_point::D65;
use palette::{FromColor, Lab, LinSrgb, Srgb, Xyz};

fn linear(rgb: RgbColor) -> LinSrgb<f64> {
    let [r, g, b] = rgb.to_unit();
    Srgb::new(r, g, b).into_linear()
}

fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// sRGB → XYZ via palette, white at Y = 100
pub fn rgb_to_xyz(rgb: RgbColor) -> XyzColor {
    let xyz = Xyz::<D65, f64>::from_color(linear(rgb));
    XyzColor::new(xyz.x * 100.0, xyz.y * 100.0, xyz.z * 100.0)
}

/// sRGB → Lab via palette
pub fn rgb_to_lab(rgb: RgbColor) -> LabColor {
    let lab = Lab::<D65, f64>::from_color(linear(rgb));
    LabColor::new(lab.l, lab.a, lab.b)
}

/// Lab → sRGB via palette, clamped per channel
pub fn lab_to_rgb(lab: LabColor) -> RgbColor {
    let lin = LinSrgb::<f64>::from_color(Lab::<D65, f64>::new(lab.l, lab.a, lab.b));
    let srgb = Srgb::<f64>::from_linear(lin);
    RgbColor::new(quantize(srgb.red), quantize(srgb.green), quantize(srgb.blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_d65() {
        let xyz = rgb_to_xyz(RgbColor::WHITE);
        assert!((xyz.x - 95.047).abs() < 0.01, "{:?}", xyz);
        assert!((xyz.y - 100.0).abs() < 0.01, "{:?}", xyz);
        assert!((xyz.z - 108.883).abs() < 0.01, "{:?}", xyz);
    }

    #[test]
    fn test_black_lab() {
        let lab = rgb_to_lab(RgbColor::BLACK);
        assert!(lab.l.abs() < 1e-9);
        assert_eq!(lab_to_rgb(lab), RgbColor::BLACK);
    }
}
