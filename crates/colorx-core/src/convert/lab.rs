//! XYZ ↔ Lab
//!
//! CIE 1976 L*a*b* against [`REFERENCE_WHITE`], using the classic rounded
//! constants (ε = 0.008856, κ/116 = 7.787). The two directions are algebraic
//! inverses of each other; neither clips.

use crate::color::{LabColor, REFERENCE_WHITE, XyzColor};

/// Threshold between the cube-root and linear segments (≈ (6/29)³)
const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment (≈ 1/3 · (29/6)²)
const LAB_SLOPE: f64 = 7.787;

/// Offset of the linear segment
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Lab forward function: f(t) for XYZ → Lab
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

/// CIE XYZ (0..100 scale) → CIE Lab
pub fn xyz_to_lab(xyz: XyzColor) -> LabColor {
    let white = REFERENCE_WHITE.xyz;

    let fx = lab_f(xyz.x / white.x);
    let fy = lab_f(xyz.y / white.y);
    let fz = lab_f(xyz.z / white.z);

    LabColor::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIE Lab → CIE XYZ (0..100 scale)
pub fn lab_to_xyz(lab: LabColor) -> XyzColor {
    let white = REFERENCE_WHITE.xyz;

    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    XyzColor::new(
        lab_f_inv(fx) * white.x,
        lab_f_inv(fy) * white.y,
        lab_f_inv(fz) * white.z,
    )
}
