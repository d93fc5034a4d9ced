//! RGB ↔ CMYK
//!
//! The naive subtractive model `rgb = (1 - cmy)(1 - k)`, with black pulled
//! out as far as possible (`k = 1 - max(r, g, b)`).

use crate::color::rgb::quantize;
use crate::color::{CmykColor, RgbColor};

/// Below `1 - K_EPSILON` the chromatic components are solvable
const K_EPSILON: f64 = 1e-12;

/// sRGB → CMYK
///
/// Outputs are in [0, 1] for every RGB input. Pure black yields
/// `(0, 0, 0, 1)`: with `k = 1` the chromatic components are undefined and
/// are set to zero.
pub fn rgb_to_cmyk(rgb: RgbColor) -> CmykColor {
    let [r, g, b] = rgb.to_unit();
    let k = 1.0 - rgb.max_unit();

    if k < 1.0 - K_EPSILON {
        let denom = 1.0 - k;
        CmykColor::new(
            (1.0 - r - k) / denom,
            (1.0 - g - k) / denom,
            (1.0 - b - k) / denom,
            k,
        )
    } else {
        CmykColor::new(0.0, 0.0, 0.0, k)
    }
}

/// CMYK → sRGB
///
/// Each channel is rounded to the nearest integer and clamped to 0..=255,
/// so components outside [0, 1] from a careless caller still give a valid
/// color instead of wrapping.
pub fn cmyk_to_rgb(cmyk: CmykColor) -> RgbColor {
    let white = 1.0 - cmyk.k;
    RgbColor::new(
        quantize((1.0 - cmyk.c) * white),
        quantize((1.0 - cmyk.m) * white),
        quantize((1.0 - cmyk.y) * white),
    )
}
