//! sRGB transfer function
//!
//! The piecewise IEC 61966-2-1 curve: a short linear toe near black and a
//! 2.4 power segment above it.

/// Encoded value at which the decode curve switches from linear to power
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value at which the encode curve switches from linear to power
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value in [0,1] to linear light in [0,1].
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light to an sRGB-encoded value. Input outside [0,1] is
/// not clamped: a negative linear value stays negative on the linear toe and
/// a value above one stays above one, which is how out-of-gamut colors are
/// detected downstream.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
