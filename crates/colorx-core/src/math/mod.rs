//! Mathematical building blocks for the converters
//!
//! - 3x3 matrix operations for RGB↔XYZ
//! - sRGB transfer function

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};
