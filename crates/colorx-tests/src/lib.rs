//! # colorx-tests
//!
//! Accuracy and parity testing for colorx.
//!
//! This crate provides:
//! - Exhaustive round-trip checks over the 8-bit sRGB cube
//! - Parity checks against the `palette` crate
//! - Accuracy measurements using deltaE2000
//! - Deterministic test patterns and a JSON fixture of known colors
//!
//! ## Test Categories
//!
//! 1. **Round trips**: RGB → CMYK/XYZ/Lab → RGB is the identity
//! 2. **Reference colors**: fixed values for primaries, grays and a few mixes
//! 3. **Gamut clipping**: out-of-gamut XYZ and Lab report clipping
//! 4. **Properties**: range and monotonicity invariants via proptest

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_lab, delta_e_2000};
pub use fixtures::{ReferenceColor, load_reference_colors};
pub use patterns::{TestPattern, generate_pattern};
