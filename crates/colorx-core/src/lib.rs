//! # colorx - sRGB / CMYK / XYZ / Lab conversion
//!
//! A small, stateless color conversion engine with a headless explorer on
//! top.
//!
//! ## Spaces
//!
//! - **RGB**: 8-bit gamma-encoded sRGB, the hub every chain passes through
//! - **CMYK**: naive subtractive model, fractions in [0, 1]
//! - **XYZ**: CIE 1931 tristimulus, white at Y = 100
//! - **Lab**: CIELAB relative to a fixed D65 reference white
//!
//! Every conversion is a pure, total function. The only lossy step is
//! XYZ → RGB, which clips out-of-gamut colors per channel and says so in
//! [`GamutMapped::clipped`].
//!
//! ## Quick Start
//!
//! ```
//! use colorx_core::{LabColor, RgbColor, convert};
//!
//! let orange = RgbColor::new(255, 128, 0);
//! let lab = convert::rgb_to_lab(orange);
//! let back = convert::lab_to_rgb(lab);
//! assert_eq!(back.rgb, orange);
//! assert!(!back.clipped);
//!
//! // Far more saturated than any sRGB red
//! let out = convert::lab_to_rgb(LabColor::new(50.0, 120.0, 120.0));
//! assert!(out.clipped);
//! ```
//!
//! ## Explorer
//!
//! ```
//! use colorx_core::{ColorExplorer, CmykColor};
//!
//! let mut explorer = ColorExplorer::default();
//! let snap = explorer.set_cmyk(CmykColor::from_percent(0.0, 50.0, 100.0, 0.0));
//! assert_eq!(snap.rgb.to_string(), "#ff8000");
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod explorer;
pub mod input;
pub mod math;

pub use color::{CmykColor, ColorSpace, LabColor, REFERENCE_WHITE, RgbColor, XyzColor};
pub use convert::{
    GamutMapped, cmyk_to_rgb, lab_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_lab, rgb_to_xyz,
    xyz_to_lab, xyz_to_rgb,
};
pub use error::{Error, Result};
pub use explorer::{ColorExplorer, ExplorerOptions, Snapshot};

/// Version of colorx
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
