//! Headless color explorer
//!
//! Owns a "current color" and keeps all representations in sync: edit one
//! space, get the other three back in a [`Snapshot`]. This is the logic an
//! interactive editor needs, without any widgets.
//!
//! The space the user edited is kept exactly as entered; the others are
//! derived through RGB. Only Lab and XYZ edits can clip.

use tracing::{debug, warn};

use crate::color::{CmykColor, ColorSpace, LabColor, RgbColor, XyzColor};
use crate::convert;

/// Options for a [`ColorExplorer`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExplorerOptions {
    /// Starting color
    pub initial: RgbColor,
    /// Decimal places for displayed CMYK percentages and Lab components
    pub decimals: u8,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            initial: RgbColor::WHITE,
            decimals: 0,
        }
    }
}

#[cfg(feature = "serde")]
impl ExplorerOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Every representation of one color, as produced by an update
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// The space that was edited
    pub source: ColorSpace,
    pub rgb: RgbColor,
    pub cmyk: CmykColor,
    pub xyz: XyzColor,
    pub lab: LabColor,
    /// True if reaching RGB required gamut clipping
    pub clipped: bool,
    /// Display precision carried over from the options
    pub decimals: u8,
}

impl Snapshot {
    fn from_rgb(source: ColorSpace, rgb: RgbColor, decimals: u8) -> Self {
        Self {
            source,
            rgb,
            cmyk: convert::rgb_to_cmyk(rgb),
            xyz: convert::rgb_to_xyz(rgb),
            lab: convert::rgb_to_lab(rgb),
            clipped: false,
            decimals,
        }
    }

    /// CMYK as percentages rounded to the display precision
    pub fn cmyk_percent(&self) -> [f64; 4] {
        self.cmyk.to_percent().map(|v| round_to(v, self.decimals))
    }

    /// Lab rounded to the display precision
    pub fn lab_display(&self) -> [f64; 3] {
        self.lab.to_array().map(|v| round_to(v, self.decimals))
    }

    /// XYZ rounded to the display precision
    pub fn xyz_display(&self) -> [f64; 3] {
        self.xyz.to_array().map(|v| round_to(v, self.decimals))
    }

    /// CSS color for a preview swatch
    pub fn css(&self) -> String {
        self.rgb.css()
    }

    /// User-facing clipping warning, if any
    pub fn warning(&self) -> Option<String> {
        self.clipped.then(|| {
            format!(
                "{} → RGB conversion left the sRGB gamut; channels were clipped to 0..255",
                self.source
            )
        })
    }
}

/// Round to `decimals` places, folding -0 into 0
fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale + 0.0
}

/// Keeps the current color and derives the other representations on edit
#[derive(Debug, Clone)]
pub struct ColorExplorer {
    options: ExplorerOptions,
    current: Snapshot,
}

impl ColorExplorer {
    /// Create an explorer starting at `options.initial`
    pub fn new(options: ExplorerOptions) -> Self {
        let current = Snapshot::from_rgb(ColorSpace::Rgb, options.initial, options.decimals);
        Self { options, current }
    }

    /// The options this explorer was built with
    pub fn options(&self) -> &ExplorerOptions {
        &self.options
    }

    /// The current color
    pub fn current(&self) -> RgbColor {
        self.current.rgb
    }

    /// The last snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.current
    }

    /// Set the color from RGB; never clips
    pub fn set_rgb(&mut self, rgb: RgbColor) -> Snapshot {
        debug!(%rgb, "rgb edited");
        self.commit(Snapshot::from_rgb(ColorSpace::Rgb, rgb, self.options.decimals))
    }

    /// Set the color from CMYK; the entered CMYK is kept as-is
    pub fn set_cmyk(&mut self, cmyk: CmykColor) -> Snapshot {
        let rgb = convert::cmyk_to_rgb(cmyk);
        debug!(c = cmyk.c, m = cmyk.m, y = cmyk.y, k = cmyk.k, %rgb, "cmyk edited");
        self.commit(Snapshot {
            cmyk,
            ..Snapshot::from_rgb(ColorSpace::Cmyk, rgb, self.options.decimals)
        })
    }

    /// Set the color from Lab; the entered Lab is kept as-is
    pub fn set_lab(&mut self, lab: LabColor) -> Snapshot {
        let (rgb, clipped) = convert::lab_to_rgb(lab).into_parts();
        debug!(l = lab.l, a = lab.a, b = lab.b, %rgb, clipped, "lab edited");
        self.commit(Snapshot {
            lab,
            xyz: convert::lab_to_xyz(lab),
            clipped,
            ..Snapshot::from_rgb(ColorSpace::Lab, rgb, self.options.decimals)
        })
    }

    /// Set the color from XYZ; the entered XYZ is kept as-is
    pub fn set_xyz(&mut self, xyz: XyzColor) -> Snapshot {
        let (rgb, clipped) = convert::xyz_to_rgb(xyz).into_parts();
        debug!(x = xyz.x, y = xyz.y, z = xyz.z, %rgb, clipped, "xyz edited");
        self.commit(Snapshot {
            xyz,
            lab: convert::xyz_to_lab(xyz),
            clipped,
            ..Snapshot::from_rgb(ColorSpace::Xyz, rgb, self.options.decimals)
        })
    }

    fn commit(&mut self, snapshot: Snapshot) -> Snapshot {
        if snapshot.clipped {
            warn!(source = %snapshot.source, rgb = %snapshot.rgb, "color clipped to sRGB gamut");
        }
        self.current = snapshot;
        snapshot
    }
}

impl Default for ColorExplorer {
    fn default() -> Self {
        Self::new(ExplorerOptions::default())
    }
}
