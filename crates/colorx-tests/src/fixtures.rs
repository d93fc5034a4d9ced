//! Known-color fixture loading
//!
//! `testdata/reference_colors.json` at the workspace root lists colors with
//! their expected CMYK (percent), XYZ and Lab values to four decimals.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colorx_core::{CmykColor, LabColor, RgbColor, XyzColor};
use serde::Deserialize;

/// One entry of the reference fixture
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceColor {
    pub name: String,
    pub rgb: [u8; 3],
    pub cmyk_percent: [f64; 4],
    pub xyz: [f64; 3],
    pub lab: [f64; 3],
}

impl ReferenceColor {
    pub fn rgb(&self) -> RgbColor {
        RgbColor::from_array(self.rgb)
    }

    pub fn cmyk(&self) -> CmykColor {
        let [c, m, y, k] = self.cmyk_percent;
        CmykColor::from_percent(c, m, y, k)
    }

    pub fn xyz(&self) -> XyzColor {
        XyzColor::from_array(self.xyz)
    }

    pub fn lab(&self) -> LabColor {
        LabColor::from_array(self.lab)
    }
}

/// Workspace `testdata/` directory
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(|root| root.join("testdata"))
        .unwrap_or_else(|| PathBuf::from("testdata"))
}

pub fn load_reference_colors() -> Result<Vec<ReferenceColor>> {
    let path = testdata_dir().join("reference_colors.json");
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
