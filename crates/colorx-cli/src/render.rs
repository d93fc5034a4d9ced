//! Output formatting for a snapshot

use std::fmt::Write;

use colorx_core::{ColorSpace, Snapshot};
use serde::Serialize;

/// Flattened view of a snapshot, rounded for display
#[derive(Debug, Serialize)]
struct Report {
    source: ColorSpace,
    hex: String,
    css: String,
    rgb: [u8; 3],
    cmyk_percent: [f64; 4],
    xyz: [f64; 3],
    lab: [f64; 3],
    clipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl From<&Snapshot> for Report {
    fn from(snap: &Snapshot) -> Self {
        Self {
            source: snap.source,
            hex: snap.rgb.to_string(),
            css: snap.css(),
            rgb: snap.rgb.to_array(),
            cmyk_percent: snap.cmyk_percent(),
            xyz: snap.xyz_display(),
            lab: snap.lab_display(),
            clipped: snap.clipped,
            warning: snap.warning(),
        }
    }
}

pub fn json(snap: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::from(snap))
}

fn join(values: &[f64], decimals: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.decimals$}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn table(snap: &Snapshot) -> String {
    let report = Report::from(snap);
    let decimals = snap.decimals as usize;
    let marker = |space: ColorSpace| if space == report.source { "*" } else { " " };

    let mut out = String::new();
    let [r, g, b] = report.rgb;
    let _ = writeln!(out, "{} RGB   {r}, {g}, {b}  ({})", marker(ColorSpace::Rgb), report.hex);
    let _ = writeln!(
        out,
        "{} CMYK  {} %",
        marker(ColorSpace::Cmyk),
        join(&report.cmyk_percent, decimals)
    );
    let _ = writeln!(out, "{} XYZ   {}", marker(ColorSpace::Xyz), join(&report.xyz, decimals));
    let _ = writeln!(out, "{} Lab   {}", marker(ColorSpace::Lab), join(&report.lab, decimals));
    out
}
