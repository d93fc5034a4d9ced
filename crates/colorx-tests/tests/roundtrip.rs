//! Round-trip tests over the 8-bit sRGB cube
//!
//! Every 8-bit sRGB color must survive RGB → CMYK → RGB, RGB → XYZ → RGB
//! and RGB → Lab → RGB unchanged and without a clip report. The strided
//! tests run by default; the full 256³ sweeps are `--ignored`.

use colorx_core::{RgbColor, convert};
use rayon::prelude::*;

/// All colors whose channels are multiples of `step`, plus 255
fn cube(step: usize) -> Vec<RgbColor> {
    let mut axis: Vec<u8> = (0..=255).step_by(step).map(|v| v as u8).collect();
    if axis.last() != Some(&255) {
        axis.push(255);
    }
    let mut colors = Vec::with_capacity(axis.len().pow(3));
    for &r in &axis {
        for &g in &axis {
            for &b in &axis {
                colors.push(RgbColor::new(r, g, b));
            }
        }
    }
    colors
}

fn check<F>(label: &str, colors: &[RgbColor], roundtrip: F)
where
    F: Fn(RgbColor) -> (RgbColor, bool) + Sync,
{
    let failures: Vec<(RgbColor, RgbColor, bool)> = colors
        .par_iter()
        .filter_map(|&rgb| {
            let (back, clipped) = roundtrip(rgb);
            (back != rgb || clipped).then_some((rgb, back, clipped))
        })
        .collect();

    eprintln!("{}: {} colors, {} failures", label, colors.len(), failures.len());
    for (rgb, back, clipped) in failures.iter().take(10) {
        eprintln!("  {} -> {} (clipped={})", rgb, back, clipped);
    }
    assert!(failures.is_empty(), "{} round trip failed", label);
}

fn via_cmyk(rgb: RgbColor) -> (RgbColor, bool) {
    (convert::cmyk_to_rgb(convert::rgb_to_cmyk(rgb)), false)
}

fn via_xyz(rgb: RgbColor) -> (RgbColor, bool) {
    convert::xyz_to_rgb(convert::rgb_to_xyz(rgb)).into_parts()
}

fn via_lab(rgb: RgbColor) -> (RgbColor, bool) {
    convert::lab_to_rgb(convert::rgb_to_lab(rgb)).into_parts()
}

#[test]
fn test_cmyk_roundtrip_strided() {
    check("RGB→CMYK→RGB", &cube(5), via_cmyk);
}

#[test]
fn test_xyz_roundtrip_strided() {
    check("RGB→XYZ→RGB", &cube(5), via_xyz);
}

#[test]
fn test_lab_roundtrip_strided() {
    check("RGB→Lab→RGB", &cube(5), via_lab);
}

#[test]
fn test_grays_roundtrip() {
    let grays: Vec<RgbColor> = (0..=255u8).map(|v| RgbColor::new(v, v, v)).collect();
    check("gray via CMYK", &grays, via_cmyk);
    check("gray via XYZ", &grays, via_xyz);
    check("gray via Lab", &grays, via_lab);
}

#[test]
#[ignore = "full 256³ sweep; run with --ignored in release"]
fn test_cmyk_roundtrip_exhaustive() {
    check("RGB→CMYK→RGB (all)", &cube(1), via_cmyk);
}

#[test]
#[ignore = "full 256³ sweep; run with --ignored in release"]
fn test_xyz_roundtrip_exhaustive() {
    check("RGB→XYZ→RGB (all)", &cube(1), via_xyz);
}

#[test]
#[ignore = "full 256³ sweep; run with --ignored in release"]
fn test_lab_roundtrip_exhaustive() {
    check("RGB→Lab→RGB (all)", &cube(1), via_lab);
}
