//! Parity with the `palette` crate
//!
//! palette builds its sRGB matrix from the primaries and uses the exact CIE
//! Lab constants. The two implementations agree to well under 0.01 in Lab.

use colorx_core::{RgbColor, convert};
use colorx_tests::{TestPattern, compare_lab, generate_pattern, reference};

const LAB_TOLERANCE: f64 = 0.01;
const XYZ_TOLERANCE: f64 = 0.001;

fn sample() -> Vec<RgbColor> {
    let mut colors = generate_pattern(TestPattern::Random(0xC0107), 5000);
    colors.extend(generate_pattern(TestPattern::ColorCube, 8));
    colors.extend(generate_pattern(TestPattern::Grayscale, 256));
    colors.extend(generate_pattern(TestPattern::HueRamp, 360));
    colors.extend(generate_pattern(TestPattern::SkinTones, 6));
    colors.extend(generate_pattern(TestPattern::GamutBoundary(11), 1000));
    colors
}

#[test]
fn test_xyz_matches_palette() {
    eprintln!("\n=== RGB → XYZ vs palette ===\n");

    let mut worst = 0.0f64;
    for rgb in sample() {
        let ours = convert::rgb_to_xyz(rgb);
        let theirs = reference::rgb_to_xyz(rgb);
        let diff = ours
            .to_array()
            .iter()
            .zip(theirs.to_array())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(
            diff < XYZ_TOLERANCE,
            "{}: ours={:?} palette={:?}",
            rgb,
            ours,
            theirs
        );
        worst = worst.max(diff);
    }
    eprintln!("max |ΔXYZ| = {:.6}", worst);
}

#[test]
fn test_lab_matches_palette() {
    eprintln!("\n=== RGB → Lab vs palette ===\n");

    let colors = sample();
    let ours: Vec<_> = colors.iter().map(|&c| convert::rgb_to_lab(c)).collect();
    let theirs: Vec<_> = colors.iter().map(|&c| reference::rgb_to_lab(c)).collect();

    for ((rgb, a), b) in colors.iter().zip(&ours).zip(&theirs) {
        assert!(
            a.approx_eq(b, LAB_TOLERANCE),
            "{}: ours={:?} palette={:?}",
            rgb,
            a,
            b
        );
    }

    let stats = compare_lab(&theirs, &ours);
    eprintln!("deltaE2000: {}", stats);
    assert!(stats.max < LAB_TOLERANCE, "{}", stats);
}

#[test]
fn test_lab_to_rgb_matches_palette() {
    eprintln!("\n=== Lab → RGB vs palette ===\n");

    let mut off_by_one = 0usize;
    for rgb in sample() {
        let lab = convert::rgb_to_lab(rgb);
        let ours = convert::lab_to_rgb(lab).rgb;
        let theirs = reference::lab_to_rgb(lab);

        let max_diff = ours
            .to_array()
            .iter()
            .zip(theirs.to_array())
            .map(|(&a, b)| a.abs_diff(b))
            .max()
            .unwrap_or(0);
        assert!(max_diff <= 1, "{}: ours={} palette={}", rgb, ours, theirs);
        if max_diff == 1 {
            off_by_one += 1;
        }
    }
    eprintln!("{} colors differ by one code value", off_by_one);
}
