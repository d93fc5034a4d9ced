//! Known colors against fixed expected values
//!
//! Expected values live in `testdata/reference_colors.json`, rounded to four
//! decimals.

use colorx_core::{ColorExplorer, convert};
use colorx_tests::load_reference_colors;

const FIXTURE_EPSILON: f64 = 1e-3;

fn close(a: &[f64], b: &[f64]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < FIXTURE_EPSILON)
}

#[test]
fn test_rgb_to_cmyk_reference() {
    for color in load_reference_colors().unwrap() {
        let cmyk = convert::rgb_to_cmyk(color.rgb()).to_percent();
        eprintln!("{:>10}: CMYK {:?}", color.name, cmyk);
        assert!(
            close(&cmyk, &color.cmyk_percent),
            "{}: got {:?}, expected {:?}",
            color.name,
            cmyk,
            color.cmyk_percent
        );
    }
}

#[test]
fn test_rgb_to_xyz_reference() {
    for color in load_reference_colors().unwrap() {
        let xyz = convert::rgb_to_xyz(color.rgb()).to_array();
        eprintln!("{:>10}: XYZ {:?}", color.name, xyz);
        assert!(
            close(&xyz, &color.xyz),
            "{}: got {:?}, expected {:?}",
            color.name,
            xyz,
            color.xyz
        );
    }
}

#[test]
fn test_rgb_to_lab_reference() {
    for color in load_reference_colors().unwrap() {
        let lab = convert::rgb_to_lab(color.rgb()).to_array();
        eprintln!("{:>10}: Lab {:?}", color.name, lab);
        assert!(
            close(&lab, &color.lab),
            "{}: got {:?}, expected {:?}",
            color.name,
            lab,
            color.lab
        );
    }
}

#[test]
fn test_reference_values_convert_back() {
    for color in load_reference_colors().unwrap() {
        assert_eq!(convert::cmyk_to_rgb(color.cmyk()), color.rgb(), "{} via CMYK", color.name);

        // Four-decimal fixture values can land a hair outside the gamut for
        // primaries, so only the quantized result is checked here.
        let from_xyz = convert::xyz_to_rgb(color.xyz());
        assert_eq!(from_xyz.rgb, color.rgb(), "{} via XYZ", color.name);

        let from_lab = convert::lab_to_rgb(color.lab());
        assert_eq!(from_lab.rgb, color.rgb(), "{} via Lab", color.name);
    }
}

#[test]
fn test_explorer_agrees_with_engine() {
    let mut explorer = ColorExplorer::default();
    for color in load_reference_colors().unwrap() {
        let snap = explorer.set_rgb(color.rgb());
        assert!(!snap.clipped);
        assert!(close(&snap.cmyk.to_percent(), &color.cmyk_percent), "{}", color.name);
        assert!(close(&snap.xyz.to_array(), &color.xyz), "{}", color.name);
        assert!(close(&snap.lab.to_array(), &color.lab), "{}", color.name);
    }
}
