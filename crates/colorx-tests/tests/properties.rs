//! Property-based tests for the conversion engine
//!
//! Range, identity and monotonicity invariants checked with proptest across
//! arbitrary inputs, including malformed ones.

use colorx_core::{CmykColor, LabColor, RgbColor, XyzColor, convert, input};
use proptest::prelude::*;

prop_compose! {
    fn rgb_strategy()(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) -> RgbColor {
        RgbColor::new(r, g, b)
    }
}

prop_compose! {
    fn lab_strategy()(l in 0.0..=100.0f64, a in -128.0..=127.0f64, b in -128.0..=127.0f64) -> LabColor {
        LabColor::new(l, a, b)
    }
}

// Anything finite, well outside the nominal ranges
fn wild_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e6..1e6f64,
        Just(0.0),
        Just(-0.0),
        Just(1.0),
        Just(-1.0),
        Just(f64::MIN_POSITIVE),
    ]
}

proptest! {
    #[test]
    fn test_cmyk_roundtrip_is_exact(rgb in rgb_strategy()) {
        prop_assert_eq!(convert::cmyk_to_rgb(convert::rgb_to_cmyk(rgb)), rgb);
    }

    #[test]
    fn test_cmyk_from_rgb_is_valid(rgb in rgb_strategy()) {
        let cmyk = convert::rgb_to_cmyk(rgb);
        prop_assert!(cmyk.is_valid(), "{:?}", cmyk);
        // Undercolor removal: at least one of c, m, y is zero unless black
        if cmyk.k < 1.0 {
            prop_assert!(cmyk.c == 0.0 || cmyk.m == 0.0 || cmyk.y == 0.0, "{:?}", cmyk);
        }
    }

    #[test]
    fn test_cmyk_to_rgb_tolerates_malformed(
        c in wild_f64(), m in wild_f64(), y in wild_f64(), k in wild_f64()
    ) {
        // Channels are u8, so a result always exists and is in range
        let _ = convert::cmyk_to_rgb(CmykColor::new(c, m, y, k));
    }

    #[test]
    fn test_xyz_roundtrip(rgb in rgb_strategy()) {
        let out = convert::xyz_to_rgb(convert::rgb_to_xyz(rgb));
        prop_assert_eq!(out.rgb, rgb);
        prop_assert!(!out.clipped);
    }

    #[test]
    fn test_lab_roundtrip(rgb in rgb_strategy()) {
        let out = convert::lab_to_rgb(convert::rgb_to_lab(rgb));
        prop_assert_eq!(out.rgb, rgb);
        prop_assert!(!out.clipped);
    }

    #[test]
    fn test_xyz_is_non_negative(rgb in rgb_strategy()) {
        let xyz = convert::rgb_to_xyz(rgb);
        prop_assert!(xyz.x >= 0.0 && xyz.y >= 0.0 && xyz.z >= 0.0, "{:?}", xyz);
        // The matrix rows put white at Y = 100.00001
        prop_assert!(xyz.y <= 100.0 + 1e-4, "{:?}", xyz);
    }

    #[test]
    fn test_lab_lightness_in_range(rgb in rgb_strategy()) {
        let lab = convert::rgb_to_lab(rgb);
        prop_assert!(lab.l >= -1e-9 && lab.l <= 100.0 + 1e-4, "{:?}", lab);
    }

    #[test]
    fn test_lab_xyz_inverse(lab in lab_strategy()) {
        // The rounded constants leave a ~3e-7 seam between the two segments
        // of f, worth up to ~2e-4 in a or b
        let back = convert::xyz_to_lab(convert::lab_to_xyz(lab));
        prop_assert!(back.approx_eq(&lab, 1e-3), "{:?} -> {:?}", lab, back);
    }

    #[test]
    fn test_lab_to_rgb_is_total(l in wild_f64(), a in wild_f64(), b in wild_f64()) {
        // Always yields a clamped color; anything far off is reported
        let out = convert::lab_to_rgb(LabColor::new(l, a, b));
        if l > 101.0 {
            prop_assert!(out.clipped);
        }
    }

    #[test]
    fn test_xyz_to_rgb_flags_negative(x in 0.0..100.0f64, z in 0.0..100.0f64) {
        let out = convert::xyz_to_rgb(XyzColor::new(x, -10.0, z));
        prop_assert!(out.clipped);
    }

    #[test]
    fn test_gray_luminance_is_monotonic(v in 0u8..255) {
        let darker = convert::rgb_to_xyz(RgbColor::new(v, v, v));
        let lighter = convert::rgb_to_xyz(RgbColor::new(v + 1, v + 1, v + 1));
        prop_assert!(lighter.y > darker.y);
        prop_assert!(convert::rgb_to_lab(RgbColor::new(v + 1, v + 1, v + 1)).l
            > convert::rgb_to_lab(RgbColor::new(v, v, v)).l);
    }

    #[test]
    fn test_rgb_input_accepts_all_bytes(rgb in rgb_strategy()) {
        let [r, g, b] = rgb.to_array().map(|v| v.to_string());
        let parsed = input::parse_rgb([r.as_str(), g.as_str(), b.as_str()]).unwrap();
        prop_assert_eq!(parsed, rgb);
    }

    #[test]
    fn test_hex_parse_display(rgb in rgb_strategy()) {
        let parsed: RgbColor = rgb.to_string().parse().unwrap();
        prop_assert_eq!(parsed, rgb);
    }

    #[test]
    fn test_lab_input_rejects_out_of_range(a in 127.001..1e4f64) {
        let text = a.to_string();
        prop_assert!(input::parse_lab(["50", text.as_str(), "0"]).is_err());
    }
}
