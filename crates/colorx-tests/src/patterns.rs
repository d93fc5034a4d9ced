//! Test pattern generation
//!
//! Deterministic color sets for accuracy and parity runs.

use colorx_core::RgbColor;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Grayscale ramp 0-255
    Grayscale,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Random colors with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Colors with at least one channel at 0 or 255
    GamutBoundary(u64),
}

const CUBE_CORNERS: [RgbColor; 8] = [
    RgbColor::BLACK,
    RgbColor::RED,
    RgbColor::GREEN,
    RgbColor::BLUE,
    RgbColor::new(255, 255, 0),
    RgbColor::new(0, 255, 255),
    RgbColor::new(255, 0, 255),
    RgbColor::WHITE,
];

const SKIN_TONES: [RgbColor; 6] = [
    RgbColor::new(255, 224, 189),
    RgbColor::new(234, 192, 134),
    RgbColor::new(224, 172, 105),
    RgbColor::new(198, 134, 66),
    RgbColor::new(141, 85, 36),
    RgbColor::new(92, 51, 23),
];

/// Generate `count` colors for a pattern
///
/// Fixed-size patterns repeat cyclically to fill `count`.
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<RgbColor> {
    match pattern {
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = if count > 1 { (i * 255 / (count - 1)) as u8 } else { 0 };
                RgbColor::new(v, v, v)
            })
            .collect(),
        TestPattern::ColorCube => CUBE_CORNERS.iter().copied().cycle().take(count).collect(),
        TestPattern::SkinTones => SKIN_TONES.iter().copied().cycle().take(count).collect(),
        TestPattern::HueRamp => (0..count)
            .map(|i| hsl_to_rgb(i as f64 / count.max(1) as f64 * 360.0, 1.0, 0.5))
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut rgb = [0u8; 3];
                    rng.fill_bytes(&mut rgb);
                    RgbColor::from_array(rgb)
                })
                .collect()
        }
        TestPattern::GamutBoundary(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut rgb = [0u8; 3];
                    rng.fill_bytes(&mut rgb);
                    let pinned = rng.gen_range(0..3);
                    rgb[pinned] = if rng.gen_range(0..2) == 0 { 0 } else { 255 };
                    RgbColor::from_array(rgb)
                })
                .collect()
        }
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    RgbColor::from_unit([r + m, g + m, b + m])
}
