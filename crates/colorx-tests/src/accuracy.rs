//! Accuracy measurement using perceptual color difference
//!
//! CIEDE2000 is the primary metric. A deltaE2000 of 1.0 is roughly the
//! smallest difference a trained observer can see.

use colorx_core::LabColor;

/// 25^7, the chroma normalizer in CIEDE2000
const POW25_7: f64 = 6_103_515_625.0;

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of deltaE samples
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }

        samples.sort_by(f64::total_cmp);
        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let max = samples[count - 1];
        let p95 = samples[((count as f64 * 0.95) as usize).min(count - 1)];

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }
}

impl std::fmt::Display for DeltaEStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.4} p95={:.4} max={:.4}",
            self.count, self.mean, self.p95, self.max
        )
    }
}

/// Hue angle in degrees, 0 for an achromatic sample
fn hue_prime(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    }
}

/// deltaE2000 between two Lab colors, with kL = kC = kH = 1
pub fn delta_e_2000(lab1: LabColor, lab2: LabColor) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let c_avg7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_avg7 / (c_avg7 + POW25_7)).sqrt());

    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);
    let h1p = hue_prime(a1p, lab1.b);
    let h2p = hue_prime(a2p, lab2.b);
    let chromatic = c1p * c2p != 0.0;

    let dh = if !chromatic {
        0.0
    } else {
        match h2p - h1p {
            d if d > 180.0 => d - 360.0,
            d if d < -180.0 => d + 360.0,
            d => d,
        }
    };
    let dl = lab2.l - lab1.l;
    let dc = c2p - c1p;
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dh.to_radians() / 2.0).sin();

    let l_avg = (lab1.l + lab2.l) / 2.0;
    let c_avg_p = (c1p + c2p) / 2.0;
    let h_avg = if !chromatic {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_avg - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_avg).to_radians().cos()
        + 0.32 * (3.0 * h_avg + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_avg - 63.0).to_radians().cos();

    let l50 = (l_avg - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let s_c = 1.0 + 0.045 * c_avg_p;
    let s_h = 1.0 + 0.015 * c_avg_p * t;

    let d_theta = 30.0 * (-((h_avg - 275.0) / 25.0).powi(2)).exp();
    let c_avg_p7 = c_avg_p.powi(7);
    let r_c = 2.0 * (c_avg_p7 / (c_avg_p7 + POW25_7)).sqrt();
    let r_t = -r_c * (2.0 * d_theta).to_radians().sin();

    let (tl, tc, th) = (dl / s_l, dc / s_c, dh_big / s_h);
    (tl * tl + tc * tc + th * th + r_t * tc * th).sqrt()
}

/// Compare two Lab sample sets pairwise
pub fn compare_lab(reference: &[LabColor], result: &[LabColor]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());
    DeltaEStats::from_samples(
        reference
            .iter()
            .zip(result)
            .map(|(&a, &b)| delta_e_2000(a, b))
            .collect(),
    )
}
