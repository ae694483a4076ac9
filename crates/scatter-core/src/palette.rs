// File: crates/scatter-core/src/palette.rs
// Summary: HUSL categorical palette and label -> color assignment.

use crate::types::Rgba;

// sRGB primaries (XYZ -> linear RGB)
const M: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];
const REF_Y: f64 = 1.0;
const REF_U: f64 = 0.19784;
const REF_V: f64 = 0.46834;
const LAB_E: f64 = 0.008856;
const LAB_K: f64 = 903.3;

/// Hue offset (in turns) of the first palette color.
const HUE_START: f64 = 0.01;
const SATURATION: f64 = 0.9;
const LIGHTNESS: f64 = 0.65;

/// `n` evenly spaced hues in HUSL space at fixed saturation and lightness.
pub fn husl_palette(n: usize) -> Vec<Rgba> {
    (0..n)
        .map(|i| {
            let hue = ((i as f64 / n as f64) + HUE_START).rem_euclid(1.0) * 359.0;
            let (r, g, b) = husl_to_rgb(hue, SATURATION * 99.0, LIGHTNESS * 99.0);
            Rgba::from_unit(r, g, b)
        })
        .collect()
}

/// Colors keyed by label, in first-appearance order.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<(String, Rgba)>,
}

impl Palette {
    pub fn for_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let colors = husl_palette(labels.len());
        Self {
            entries: labels.into_iter().map(str::to_owned).zip(colors).collect(),
        }
    }

    pub fn color_of(&self, label: &str) -> Option<Rgba> {
        self.entries.iter().find(|(l, _)| l == label).map(|&(_, c)| c)
    }

    pub fn entries(&self) -> &[(String, Rgba)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// HUSL (h in degrees, s and l in 0..=100) to unit sRGB, unclipped.
pub fn husl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let (l, c, h) = husl_to_lch(h, s, l);
    let (l, u, v) = lch_to_luv(l, c, h);
    let [x, y, z] = luv_to_xyz(l, u, v);
    let lin = |row: &[f64; 3]| row[0] * x + row[1] * y + row[2] * z;
    (from_linear(lin(&M[0])), from_linear(lin(&M[1])), from_linear(lin(&M[2])))
}

fn husl_to_lch(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if l > 99.999_999_9 {
        return (100.0, 0.0, h);
    }
    if l < 0.000_000_01 {
        return (0.0, 0.0, h);
    }
    (l, max_chroma(l, h) / 100.0 * s, h)
}

/// Largest chroma representable in sRGB for the given lightness and hue.
fn max_chroma(l: f64, h: f64) -> f64 {
    let (sin_h, cos_h) = h.to_radians().sin_cos();
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > LAB_E { sub1 } else { l / LAB_K };
    let mut result = f64::INFINITY;
    for [m1, m2, m3] in M {
        let top = (0.99915 * m1 + 1.05122 * m2 + 1.14460 * m3) * sub2;
        let rbottom = 0.86330 * m3 - 0.17266 * m2;
        let lbottom = 0.12949 * m3 - 0.38848 * m1;
        let bottom = (rbottom * sin_h + lbottom * cos_h) * sub2;
        for t in [0.0, 1.0] {
            let c = l * (top - 1.05122 * t) / (bottom + 0.17266 * sin_h * t);
            if c > 0.0 && c < result {
                result = c;
            }
        }
    }
    result
}

fn lch_to_luv(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (sin_h, cos_h) = h.to_radians().sin_cos();
    (l, cos_h * c, sin_h * c)
}

fn luv_to_xyz(l: f64, u: f64, v: f64) -> [f64; 3] {
    if l == 0.0 {
        return [0.0; 3];
    }
    let var_y = f_inv((l + 16.0) / 116.0);
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = var_y * REF_Y;
    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    [x, y, z]
}

fn f_inv(t: f64) -> f64 {
    let cubed = t.powi(3);
    if cubed > LAB_E { cubed } else { (116.0 * t - 16.0) / LAB_K }
}

fn from_linear(c: f64) -> f64 {
    if c <= 0.003_130_8 { 12.92 * c } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 }
}
