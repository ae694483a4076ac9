// File: crates/scatter-core/src/axis.rs
// Summary: Axis model with labels and data-fitted ranges.

/// Fraction of the data span added on each side when auto-fitting.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: Option<String>,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: Option<String>, min: f64, max: f64) -> Self {
        Self { label, min, max }
    }

    /// Fit `[lo, hi]` with a 5% margin on each side.
    /// A degenerate range expands to `v +- max(|v| * 5%, 0.5)`.
    pub fn fit(label: Option<String>, lo: f64, hi: f64) -> Self {
        let span = hi - lo;
        let (min, max) = if span.abs() < 1e-9 {
            let pad = (lo.abs() * MARGIN).max(0.5);
            (lo - pad, hi + pad)
        } else {
            (lo - span * MARGIN, hi + span * MARGIN)
        };
        Self { label, min, max }
    }

    /// Pin the lower bound to exactly zero, keeping a usable span.
    pub fn with_zero_min(mut self) -> Self {
        self.min = 0.0;
        if self.max <= 0.0 {
            self.max = 1.0;
        }
        self
    }

    /// Width of the range; infinite when it exceeds `f64::MAX`.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-12)
    }

    /// Map a data value onto `[from, to]` pixels (to may be < from for y).
    /// Halved operands keep the ratio finite for ranges wider than `f64::MAX`.
    #[inline]
    pub fn to_px(&self, v: f64, from: f32, to: f32) -> f32 {
        let half_span = (self.max * 0.5 - self.min * 0.5).max(1e-12);
        from + ((v * 0.5 - self.min * 0.5) / half_span) as f32 * (to - from)
    }
}
