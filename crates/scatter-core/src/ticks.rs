// File: crates/scatter-core/src/ticks.rs
// Summary: Tick placement on "nice" steps and tick label formatting.

/// Magnitude at or above which tick labels are scaled and an offset label
/// such as `1e8` is shown instead.
pub const SCI_THRESHOLD: f64 = 1e5;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    pub ticks: Vec<Tick>,
    /// Multiplier label drawn once at the axis end, e.g. `1e8`.
    pub offset_label: Option<String>,
}

/// Smallest step from {1, 2, 2.5, 5, 10} x 10^k that yields at most
/// `max_ticks` ticks over `[min, max]`.
///
/// Works on the half span so ranges near `f64::MAX` do not overflow.
/// Returns NaN when the bounds are not finite.
pub fn nice_step(min: f64, max: f64, max_ticks: usize) -> f64 {
    if !(min.is_finite() && max.is_finite()) {
        return f64::NAN;
    }
    let half = (max * 0.5 - min * 0.5).abs().max(1e-12);
    let raw = half / max_ticks.max(2) as f64 * 2.0;
    let mag = 10f64.powf(raw.log10().floor());
    for m in NICE_STEPS {
        let step = m * mag;
        if half / step * 2.0 <= max_ticks as f64 + 1e-9 {
            return step;
        }
    }
    10.0 * mag
}

/// Tick values on multiples of a nice step, all inside `[min, max]`.
/// Empty when no finite step exists.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let step = nice_step(min, max, max_ticks);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let first = (min / step - 1e-9).ceil();
    let mut out = Vec::new();
    for i in 0..=max_ticks + 1 {
        let v = (first + i as f64) * step;
        if !v.is_finite() {
            break;
        }
        if v > max + eps {
            break;
        }
        out.push(if v.abs() < eps { 0.0 } else { v });
    }
    out
}

/// Place ticks for `[min, max]` and format their labels.
pub fn tick_set(min: f64, max: f64, max_ticks: usize) -> TickSet {
    let values = nice_ticks(min, max, max_ticks);
    let step = nice_step(min, max, max_ticks);
    let max_abs = min.abs().max(max.abs());

    let exponent = if max_abs >= SCI_THRESHOLD { max_abs.log10().floor() as i32 } else { 0 };
    let scale = 10f64.powi(exponent);
    let decimals = decimals_for(step / scale);

    let ticks = values
        .into_iter()
        .map(|value| Tick { value, label: format!("{:.*}", decimals, value / scale) })
        .collect();
    let offset_label = (exponent != 0).then(|| format!("1e{exponent}"));
    TickSet { ticks, offset_label }
}

/// Fewest decimals that represent multiples of `step` exactly.
fn decimals_for(step: f64) -> usize {
    for d in 0..=8 {
        let s = step * 10f64.powi(d as i32);
        if (s - s.round()).abs() < 1e-6 * s.abs().max(1.0) {
            return d;
        }
    }
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_near_f64_max_still_terminates() {
        let a = crate::axis::Axis::fit(None, 0.0, 1.7e308);
        let t = nice_ticks(a.min, a.max, 9);
        assert!(!t.is_empty() && t.len() <= 10);
        assert!(t.iter().all(|v| v.is_finite() && (a.min..=a.max).contains(v)));

        let ts = tick_set(a.min, a.max, 9);
        assert_eq!(ts.offset_label.as_deref(), Some("1e308"));
    }

    #[test]
    fn non_finite_bounds_yield_no_ticks() {
        assert!(nice_ticks(0.0, f64::INFINITY, 6).is_empty());
        assert!(tick_set(f64::NAN, 1.0, 6).ticks.is_empty());
    }

    #[test]
    fn steps_are_nice() {
        assert!((nice_step(0.0, 10.0, 6) - 2.0).abs() < 1e-12);
        assert!((nice_step(0.0, 1.0, 9) - 0.2).abs() < 1e-12);
        assert!((nice_step(0.0, 22_000.0, 9) - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_stay_inside_range() {
        let t = nice_ticks(-1024.0, 22_039.0, 9);
        assert!(t.iter().all(|&v| (-1024.0..=22_039.0).contains(&v)));
        assert!(t.len() <= 10);
        assert!(t.contains(&0.0));
    }

    #[test]
    fn large_values_get_offset_label() {
        let ts = tick_set(0.0, 228_000_000.0, 6);
        assert_eq!(ts.offset_label.as_deref(), Some("1e8"));
        assert_eq!(ts.ticks[0].label, "0.0");
        assert!(ts.ticks.iter().any(|t| t.label == "1.0"));
    }

    #[test]
    fn small_values_plain_labels() {
        let ts = tick_set(0.0, 10.0, 6);
        assert_eq!(ts.offset_label, None);
        let labels: Vec<_> = ts.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "2", "4", "6", "8", "10"]);
    }

    #[test]
    fn fractional_step_decimals() {
        let ts = tick_set(0.0, 1.0, 5);
        assert_eq!(ts.ticks[1].label, "0.2");
    }
}
