// File: crates/scatter-core/src/record.rs
// Summary: Record model (label, x, y) and table validation.

use crate::error::{RenderError, Result};

/// One benchmark measurement: a format label, a relative elapsed time (x)
/// and a size in bytes (y).
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl Record {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self { label: label.into(), x, y }
    }
}

impl<S: Into<String>> From<(S, f64, f64)> for Record {
    fn from((label, x, y): (S, f64, f64)) -> Self {
        Self::new(label, x, y)
    }
}

/// Check the table invariants: non-empty with finite non-negative measurements.
/// Labels may repeat; repeated labels share a color when coloring by label.
pub fn validate_records(records: &[Record]) -> Result<()> {
    if records.is_empty() {
        return Err(RenderError::invalid("table is empty"));
    }
    for (i, r) in records.iter().enumerate() {
        check_measurement(i, &r.label, "x", r.x)?;
        check_measurement(i, &r.label, "y", r.y)?;
    }
    Ok(())
}

fn check_measurement(row: usize, label: &str, axis: &str, v: f64) -> Result<()> {
    if !v.is_finite() {
        return Err(RenderError::invalid(format!("row {row} ('{label}'): {axis} is not finite")));
    }
    if v < 0.0 {
        return Err(RenderError::invalid(format!("row {row} ('{label}'): {axis} = {v} is negative")));
    }
    Ok(())
}

/// Distinct labels in order of first appearance.
pub fn distinct_labels(records: &[Record]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for r in records {
        if !out.contains(&r.label.as_str()) {
            out.push(&r.label);
        }
    }
    out
}

/// (min, max) over x and y; `None` for an empty slice.
pub fn data_bounds(records: &[Record]) -> Option<((f64, f64), (f64, f64))> {
    let first = records.first()?;
    let mut xr = (first.x, first.x);
    let mut yr = (first.y, first.y);
    for r in &records[1..] {
        xr = (xr.0.min(r.x), xr.1.max(r.x));
        yr = (yr.0.min(r.y), yr.1.max(r.y));
    }
    Some((xr, yr))
}
