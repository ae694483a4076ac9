// File: crates/bench-figures/src/lib.rs
// Summary: Embedded benchmark tables (time vs. bytes per streamline format) and the figure presets that draw them.

use scatter_core::types::MARKER_DIAMETER_PT;
use scatter_core::{Record, ScatterOptions};

pub mod telemetry;

pub const M1_OUTPUT: &str = "M1.png";
pub const M2_OUTPUT: &str = "M2.png";

/// Streamline formats loaded on a MacBook Air M1: elapsed time (ms over ten
/// loads) and file size in bytes.
pub fn m1_records() -> Vec<Record> {
    let time = [2354.0, 3337.0, 3418.0, 11509.0, 15376.0, 494.0, 8161.0, 14928.0, 21013.0];
    let bytes = [
        217_428_604.0, 137_615_686.0, 137_369_684.0, 59_896_111.0, 38_597_377.0,
        137_369_222.0, 62_858_566.0, 68_746_592.0, 53_953_006.0,
    ];
    zip_table(&time, &bytes)
}

/// Annotated single-color scatter, y axis from zero.
pub fn m1_options() -> ScatterOptions {
    ScatterOptions::new(M1_OUTPUT)
        .title("MacBook Air M1")
        .axis_labels("time", "bytes")
        .figure_size(7.0, 3.5)
        .dpi(300.0)
        .alpha(0.5)
        .annotate_points(true)
        .y_min_zero(true)
}

/// Relative load time and size of a smaller tractogram in each format.
pub fn m2_records() -> Vec<Record> {
    let time = [459.0, 866.0, 924.0, 3881.0, 4012.0, 159.0, 2763.0, 373.0, 2708.0];
    let bytes = [
        113_218_694.0, 59_236_654.0, 59_067_828.0, 28_746_432.0, 28_291_562.0,
        59_152_204.0, 28_502_799.0, 29_661_208.0, 24_245_538.0,
    ];
    zip_table(&time, &bytes)
}

/// Marker area for the M2 figure, in square points.
pub const M2_MARKER_AREA_PT2: f32 = 200.0;

/// One color per format with a legend beside the plot. Markers cover
/// `M2_MARKER_AREA_PT2`, so their diameter is its square root (about 14.1 pt).
pub fn m2_options() -> ScatterOptions {
    ScatterOptions::new(M2_OUTPUT)
        .title("Relative Time vs Size for Each Format")
        .axis_labels("Relative Time", "Size (Bytes)")
        .figure_size(10.0, 5.0)
        .dpi(300.0)
        .color_by_label(true)
        .legend_title("Format")
        .point_size(M2_MARKER_AREA_PT2.sqrt() / MARKER_DIAMETER_PT)
}

/// Format labels shared by both tables, in plotting order.
pub const FORMATS: [&str; 9] = ["vtk", "tck", "trk", "trk.gz", "trk.zst", "trx", "z.trx", "16.trx", "16z.trx"];

fn zip_table(time: &[f64; 9], bytes: &[f64; 9]) -> Vec<Record> {
    FORMATS
        .iter()
        .zip(time.iter().zip(bytes))
        .map(|(&label, (&t, &b))| Record::new(label, t, b))
        .collect()
}
