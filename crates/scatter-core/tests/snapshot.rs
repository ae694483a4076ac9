// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Determinism checks plus a golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic glyph-free charts to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use scatter_core::{Record, ScatterChart, ScatterOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn m1_table() -> Vec<Record> {
    vec![
        Record::new("vtk", 2354.0, 217_428_604.0),
        Record::new("tck", 3337.0, 137_615_686.0),
        Record::new("trk", 3418.0, 137_369_684.0),
        Record::new("trk.gz", 11509.0, 59_896_111.0),
        Record::new("trx", 494.0, 137_369_222.0),
    ]
}

fn glyph_free(opts: ScatterOptions) -> ScatterOptions {
    // no glyphs: font rasterization varies across hosts
    opts.figure_size(4.0, 2.0).dpi(72.0).render_text(false)
}

#[test]
fn repeated_renders_are_identical() {
    let opts = ScatterOptions::new("unused.png")
        .title("MacBook Air M1")
        .annotate_points(true)
        .color_by_label(true)
        .dpi(50.0);
    let chart = ScatterChart::new(m1_table(), opts);
    let a = chart.render_to_bytes().expect("first render");
    let b = chart.render_to_bytes().expect("second render");
    assert_eq!(a, b);
    assert_eq!(chart.scene().unwrap(), chart.scene().unwrap());
}

#[test]
fn golden_annotated_scatter() {
    let opts = glyph_free(ScatterOptions::new("unused.png").annotate_points(true).y_min_zero(true).alpha(0.5));
    let bytes = ScatterChart::new(m1_table(), opts).render_to_bytes().expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/annotated.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_colored_scatter() {
    let opts = glyph_free(ScatterOptions::new("unused.png").color_by_label(true).point_size(2.0).legend_title("Format"));
    let bytes = ScatterChart::new(m1_table(), opts).render_to_bytes().expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/colored.png");
    write_or_compare(&path, &bytes);
}
