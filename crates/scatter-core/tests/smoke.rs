// File: crates/scatter-core/tests/smoke.rs
// Purpose: End-to-end renders writing real image files.

use scatter_core::{render, Record, ScatterChart, ScatterOptions, Theme};
use std::path::PathBuf;

fn out_path(name: &str) -> PathBuf {
    let out = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    let _ = std::fs::remove_file(&out);
    out
}

fn formats() -> Vec<Record> {
    vec![
        Record::new("vtk", 2354.0, 217_428_604.0),
        Record::new("tck", 3337.0, 137_615_686.0),
        Record::new("trk", 3418.0, 137_369_684.0),
        Record::new("trx", 494.0, 137_369_222.0),
    ]
}

#[test]
fn render_writes_exactly_one_png() {
    let out = out_path("smoke_annotated.png");
    let opts = ScatterOptions::new(&out)
        .title("MacBook Air M1")
        .axis_labels("time", "bytes")
        .annotate_points(true)
        .y_min_zero(true)
        .figure_size(4.0, 2.0)
        .dpi(50.0);

    render(&formats(), &opts).expect("render should succeed");

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (200, 100));

    // no temporary left next to the output
    let partial = out.with_file_name("smoke_annotated.png.partial");
    assert!(!partial.exists());
}

#[test]
fn colored_legend_render_succeeds() {
    let out = out_path("smoke_colored.png");
    let opts = ScatterOptions::new(&out)
        .title("Relative Time vs Size for Each Format")
        .axis_labels("Relative Time", "Size (Bytes)")
        .color_by_label(true)
        .legend_title("Format")
        .point_size(2.0)
        .figure_size(5.0, 2.5)
        .dpi(60.0);

    ScatterChart::new(formats(), opts).render().expect("render should succeed");
    let img = image::open(&out).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (300, 150));
}

#[test]
fn in_memory_bytes_match_output_format() {
    let chart = ScatterChart::new(formats(), ScatterOptions::new("unused.png").dpi(40.0));
    let bytes = chart.render_to_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));

    let jpeg = ScatterChart::new(formats(), ScatterOptions::new("unused.jpg").dpi(40.0));
    let bytes = jpeg.render_to_bytes().expect("render jpeg");
    assert!(bytes.starts_with(&[0xFF, 0xD8]), "should be JPEG SOI marker");
}

#[test]
fn markers_paint_their_color() {
    let opts = ScatterOptions::new("unused.png").dpi(100.0).render_text(false);
    let chart = ScatterChart::new(vec![("trx", 494.0, 137_369_222.0), ("trk", 3418.0, 137_369_684.0)], opts);

    let scene = chart.scene().unwrap();
    let img = image::load_from_memory(&chart.render_to_bytes().unwrap()).unwrap().to_rgba8();
    for m in &scene.markers {
        let px = img.get_pixel(m.cx.floor() as u32, m.cy.floor() as u32);
        assert_eq!(px.0, [m.fill.r, m.fill.g, m.fill.b, 255], "marker {} center", m.record);
    }
    // top-left corner is figure background
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn legend_swatches_paint_palette_colors() {
    let opts = ScatterOptions::new("unused.png")
        .color_by_label(true)
        .point_size(2.0)
        .render_text(false);
    let chart = ScatterChart::new(formats(), opts);
    let scene = chart.scene().unwrap();
    let img = image::load_from_memory(&chart.render_to_bytes().unwrap()).unwrap().to_rgba8();

    let legend = scene.legend.as_ref().expect("legend");
    assert_eq!(legend.entries.len(), 4);
    for e in &legend.entries {
        let (x, y) = e.swatch_center;
        let px = img.get_pixel(x.floor() as u32, y.floor() as u32);
        assert_eq!(px.0, [e.color.r, e.color.g, e.color.b, 255], "swatch {}", e.label);
    }
}

#[test]
fn grid_lines_stay_inside_the_plot() {
    let base = ScatterOptions::new("unused.png").figure_size(4.0, 2.0).dpi(72.0).render_text(false);
    let plain = ScatterChart::new(formats(), base.clone());
    let gridded = ScatterChart::new(formats(), base.show_grid(true));

    let scene = gridded.scene().unwrap();
    assert!(scene.show_grid);
    let a = image::load_from_memory(&plain.render_to_bytes().unwrap()).unwrap().to_rgba8();
    let b = image::load_from_memory(&gridded.render_to_bytes().unwrap()).unwrap().to_rgba8();

    let p = scene.plot;
    let mut changed = 0;
    for (x, y, px) in b.enumerate_pixels() {
        if a.get_pixel(x, y) != px {
            changed += 1;
            let (fx, fy) = (x as f32, y as f32);
            assert!(
                fx >= p.left - 2.0 && fx <= p.right + 2.0 && fy >= p.top - 2.0 && fy <= p.bottom + 2.0,
                "grid pixel ({x}, {y}) outside plot {p:?}"
            );
        }
    }
    assert!(changed > 0, "grid should paint something");
}

#[test]
fn dark_theme_paints_dark_background() {
    let out = out_path("smoke_dark.png");
    let dark = Theme::dark();
    let opts = ScatterOptions::new(&out)
        .theme(dark)
        .title("dark")
        .figure_size(3.0, 2.0)
        .dpi(50.0)
        .render_text(false);
    render(&formats(), &opts).expect("render should succeed");

    let img = image::open(&out).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (150, 100));
    let bg = dark.background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r, bg.g, bg.b, 255]);
}
