// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart and the headless raster pipeline (Skia CPU surface -> encoded file).

use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{RenderError, Result};
use crate::options::{ImageFormat, ScatterOptions};
use crate::record::Record;
use crate::scene::{Anchor, Legend, Scene, TextItem};
use crate::text::{TextMetrics, TextShaper};
use crate::types::Rgba;

/// A record table together with the options used to draw it.
#[derive(Clone, Debug)]
pub struct ScatterChart {
    pub records: Vec<Record>,
    pub options: ScatterOptions,
}

impl ScatterChart {
    pub fn new<R: Into<Record>>(records: impl IntoIterator<Item = R>, options: ScatterOptions) -> Self {
        Self { records: records.into_iter().map(Into::into).collect(), options }
    }

    /// Layout with font-free text estimates.
    pub fn scene(&self) -> Result<Scene> {
        Scene::build(&self.records, &self.options)
    }

    /// Encode the chart in memory in the format implied by `output_path`.
    pub fn render_to_bytes(&self) -> Result<Vec<u8>> {
        encode(&self.records, &self.options)
    }

    /// Write the chart to `options.output_path`.
    pub fn render(&self) -> Result<()> {
        render(&self.records, &self.options)
    }
}

/// Render `records` and write the image to `options.output_path`.
///
/// The image is fully encoded before anything touches the file system, then
/// written next to the target and renamed over it: either the complete image
/// exists afterwards or no file was produced.
#[tracing::instrument(level = "debug", skip_all, fields(records = records.len(), path = %options.output_path.display()))]
pub fn render(records: &[Record], options: &ScatterOptions) -> Result<()> {
    let bytes = encode(records, options)?;
    write_atomically(&options.output_path, &bytes)?;
    info!(
        path = %options.output_path.display(),
        bytes = bytes.len(),
        dpi = options.dpi,
        "wrote scatter chart"
    );
    Ok(())
}

/// Lay out, paint and encode without writing.
pub fn encode(records: &[Record], options: &ScatterOptions) -> Result<Vec<u8>> {
    let format = ImageFormat::from_path(&options.output_path)?;
    let shaper = TextShaper::new();
    // Glyph-free renders use the font-independent estimate so layout is identical across hosts.
    let scene = if options.render_text {
        Scene::build_with(records, options, &shaper)?
    } else {
        Scene::build(records, options)?
    };

    let mut surface = skia::surfaces::raster_n32_premul((scene.width, scene.height))
        .ok_or_else(|| RenderError::Backend(format!("failed to create {}x{} raster surface", scene.width, scene.height)))?;
    paint_scene(surface.canvas(), &scene, &shaper);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(match format {
            ImageFormat::Png => skia::EncodedImageFormat::PNG,
            ImageFormat::Jpeg => skia::EncodedImageFormat::JPEG,
        })
        .ok_or_else(|| RenderError::Backend(format!("{format:?} encoding failed")))?;
    debug!(?format, bytes = data.len(), "encoded");
    Ok(data.as_bytes().to_vec())
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = partial_path(path);
    let result = std::fs::write(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp);
        return Err(RenderError::io(path, e));
    }
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

// ---- painting ---------------------------------------------------------------

fn sk(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(sk(c));
    p
}

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(sk(c));
    p
}

fn paint_scene(canvas: &skia::Canvas, scene: &Scene, shaper: &TextShaper) {
    let theme = &scene.theme;
    let plot = scene.plot;
    let plot_rect = skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom);

    canvas.clear(sk(theme.background));
    canvas.draw_rect(plot_rect, &fill_paint(theme.plot_background));

    if scene.show_grid {
        draw_grid(canvas, scene);
    }

    // Markers stay inside the axes, annotations may overhang.
    canvas.save();
    canvas.clip_rect(plot_rect, skia::ClipOp::Intersect, true);
    for m in &scene.markers {
        canvas.draw_circle((m.cx, m.cy), m.radius, &fill_paint(m.fill));
        if let Some(edge) = m.edge {
            canvas.draw_circle((m.cx, m.cy), m.radius, &stroke_paint(edge, m.edge_width));
        }
    }
    canvas.restore();

    draw_axes(canvas, scene);

    if let Some(legend) = &scene.legend {
        draw_legend(canvas, legend, scene, shaper);
    }

    if !scene.render_text {
        return;
    }
    for t in &scene.texts {
        draw_text(canvas, shaper, t, theme.text);
    }
    for a in &scene.annotations {
        shaper.draw_baseline(canvas, &a.text, a.x, a.y, a.size, theme.text);
    }
}

fn draw_grid(canvas: &skia::Canvas, scene: &Scene) {
    let paint = stroke_paint(scene.theme.grid, scene.line_width);
    let p = scene.plot;
    for &x in &scene.x_tick_px {
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
    for &y in &scene.y_tick_px {
        canvas.draw_line((p.left, y), (p.right, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, scene: &Scene) {
    let p = scene.plot;
    let spine = stroke_paint(scene.theme.axis_line, scene.line_width);
    canvas.draw_rect(skia::Rect::from_ltrb(p.left, p.top, p.right, p.bottom), &spine);

    let tick = stroke_paint(scene.theme.tick, scene.line_width);
    for &x in &scene.x_tick_px {
        canvas.draw_line((x, p.bottom), (x, p.bottom + scene.tick_len), &tick);
    }
    for &y in &scene.y_tick_px {
        canvas.draw_line((p.left, y), (p.left - scene.tick_len, y), &tick);
    }
}

fn draw_legend(canvas: &skia::Canvas, legend: &Legend, scene: &Scene, shaper: &TextShaper) {
    let theme = &scene.theme;
    let f = legend.frame;
    let rect = skia::Rect::from_ltrb(f.left, f.top, f.right, f.bottom);
    canvas.draw_rect(rect, &fill_paint(theme.legend_background));
    canvas.draw_rect(rect, &stroke_paint(theme.legend_frame, scene.line_width));

    let edge_width = scene.markers.first().map_or(scene.line_width, |m| m.edge_width);
    for e in &legend.entries {
        canvas.draw_circle(e.swatch_center, legend.swatch_radius, &fill_paint(e.color));
        canvas.draw_circle(e.swatch_center, legend.swatch_radius, &stroke_paint(theme.marker_edge, edge_width));
    }

    if !scene.render_text {
        return;
    }
    if let Some(title) = &legend.title {
        draw_text(canvas, shaper, title, theme.text);
    }
    for e in &legend.entries {
        shaper.draw_baseline(canvas, &e.label, e.text_x, e.text_y, legend.font_size, theme.text);
    }
}

fn draw_text(canvas: &skia::Canvas, shaper: &TextShaper, t: &TextItem, color: Rgba) {
    let w = shaper.width(&t.text, t.size);
    let shift = match t.anchor {
        Anchor::Start => 0.0,
        Anchor::Middle => -w * 0.5,
        Anchor::End => -w,
    };
    if t.vertical {
        canvas.save();
        canvas.translate((t.x, t.y));
        canvas.rotate(-90.0, None);
        shaper.draw_baseline(canvas, &t.text, shift, 0.0, t.size, color);
        canvas.restore();
    } else {
        shaper.draw_baseline(canvas, &t.text, t.x + shift, t.y, t.size, color);
    }
}
