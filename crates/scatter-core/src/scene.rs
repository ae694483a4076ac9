// File: crates/scatter-core/src/scene.rs
// Summary: Renderer-agnostic scene: fitted axes, ticks, markers, annotations, legend and text, in pixels.
// Notes:
// - Every size in the options is in points; the scene converts once using dpi / 72.
// - The backend only paints what is here, so tests inspect the scene directly.

use tracing::debug;

use crate::axis::Axis;
use crate::error::{RenderError, Result};
use crate::options::ScatterOptions;
use crate::palette::Palette;
use crate::record::{data_bounds, distinct_labels, validate_records, Record};
use crate::text::{ApproxMetrics, TextMetrics};
use crate::theme::Theme;
use crate::ticks::{tick_set, TickSet};
use crate::types::{Insets, RectF, Rgba, MARKER_DIAMETER_PT};

/// Upper bound on tick count per axis.
pub const MAX_X_TICKS: usize = 9;
pub const MAX_Y_TICKS: usize = 6;

// Typographic sizes, in points.
const PAD_PT: f32 = 4.0;
const TICK_FONT_PT: f32 = 10.0;
const LABEL_FONT_PT: f32 = 10.0;
const TITLE_FONT_PT: f32 = 12.0;
const ANNOTATION_FONT_PT: f32 = 10.0;
const LEGEND_FONT_PT: f32 = 10.0;
const TICK_LEN_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const LABEL_PAD_PT: f32 = 4.0;
const TITLE_PAD_PT: f32 = 6.0;
const LINE_WIDTH_PT: f32 = 0.8;
const MARKER_EDGE_PT: f32 = 0.75;
const LEGEND_PAD_PT: f32 = 4.0;
const LEGEND_GAP_PT: f32 = 6.0;
/// Legend box offset right of the plot, as a fraction of the plot width.
const LEGEND_OFFSET: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Title,
    AxisLabel,
    TickLabel,
    OffsetLabel,
    LegendTitle,
}

/// A piece of chart text with its baseline anchor point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub role: TextRole,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub anchor: Anchor,
    /// Rotated 90 degrees counter-clockwise (y-axis label).
    pub vertical: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Index of the source record.
    pub record: usize,
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub fill: Rgba,
    pub edge: Option<Rgba>,
    pub edge_width: f32,
}

/// Label text whose baseline starts at its point.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub record: usize,
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Data coordinates of the annotated point.
    pub at: (f64, f64),
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
    pub swatch_center: (f32, f32),
    pub text_x: f32,
    pub text_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub frame: RectF,
    pub title: Option<TextItem>,
    pub entries: Vec<LegendEntry>,
    pub swatch_radius: f32,
    pub font_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub plot: RectF,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_ticks: TickSet,
    pub y_ticks: TickSet,
    /// Pixel positions matching `x_ticks` / `y_ticks`.
    pub x_tick_px: Vec<f32>,
    pub y_tick_px: Vec<f32>,
    pub tick_len: f32,
    pub line_width: f32,
    pub show_grid: bool,
    pub render_text: bool,
    pub markers: Vec<Marker>,
    pub annotations: Vec<Annotation>,
    pub legend: Option<Legend>,
    pub texts: Vec<TextItem>,
}

/// Font and spacing sizes resolved to pixels.
struct Metrics<'a> {
    m: &'a dyn TextMetrics,
    pad: f32,
    tick_font: f32,
    label_font: f32,
    title_font: f32,
    tick_len: f32,
    tick_pad: f32,
    label_pad: f32,
    title_pad: f32,
}

impl<'a> Metrics<'a> {
    fn new(m: &'a dyn TextMetrics, s: f32) -> Self {
        Self {
            m,
            pad: PAD_PT * s,
            tick_font: TICK_FONT_PT * s,
            label_font: LABEL_FONT_PT * s,
            title_font: TITLE_FONT_PT * s,
            tick_len: TICK_LEN_PT * s,
            tick_pad: TICK_PAD_PT * s,
            label_pad: LABEL_PAD_PT * s,
            title_pad: TITLE_PAD_PT * s,
        }
    }

    fn lh(&self, size: f32) -> f32 {
        self.m.line_height(size)
    }
}

/// Baseline of a line of text whose box starts at `top`.
fn baseline_below(top: f32, size: f32) -> f32 {
    top + size * 0.95
}

/// Baseline that vertically centers a line on `center`.
fn baseline_centered(center: f32, size: f32) -> f32 {
    center + size * 0.35
}

impl Scene {
    /// Build with font-free text estimates.
    pub fn build(records: &[Record], opts: &ScatterOptions) -> Result<Self> {
        Self::build_with(records, opts, &ApproxMetrics)
    }

    pub fn build_with(records: &[Record], opts: &ScatterOptions, metrics: &dyn TextMetrics) -> Result<Self> {
        opts.validate()?;
        validate_records(records)?;
        let ((x_lo, x_hi), (y_lo, y_hi)) =
            data_bounds(records).ok_or_else(|| RenderError::invalid("table is empty"))?;

        let (width, height) = opts.pixel_size();
        let s = opts.px_per_pt();
        let mt = Metrics::new(metrics, s);

        let x_axis = Axis::fit(opts.x_label.clone(), x_lo, x_hi);
        let mut y_axis = Axis::fit(opts.y_label.clone(), y_lo, y_hi);
        if opts.y_min_zero {
            y_axis = y_axis.with_zero_min();
        }
        let x_ticks = tick_set(x_axis.min, x_axis.max, MAX_X_TICKS);
        let y_ticks = tick_set(y_axis.min, y_axis.max, MAX_Y_TICKS);

        let palette = opts
            .color_by_label
            .then(|| Palette::for_labels(distinct_labels(records)));

        let marker_d = MARKER_DIAMETER_PT * opts.point_size * s;
        let legend_size = palette
            .as_ref()
            .map(|p| legend_extent(p, opts.legend_title.as_deref(), marker_d, s, metrics));

        let insets = compute_insets(&mt, opts, &x_ticks, &y_ticks, legend_size.map(|(w, _)| w));
        let plot_w = match legend_size {
            // plot_w + offset * plot_w + legend_w fills the space right of the left inset
            Some(_) => (width as f32 - insets.hsum()) / (1.0 + LEGEND_OFFSET),
            None => width as f32 - insets.hsum(),
        }
        .max(1.0);
        let plot_h = (height as f32 - insets.vsum()).max(1.0);
        let plot = RectF::from_ltrb(insets.left, insets.top, insets.left + plot_w, insets.top + plot_h);

        let x_tick_px = x_tick_px_of(&x_ticks, &x_axis, &plot);
        let y_tick_px = y_tick_px_of(&y_ticks, &y_axis, &plot);

        let markers = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let base = palette
                    .as_ref()
                    .and_then(|p| p.color_of(&r.label))
                    .unwrap_or(opts.theme.marker);
                Marker {
                    record: i,
                    cx: x_axis.to_px(r.x, plot.left, plot.right),
                    cy: y_axis.to_px(r.y, plot.bottom, plot.top),
                    radius: marker_d * 0.5,
                    fill: base.with_alpha(opts.alpha),
                    edge: palette.as_ref().map(|_| opts.theme.marker_edge.with_alpha(opts.alpha)),
                    edge_width: MARKER_EDGE_PT * s,
                }
            })
            .collect::<Vec<_>>();

        let annotations = if opts.annotate_points {
            records
                .iter()
                .zip(&markers)
                .map(|(r, m)| Annotation {
                    record: m.record,
                    text: r.label.clone(),
                    x: m.cx,
                    y: m.cy,
                    at: (r.x, r.y),
                    size: ANNOTATION_FONT_PT * s,
                })
                .collect()
        } else {
            Vec::new()
        };

        let legend = match (&palette, legend_size) {
            (Some(p), Some((lw, lh))) => {
                let left = plot.right + LEGEND_OFFSET * plot_w;
                let frame = RectF::from_ltrb(left, plot.top, left + lw, plot.top + lh);
                Some(place_legend(p, opts.legend_title.as_deref(), frame, marker_d, s, metrics))
            }
            _ => None,
        };

        let texts = chrome_texts(
            &mt,
            opts.title.as_deref(),
            (&x_axis, &y_axis),
            &plot,
            (&x_ticks, &y_ticks),
            (x_tick_px.as_slice(), y_tick_px.as_slice()),
        );

        debug!(
            width,
            height,
            plot_left = plot.left,
            plot_top = plot.top,
            plot_w,
            plot_h,
            markers = markers.len(),
            annotations = annotations.len(),
            legend_entries = legend.as_ref().map_or(0, |l| l.entries.len()),
            "scene laid out"
        );

        Ok(Self {
            width,
            height,
            theme: opts.theme,
            plot,
            x_axis,
            y_axis,
            x_ticks,
            y_ticks,
            x_tick_px,
            y_tick_px,
            tick_len: mt.tick_len,
            line_width: LINE_WIDTH_PT * s,
            show_grid: opts.show_grid,
            render_text: opts.render_text,
            markers,
            annotations,
            legend,
            texts,
        })
    }

    /// Number of distinct marker fill colors.
    pub fn distinct_marker_colors(&self) -> usize {
        let mut seen: Vec<Rgba> = Vec::new();
        for m in &self.markers {
            if !seen.iter().any(|c| c.same_rgb(&m.fill)) {
                seen.push(m.fill);
            }
        }
        seen.len()
    }

    pub fn legend_len(&self) -> usize {
        self.legend.as_ref().map_or(0, |l| l.entries.len())
    }

    pub fn texts_with_role(&self, role: TextRole) -> impl Iterator<Item = &TextItem> {
        self.texts.iter().filter(move |t| t.role == role)
    }
}

fn x_tick_px_of(ticks: &TickSet, axis: &Axis, plot: &RectF) -> Vec<f32> {
    ticks.ticks.iter().map(|t| axis.to_px(t.value, plot.left, plot.right)).collect()
}

fn y_tick_px_of(ticks: &TickSet, axis: &Axis, plot: &RectF) -> Vec<f32> {
    ticks.ticks.iter().map(|t| axis.to_px(t.value, plot.bottom, plot.top)).collect()
}

fn compute_insets(
    mt: &Metrics<'_>,
    opts: &ScatterOptions,
    x_ticks: &TickSet,
    y_ticks: &TickSet,
    legend_w: Option<f32>,
) -> Insets {
    let widest_y = y_ticks
        .ticks
        .iter()
        .map(|t| mt.m.width(&t.label, mt.tick_font))
        .fold(0.0f32, f32::max);
    let y_label_w = if opts.y_label.is_some() { mt.lh(mt.label_font) + mt.label_pad } else { 0.0 };
    let left = mt.pad + y_label_w + widest_y + mt.tick_pad + mt.tick_len;

    let x_offset_h = if x_ticks.offset_label.is_some() { mt.lh(mt.tick_font) } else { 0.0 };
    let x_label_h = if opts.x_label.is_some() { mt.lh(mt.label_font) + mt.label_pad } else { 0.0 };
    let bottom = mt.pad + x_label_h + x_offset_h + mt.lh(mt.tick_font) + mt.tick_pad + mt.tick_len;

    let title_h = if opts.title.is_some() { mt.lh(mt.title_font) + mt.title_pad } else { 0.0 };
    // room for the y offset label, or for the top tick label overhang
    let y_top = if y_ticks.offset_label.is_some() { mt.lh(mt.tick_font) } else { mt.lh(mt.tick_font) * 0.5 };
    let top = mt.pad + title_h + y_top;

    let right = match legend_w {
        Some(w) => mt.pad + w,
        None => {
            let last = x_ticks.ticks.last().map_or(0.0, |t| mt.m.width(&t.label, mt.tick_font));
            mt.pad + last * 0.5
        }
    };
    Insets::new(left, right, top, bottom)
}

fn legend_row_height(font: f32, marker_d: f32, s: f32, metrics: &dyn TextMetrics) -> f32 {
    metrics.line_height(font).max(marker_d + 2.0 * s)
}

/// (width, height) of the legend box.
fn legend_extent(p: &Palette, title: Option<&str>, marker_d: f32, s: f32, metrics: &dyn TextMetrics) -> (f32, f32) {
    let font = LEGEND_FONT_PT * s;
    let inner = LEGEND_PAD_PT * s;
    let row = legend_row_height(font, marker_d, s, metrics);
    let widest = p
        .entries()
        .iter()
        .map(|(l, _)| metrics.width(l, font))
        .fold(0.0f32, f32::max);
    let mut w = 2.0 * inner + marker_d + LEGEND_GAP_PT * s + widest;
    if let Some(t) = title {
        w = w.max(2.0 * inner + metrics.width(t, font));
    }
    let rows = p.len() + usize::from(title.is_some());
    (w, 2.0 * inner + rows as f32 * row)
}

fn place_legend(p: &Palette, title: Option<&str>, frame: RectF, marker_d: f32, s: f32, metrics: &dyn TextMetrics) -> Legend {
    let font = LEGEND_FONT_PT * s;
    let inner = LEGEND_PAD_PT * s;
    let row = legend_row_height(font, marker_d, s, metrics);
    let mut top = frame.top + inner;

    let title = title.map(|t| {
        let item = TextItem {
            role: TextRole::LegendTitle,
            text: t.to_string(),
            x: (frame.left + frame.right) * 0.5,
            y: baseline_centered(top + row * 0.5, font),
            size: font,
            anchor: Anchor::Middle,
            vertical: false,
        };
        top += row;
        item
    });

    let entries = p
        .entries()
        .iter()
        .enumerate()
        .map(|(i, (label, color))| {
            let center_y = top + row * (i as f32 + 0.5);
            let swatch_x = frame.left + inner + marker_d * 0.5;
            LegendEntry {
                label: label.clone(),
                color: *color,
                swatch_center: (swatch_x, center_y),
                text_x: frame.left + inner + marker_d + LEGEND_GAP_PT * s,
                text_y: baseline_centered(center_y, font),
            }
        })
        .collect();

    Legend { frame, title, entries, swatch_radius: marker_d * 0.5, font_size: font }
}

fn chrome_texts(
    mt: &Metrics<'_>,
    title: Option<&str>,
    (x_axis, y_axis): (&Axis, &Axis),
    plot: &RectF,
    (x_ticks, y_ticks): (&TickSet, &TickSet),
    (x_px, y_px): (&[f32], &[f32]),
) -> Vec<TextItem> {
    let mut out = Vec::new();
    let cx = (plot.left + plot.right) * 0.5;
    let cy = (plot.top + plot.bottom) * 0.5;
    let text = |role, s: &str, x, y, size, anchor| TextItem {
        role,
        text: s.to_string(),
        x,
        y,
        size,
        anchor,
        vertical: false,
    };

    if let Some(title) = title {
        out.push(text(TextRole::Title, title, cx, baseline_below(mt.pad, mt.title_font), mt.title_font, Anchor::Middle));
    }

    let x_row_top = plot.bottom + mt.tick_len + mt.tick_pad;
    for (t, &px) in x_ticks.ticks.iter().zip(x_px) {
        out.push(text(TextRole::TickLabel, &t.label, px, baseline_below(x_row_top, mt.tick_font), mt.tick_font, Anchor::Middle));
    }
    let mut below_ticks = x_row_top + mt.lh(mt.tick_font);
    if let Some(off) = &x_ticks.offset_label {
        out.push(text(TextRole::OffsetLabel, off, plot.right, baseline_below(below_ticks, mt.tick_font), mt.tick_font, Anchor::End));
        below_ticks += mt.lh(mt.tick_font);
    }

    let y_col_right = plot.left - mt.tick_len - mt.tick_pad;
    for (t, &py) in y_ticks.ticks.iter().zip(y_px) {
        out.push(text(TextRole::TickLabel, &t.label, y_col_right, baseline_centered(py, mt.tick_font), mt.tick_font, Anchor::End));
    }
    if let Some(off) = &y_ticks.offset_label {
        out.push(text(TextRole::OffsetLabel, off, plot.left, plot.top - mt.lh(mt.tick_font) * 0.3, mt.tick_font, Anchor::Start));
    }

    if let Some(xl) = &x_axis.label {
        let top = below_ticks + mt.label_pad;
        out.push(text(TextRole::AxisLabel, xl, cx, baseline_below(top, mt.label_font), mt.label_font, Anchor::Middle));
    }
    if let Some(yl) = &y_axis.label {
        out.push(TextItem {
            role: TextRole::AxisLabel,
            text: yl.clone(),
            x: mt.pad + mt.label_font * 0.95,
            y: cy,
            size: mt.label_font,
            anchor: Anchor::Middle,
            vertical: true,
        });
    }
    out
}
