// File: crates/scatter-core/src/text.rs
// Summary: Text measurement for layout, plus a Skia textlayout shaper for painting.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::types::Rgba;

/// Width/height queries the scene layout needs, independent of the backend.
pub trait TextMetrics {
    /// Advance width of `text` at `size_px`.
    fn width(&self, text: &str, size_px: f32) -> f32;

    /// Line height at `size_px`.
    fn line_height(&self, size_px: f32) -> f32 {
        size_px * 1.2
    }
}

/// Font-free estimate: average glyph advance of 0.6 em.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMetrics;

impl TextMetrics for ApproxMetrics {
    fn width(&self, text: &str, size_px: f32) -> f32 {
        text.chars().count() as f32 * size_px * 0.6
    }
}

const SANS_FAMILIES: [&str; 6] = ["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    pub fn layout(&self, text: &str, size: f32, color: Rgba) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(skia::Color::from_argb(color.a, color.r, color.g, color.b));
        style.set_font_families(&SANS_FAMILIES);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(100_000.0);
        paragraph
    }

    /// Paint `text` with its alphabetic baseline starting at (x, y).
    pub fn draw_baseline(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        let mut p = self.layout(text, size, color);
        let baseline = p.alphabetic_baseline();
        p.paint(canvas, (x, y - baseline));
    }
}

impl TextMetrics for TextShaper {
    fn width(&self, text: &str, size_px: f32) -> f32 {
        let p = self.layout(text, size_px, Rgba::rgba(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }
}
