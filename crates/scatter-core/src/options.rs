// File: crates/scatter-core/src/options.rs
// Summary: Scatter chart options (presentation, output target) and their validation.

use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::theme::Theme;
use crate::types::{DPI, FIGURE_SIZE};

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterOptions {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// One palette color and one legend entry per distinct label.
    pub color_by_label: bool,
    /// Draw each record's label next to its point.
    pub annotate_points: bool,
    /// Force the y-axis lower bound to 0.
    pub y_min_zero: bool,
    /// Marker diameter multiplier; 1.0 is a 6 pt marker.
    pub point_size: f32,
    pub output_path: PathBuf,
    pub dpi: f32,
    /// Figure (width, height) in inches.
    pub figure_size: (f32, f32),
    /// Marker opacity in [0, 1].
    pub alpha: f32,
    pub legend_title: Option<String>,
    pub theme: Theme,
    pub show_grid: bool,
    /// When false, layout still reserves text space but no glyphs are painted.
    pub render_text: bool,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            color_by_label: false,
            annotate_points: false,
            y_min_zero: false,
            point_size: 1.0,
            output_path: PathBuf::from("scatter.png"),
            dpi: DPI,
            figure_size: FIGURE_SIZE,
            alpha: 1.0,
            legend_title: None,
            theme: Theme::light(),
            show_grid: false,
            render_text: true,
        }
    }
}

impl ScatterOptions {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self { output_path: output_path.into(), ..Self::default() }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn color_by_label(mut self, on: bool) -> Self {
        self.color_by_label = on;
        self
    }

    pub fn annotate_points(mut self, on: bool) -> Self {
        self.annotate_points = on;
        self
    }

    pub fn y_min_zero(mut self, on: bool) -> Self {
        self.y_min_zero = on;
        self
    }

    pub fn point_size(mut self, scale: f32) -> Self {
        self.point_size = scale;
        self
    }

    pub fn dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn figure_size(mut self, width_in: f32, height_in: f32) -> Self {
        self.figure_size = (width_in, height_in);
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = Some(title.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn show_grid(mut self, on: bool) -> Self {
        self.show_grid = on;
        self
    }

    /// Skip glyph painting; layout is unchanged.
    pub fn render_text(mut self, on: bool) -> Self {
        self.render_text = on;
        self
    }

    /// Pixel dimensions: figure inches times dpi, rounded.
    pub fn pixel_size(&self) -> (i32, i32) {
        let (w, h) = self.figure_size;
        ((w * self.dpi).round() as i32, (h * self.dpi).round() as i32)
    }

    /// Pixels per typographic point at the configured dpi.
    pub fn px_per_pt(&self) -> f32 {
        self.dpi / crate::types::POINTS_PER_INCH
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(RenderError::invalid(format!("{name} must be a positive number, got {v}")))
            }
        };
        positive("dpi", self.dpi)?;
        positive("point_size", self.point_size)?;
        positive("figure width", self.figure_size.0)?;
        positive("figure height", self.figure_size.1)?;
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(RenderError::invalid(format!("alpha must lie in [0, 1], got {}", self.alpha)));
        }
        let (w, h) = self.pixel_size();
        if w < 1 || h < 1 {
            return Err(RenderError::invalid(format!("figure resolves to an empty {w}x{h} image")));
        }
        if self.output_path.file_name().is_none() {
            return Err(RenderError::invalid(format!(
                "output path {} does not name a file",
                self.output_path.display()
            )));
        }
        ImageFormat::from_path(&self.output_path)?;
        Ok(())
    }
}

/// Raster formats the backend can encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Infer the format from the file extension; no extension means PNG.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension() else { return Ok(Self::Png) };
        match ext.to_string_lossy().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            other => Err(RenderError::invalid(format!(
                "unsupported output format '.{other}' for {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_follows_dpi() {
        let o = ScatterOptions::default().figure_size(7.0, 3.5).dpi(300.0);
        assert_eq!(o.pixel_size(), (2100, 1050));
        assert!((o.px_per_pt() - 300.0 / 72.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(ScatterOptions::default().dpi(0.0).validate().is_err());
        assert!(ScatterOptions::default().point_size(f32::NAN).validate().is_err());
        assert!(ScatterOptions::default().alpha(1.5).validate().is_err());
        assert!(ScatterOptions::default().figure_size(0.001, 1.0).dpi(10.0).validate().is_err());
        assert!(ScatterOptions::default().validate().is_ok());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("M1.png")).unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("a.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path(Path::new("plain")).unwrap(), ImageFormat::Png);
        assert!(ImageFormat::from_path(Path::new("fig.svg")).unwrap_err().is_invalid_input());
    }
}
