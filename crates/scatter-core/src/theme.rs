// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for figure colors.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub plot_background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub text: Rgba,
    pub tick: Rgba,
    /// Marker fill when points are not colored by label.
    pub marker: Rgba,
    /// Outline drawn around label-colored markers.
    pub marker_edge: Rgba,
    pub legend_frame: Rgba,
    pub legend_background: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            plot_background: Rgba::rgb(255, 255, 255),
            grid: Rgba::rgb(0xb0, 0xb0, 0xb0),
            axis_line: Rgba::rgb(0, 0, 0),
            text: Rgba::rgb(0, 0, 0),
            tick: Rgba::rgb(0, 0, 0),
            marker: Rgba::rgb(0x1f, 0x77, 0xb4),
            marker_edge: Rgba::rgb(255, 255, 255),
            legend_frame: Rgba::rgb(0xcc, 0xcc, 0xcc),
            legend_background: Rgba::rgba(255, 255, 255, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            plot_background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            text: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            marker: Rgba::rgb(64, 160, 255),
            marker_edge: Rgba::rgb(18, 18, 20),
            legend_frame: Rgba::rgb(70, 70, 80),
            legend_background: Rgba::rgba(18, 18, 20, 204),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
