// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (figure units, colors, paddings).

/// Typographic points per inch; sizes in options are given in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default figure size in inches (width, height).
pub const FIGURE_SIZE: (f32, f32) = (6.4, 4.8);

/// Default output resolution.
pub const DPI: f32 = 100.0;

/// Marker diameter in points at `point_size == 1.0`.
pub const MARKER_DIAMETER_PT: f32 = 6.0;

/// Renderer-agnostic 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from unit-interval channels, clamping to [0, 1].
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(q(r), q(g), q(b))
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Same color ignoring alpha.
    pub fn same_rgb(&self, other: &Rgba) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_channels_clamp_and_round() {
        assert_eq!(Rgba::from_unit(1.2, 0.5, -0.1), Rgba::rgb(255, 128, 0));
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(0.5).a, 128);
    }

    #[test]
    fn insets_clamp_negative() {
        let i = Insets::new(-1.0, 2.0, 3.0, 4.0);
        assert_eq!(i.left, 0.0);
        assert_eq!(i.hsum(), 2.0);
        assert_eq!(i.vsum(), 7.0);
    }
}
