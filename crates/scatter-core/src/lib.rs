// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter chart API (records, options, scene, rendering).

pub mod axis;
pub mod chart;
pub mod error;
pub mod options;
pub mod palette;
pub mod record;
pub mod scene;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::Axis;
pub use chart::{encode, render, ScatterChart};
pub use error::{RenderError, Result};
pub use options::{ImageFormat, ScatterOptions};
pub use palette::{husl_palette, Palette};
pub use record::Record;
pub use scene::{Annotation, Legend, LegendEntry, Marker, Scene, TextItem, TextRole};
pub use text::{ApproxMetrics, TextMetrics, TextShaper};
pub use theme::Theme;
pub use types::Rgba;
