// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for validation, output and raster backend failures.

use std::path::PathBuf;

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The table or the options cannot produce a chart.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The encoded image could not be written to its destination.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("raster backend: {0}")]
    Backend(String),
}

impl RenderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
