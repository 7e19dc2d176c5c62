//! Figure renderer port.
//!
//! A renderer turns a [`Figure`] into an image file. Implementations live in
//! deckhand-deck; whether one is available is decided once at startup.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Figure, Theme};

/// Errors raised while rendering a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing backend rejected an operation.
    #[error("Drawing failed: {0}")]
    Backend(String),

    /// Fonts required for text could not be loaded.
    #[error("Font unavailable: {0}")]
    Font(String),

    /// The figure description cannot be drawn as given.
    #[error("Invalid figure '{figure}': {reason}")]
    InvalidFigure { figure: String, reason: String },

    /// The image could not be written.
    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Port for rendering figures to image files.
pub trait FigureRenderer: Send + Sync {
    /// Short name of the rendering backend, for logs.
    fn name(&self) -> &'static str;

    /// Render `figure` with `theme` and write the image to `path`.
    ///
    /// An existing file at `path` is overwritten.
    fn render(&self, figure: &Figure, theme: &Theme, path: &Path) -> Result<(), RenderError>;
}
