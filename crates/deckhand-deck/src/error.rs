//! Deck generation errors.

use std::path::PathBuf;

use deckhand_core::{PathError, RenderError};
use thiserror::Error;

/// Errors raised while generating deck assets.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The output directory could not be prepared.
    #[error("Output directory unusable: {0}")]
    OutputDir(#[from] PathError),

    /// A figure failed to render.
    #[error("Failed to render {figure}: {source}")]
    Render {
        figure: &'static str,
        #[source]
        source: RenderError,
    },

    /// A table file could not be written.
    #[error("Failed to write {path}: {source}")]
    WriteTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Progress output could not be written.
    #[error("Failed to write progress output: {0}")]
    Progress(#[from] std::io::Error),
}
