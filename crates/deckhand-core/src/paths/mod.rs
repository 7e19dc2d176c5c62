//! Output path handling for generated artifacts.

mod ensure;
mod error;

use std::path::{Path, PathBuf};

pub use ensure::ensure_directory;
pub use error::PathError;

/// Default figure output directory, relative to the working directory.
pub const DEFAULT_FIGURES_DIR: &str = "../figures";

/// Default table output directory, relative to the working directory.
pub const DEFAULT_TABLES_DIR: &str = "../tables";

/// Absolute form of `path` for display.
///
/// Existing paths are canonicalized; others are joined onto the current
/// directory as given.
pub fn absolute_path(path: &Path) -> Result<PathBuf, PathError> {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .map_err(|e| PathError::CurrentDirError(e.to_string()))
}
