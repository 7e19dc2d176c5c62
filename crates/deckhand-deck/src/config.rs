//! Deck generation configuration.

use std::path::{Path, PathBuf};

use deckhand_core::{DEFAULT_FIGURES_DIR, DEFAULT_TABLES_DIR, Theme};

/// Where deck assets go and how figures look.
///
/// # Example
///
/// ```rust
/// use deckhand_deck::DeckConfig;
///
/// let config = DeckConfig::new()
///     .with_figures_dir("build/figures")
///     .with_dpi(150);
/// assert_eq!(config.theme.dpi, 150);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    pub figures_dir: PathBuf,
    pub tables_dir: PathBuf,
    pub theme: Theme,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            figures_dir: PathBuf::from(DEFAULT_FIGURES_DIR),
            tables_dir: PathBuf::from(DEFAULT_TABLES_DIR),
            theme: Theme::default(),
        }
    }
}

impl DeckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_figures_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.figures_dir = dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_tables_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.tables_dir = dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.theme = self.theme.with_dpi(dpi);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_next_to_working_directory() {
        let config = DeckConfig::default();
        assert_eq!(config.figures_dir, PathBuf::from("../figures"));
        assert_eq!(config.tables_dir, PathBuf::from("../tables"));
        assert_eq!(config.theme.dpi, 300);
    }

    #[test]
    fn test_builder_overrides() {
        let config = DeckConfig::new()
            .with_tables_dir("/tmp/tables")
            .with_dpi(96);
        assert_eq!(config.tables_dir, PathBuf::from("/tmp/tables"));
        assert_eq!(config.theme.dpi, 96);
        assert_eq!(config.figures_dir, PathBuf::from("../figures"));
    }
}
