//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - System probe (via deckhand-runtime)
//! - Figure renderer capability (via deckhand-deck)
//! - Document converter and tools (via deckhand-markdown)

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use deckhand_core::SystemProbePort;
use deckhand_deck::{DeckConfig, RendererAvailability};
use deckhand_markdown::{ConverterConfig, DefaultDocumentConverter, MarkdownTools};
use deckhand_runtime::DefaultSystemProbe;

use crate::commands::Commands;
use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Output directories and theme for the deck generators.
    pub deck: DeckConfig,
    /// HTTP settings for the document converter.
    pub converter: ConverterConfig,
}

impl CliConfig {
    /// Create config with default paths and timeouts.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Apply the overrides carried by a parsed command.
    #[must_use]
    pub fn with_command(mut self, command: &Commands) -> Self {
        match command {
            Commands::Figures { out_dir, dpi } => {
                self.deck = self.deck.with_figures_dir(out_dir).with_dpi(*dpi);
            }
            Commands::Tables { out_dir } => {
                self.deck = self.deck.with_tables_dir(out_dir);
            }
            Commands::Deck {
                figures_dir,
                tables_dir,
                dpi,
            } => {
                self.deck = self
                    .deck
                    .with_figures_dir(figures_dir)
                    .with_tables_dir(tables_dir)
                    .with_dpi(*dpi);
            }
            Commands::Convert { timeout_secs, .. } => {
                self.converter = self
                    .converter
                    .with_timeout(Duration::from_secs(*timeout_secs));
            }
            Commands::Specs | Commands::Tools => {}
        }
        self
    }

    pub fn figures_dir(&self) -> &Path {
        &self.deck.figures_dir
    }

    pub fn tables_dir(&self) -> &Path {
        &self.deck.tables_dir
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub config: CliConfig,
    /// Memory and GPU probe.
    pub probe: Arc<dyn SystemProbePort>,
    /// Whether figures can be rendered, decided once.
    pub renderer: RendererAvailability,
    /// The markdown conversion tools.
    pub tools: MarkdownTools,
}

/// Bootstrap the CLI application.
///
/// Builds every adapter once from `config`. Only the HTTP client can fail to
/// build; renderer unavailability is a value, not an error.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let converter = DefaultDocumentConverter::new(&config.converter)
        .map_err(|e| CliError::Config(e.to_string()))?;
    let tools =
        MarkdownTools::new(converter).with_max_output_chars(config.converter.max_output_chars());

    Ok(CliContext {
        probe: Arc::new(DefaultSystemProbe::new()),
        renderer: RendererAvailability::detect(),
        tools,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ConvertKind;
    use std::path::PathBuf;

    #[test]
    fn test_figures_overrides() {
        let config = CliConfig::with_defaults().with_command(&Commands::Figures {
            out_dir: PathBuf::from("out/figs"),
            dpi: 72,
        });
        assert_eq!(config.figures_dir(), Path::new("out/figs"));
        assert_eq!(config.tables_dir(), Path::new("../tables"));
        assert_eq!(config.deck.theme.dpi, 72);
    }

    #[test]
    fn test_convert_timeout_override() {
        let config = CliConfig::with_defaults().with_command(&Commands::Convert {
            url: "example.com".to_string(),
            kind: ConvertKind::Auto,
            timeout_secs: 3,
        });
        assert_eq!(config.converter.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_bootstrap_builds_context() {
        let ctx = bootstrap(CliConfig::with_defaults()).unwrap();
        assert_eq!(ctx.config.deck.theme.dpi, 300);
    }
}
