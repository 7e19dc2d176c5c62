//! Available subcommands, one per tool.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use deckhand_core::{DEFAULT_FIGURES_DIR, DEFAULT_TABLES_DIR};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print total memory and GPU information
    Specs,

    /// Render the deck figures as PNG images
    Figures {
        /// Output directory, created when missing
        #[arg(long, env = "DECKHAND_FIGURES_DIR", default_value = DEFAULT_FIGURES_DIR)]
        out_dir: PathBuf,
        /// Image resolution
        #[arg(long, env = "DECKHAND_DPI", default_value_t = 300)]
        dpi: u32,
    },

    /// Write the deck tables as LaTeX tabular fragments
    Tables {
        /// Output directory, created when missing
        #[arg(long, env = "DECKHAND_TABLES_DIR", default_value = DEFAULT_TABLES_DIR)]
        out_dir: PathBuf,
    },

    /// Generate figures and tables in one run
    Deck {
        #[arg(long, env = "DECKHAND_FIGURES_DIR", default_value = DEFAULT_FIGURES_DIR)]
        figures_dir: PathBuf,
        #[arg(long, env = "DECKHAND_TABLES_DIR", default_value = DEFAULT_TABLES_DIR)]
        tables_dir: PathBuf,
        #[arg(long, env = "DECKHAND_DPI", default_value_t = 300)]
        dpi: u32,
    },

    /// Convert a document URL to markdown
    Convert {
        /// URL or bare domain (e.g. "example.com")
        #[arg(default_value = "")]
        url: String,
        /// Which tool operation to run
        #[arg(long, value_enum, default_value_t = ConvertKind::Auto)]
        kind: ConvertKind,
        /// HTTP request timeout
        #[arg(long, env = "DECKHAND_HTTP_TIMEOUT_SECS", default_value_t = 30)]
        timeout_secs: u64,
    },

    /// Print the conversion tool definitions as JSON
    Tools,
}

/// Tool operation selected by `convert --kind`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvertKind {
    /// Any document URL
    Auto,
    /// A webpage
    Webpage,
    /// A PDF document
    Pdf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_figures_defaults() {
        let cli = Cli::try_parse_from(["deckhand", "figures"]).unwrap();
        let Some(Commands::Figures { out_dir, dpi }) = cli.command else {
            panic!("expected figures");
        };
        // Defaults apply unless DECKHAND_* is set in the test environment.
        if std::env::var_os("DECKHAND_FIGURES_DIR").is_none() {
            assert_eq!(out_dir, PathBuf::from("../figures"));
        }
        if std::env::var_os("DECKHAND_DPI").is_none() {
            assert_eq!(dpi, 300);
        }
    }

    #[test]
    fn test_tables_out_dir() {
        let cli = Cli::try_parse_from(["deckhand", "tables", "--out-dir", "/tmp/t"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Tables { out_dir }) if out_dir == PathBuf::from("/tmp/t")
        ));
    }

    #[test]
    fn test_convert_args() {
        let cli = Cli::try_parse_from([
            "deckhand",
            "convert",
            "example.com/paper.pdf",
            "--kind",
            "pdf",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        let Some(Commands::Convert {
            url,
            kind,
            timeout_secs,
        }) = cli.command
        else {
            panic!("expected convert");
        };
        assert_eq!(url, "example.com/paper.pdf");
        assert_eq!(kind, ConvertKind::Pdf);
        assert_eq!(timeout_secs, 5);
    }

    #[test]
    fn test_convert_without_url_is_accepted() {
        let cli = Cli::try_parse_from(["deckhand", "convert"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Convert { url, kind: ConvertKind::Auto, .. }) if url.is_empty()
        ));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["deckhand", "convert", "x.org", "--kind", "docx"]).is_err());
    }
}
