//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Slide-deck asset generation, system specs and document conversion.
#[derive(Parser)]
#[command(name = "deckhand")]
#[command(about = "Build slide-deck assets, report system specs and convert documents to markdown")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["deckhand", "--verbose", "specs"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Specs)));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["deckhand"]);
        assert!(cli.command.is_none());
    }
}
