//! CLI-specific error types and exit codes.

use deckhand_deck::DeckError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

/// Map an error reaching `main` to a process exit code.
///
/// Exit codes follow sysexits.h where a category fits, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    match err.downcast_ref::<DeckError>() {
        Some(DeckError::OutputDir(_)) => 73, // EX_CANTCREAT
        Some(DeckError::WriteTable { .. } | DeckError::Progress(_)) => 74, // EX_IOERR
        Some(DeckError::Render { .. }) => 70, // EX_SOFTWARE
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_core::PathError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let config = anyhow::Error::new(CliError::Config("bad client".to_string()));
        assert_eq!(exit_code(&config), 78);

        let dir = anyhow::Error::new(DeckError::OutputDir(PathError::NotADirectory(
            PathBuf::from("/tmp/file"),
        )));
        assert_eq!(exit_code(&dir), 73);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}
