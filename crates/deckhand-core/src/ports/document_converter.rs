//! Document converter port.
//!
//! Converts the document behind a URL into markdown text. The port reports
//! failures with an explicit kind so callers never inspect message text to
//! decide how to respond.

use async_trait::async_trait;
use thiserror::Error;

/// Result of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedDocument {
    /// Document title, when the format carries one.
    pub title: Option<String>,
    /// Extracted content as markdown or plain text. May be empty.
    pub text_content: String,
}

impl ConvertedDocument {
    pub fn new(text_content: impl Into<String>) -> Self {
        Self {
            title: None,
            text_content: text_content.into(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether any content was extracted. Whitespace counts as content.
    pub fn has_content(&self) -> bool {
        !self.text_content.is_empty()
    }
}

/// Coarse classification used to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// The document does not exist (HTTP 404 or missing file).
    NotFound,
    /// The request did not complete in time.
    Timeout,
    /// Any other failure.
    Other,
}

/// Errors raised by a document converter.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("404 Not Found: {url}")]
    NotFound { url: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Request failed with status {status}: {url}")]
    Http { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported content type '{content_type}'")]
    UnsupportedContent { content_type: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ConversionError {
    /// Classification of this error.
    pub const fn kind(&self) -> ConversionErrorKind {
        match self {
            Self::NotFound { .. } | Self::Http { status: 404, .. } => ConversionErrorKind::NotFound,
            Self::Timeout { .. } => ConversionErrorKind::Timeout,
            Self::Http { .. }
            | Self::Network(_)
            | Self::UnsupportedContent { .. }
            | Self::InvalidUrl(_)
            | Self::Io(_) => ConversionErrorKind::Other,
        }
    }
}

/// Port for converting remote or local documents to markdown.
#[async_trait]
pub trait DocumentConverterPort: Send + Sync {
    /// Convert the document at `url`.
    ///
    /// `url` is already normalized: it always carries an `http://`,
    /// `https://` or `file://` scheme.
    async fn convert(&self, url: &str) -> Result<ConvertedDocument, ConversionError>;
}
