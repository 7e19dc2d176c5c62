//! Configuration for the markdown converter and tools.

use std::time::Duration;

/// Maximum length of a tool response before truncation.
pub const DEFAULT_MAX_OUTPUT_CHARS: usize = 10_000;

/// Configuration for [`HttpDocumentConverter`](crate::HttpDocumentConverter)
/// and [`MarkdownTools`](crate::MarkdownTools).
///
/// # Example
///
/// ```
/// use deckhand_markdown::ConverterConfig;
/// use std::time::Duration;
///
/// let config = ConverterConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-agent/1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout, covering connect and body download
    pub(crate) timeout: Duration,
    /// Tool responses longer than this are truncated
    pub(crate) max_output_chars: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("deckhand-markdown/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
        }
    }
}

impl ConverterConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the truncation limit for tool responses, in characters.
    ///
    /// Defaults to 10,000.
    #[must_use]
    pub const fn with_max_output_chars(mut self, max: usize) -> Self {
        self.max_output_chars = max;
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub const fn max_output_chars(&self) -> usize {
        self.max_output_chars
    }
}
