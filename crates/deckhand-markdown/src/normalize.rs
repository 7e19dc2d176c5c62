//! Input normalization for the conversion tools.
//!
//! Agent hosts often pass the user's phrasing rather than a URL. The input is
//! either turned into a URL with a scheme or answered with guidance text.

/// Phrases treated as "no URL given", compared case-insensitively.
const PLACEHOLDERS: &[&str] = &["convert to markdown", "convert", "markdown"];

const SCHEMES: &[&str] = &["http://", "https://", "file://"];

/// Returned when no URL was supplied.
pub const USAGE: &str = "Please provide a URL to convert. \n\n\
Examples:\n\
- Convert https://github.com to markdown\n\
- Convert https://example.com/document.pdf to markdown\n\
- Convert example.com to markdown\n\n\
You can provide any webpage URL, PDF link, or supported document URL.";

/// Outcome of normalizing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedInput {
    /// A URL carrying an `http://`, `https://` or `file://` scheme.
    Url(String),
    /// No usable URL; the string is the reply for the user.
    Guidance(String),
}

/// Normalize `input` into a URL or a guidance reply.
///
/// Placeholder detection runs on the raw input, before trimming.
pub fn normalize_url(input: &str) -> NormalizedInput {
    if input.is_empty() || is_placeholder(input) {
        return NormalizedInput::Guidance(USAGE.to_string());
    }

    let url = input.trim();
    if SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return NormalizedInput::Url(url.to_string());
    }

    if url.contains('.') && !url.contains(' ') {
        NormalizedInput::Url(format!("https://{url}"))
    } else {
        NormalizedInput::Guidance(parse_guidance(url))
    }
}

fn is_placeholder(input: &str) -> bool {
    let lowered = input.to_lowercase();
    PLACEHOLDERS.contains(&lowered.as_str())
}

fn parse_guidance(url: &str) -> String {
    format!(
        "I couldn't parse '{url}' as a valid URL. \n\n\
         Please provide a valid URL like:\n\
         - https://example.com\n\
         - example.com\n\
         - https://example.com/document.pdf"
    )
}
