//! The conversion tools exposed to an agent host.
//!
//! Every operation takes one string and returns one string. Failures are
//! rendered as messages here, from the error kind the converter reports.

use std::sync::Arc;

use deckhand_core::{ConversionError, ConversionErrorKind, DocumentConverterPort};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::DEFAULT_MAX_OUTPUT_CHARS;
use crate::normalize::{NormalizedInput, normalize_url};

/// Suffix appended to truncated responses.
pub const TRUNCATION_SUFFIX: &str = "\n\n... (content truncated)";

/// Tool names as seen by the agent host.
pub const CONVERT_TO_MARKDOWN: &str = "convert_to_markdown";
pub const CONVERT_WEBPAGE: &str = "convert_webpage";
pub const EXTRACT_PDF_TEXT: &str = "extract_pdf_text";

/// Markdown conversion tools over a document converter.
#[derive(Clone)]
pub struct MarkdownTools {
    converter: Arc<dyn DocumentConverterPort>,
    max_output_chars: usize,
}

impl MarkdownTools {
    pub fn new(converter: impl DocumentConverterPort + 'static) -> Self {
        Self::from_port(Arc::new(converter))
    }

    pub fn from_port(converter: Arc<dyn DocumentConverterPort>) -> Self {
        Self {
            converter,
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
        }
    }

    /// Override the truncation limit, in characters.
    #[must_use]
    pub const fn with_max_output_chars(mut self, max: usize) -> Self {
        self.max_output_chars = max;
        self
    }

    /// Convert any document URL to markdown.
    ///
    /// Bare domains get an `https://` prefix. Empty or placeholder input
    /// returns usage instructions without calling the converter.
    pub async fn convert_to_markdown(&self, url: &str) -> String {
        let url = match normalize_url(url) {
            NormalizedInput::Url(url) => url,
            NormalizedInput::Guidance(reply) => return reply,
        };

        debug!("Converting {url}");
        match self.converter.convert(&url).await {
            Ok(doc) if doc.has_content() => {
                let output = format!("# Content from: {url}\n\n{}", doc.text_content);
                truncate(output, self.max_output_chars)
            }
            Ok(_) => {
                format!("Could not extract content from {url}. The page might be empty or blocked.")
            }
            Err(err) => {
                warn!("Conversion of {url} failed: {err}");
                failure_message(&url, &err)
            }
        }
    }

    /// Convert a webpage to markdown.
    pub async fn convert_webpage(&self, url: &str) -> String {
        if url.is_empty() {
            return "Please provide a webpage URL to convert.".to_string();
        }
        self.convert_to_markdown(url).await
    }

    /// Extract a PDF's text as markdown.
    pub async fn extract_pdf_text(&self, pdf_url: &str) -> String {
        if pdf_url.is_empty() {
            return "Please provide a PDF URL to extract text from.".to_string();
        }
        self.convert_to_markdown(pdf_url).await
    }

    /// Route a host tool call to the matching operation.
    ///
    /// `arguments` is the JSON object the host produced from the tool's
    /// parameter schema. A missing or mistyped argument counts as empty.
    pub async fn dispatch(&self, name: &str, arguments: &Value) -> String {
        let Some(def) = tool_definitions().into_iter().find(|def| def.name == name) else {
            return format!(
                "Unknown tool '{name}'. Available tools: {CONVERT_TO_MARKDOWN}, {CONVERT_WEBPAGE}, {EXTRACT_PDF_TEXT}"
            );
        };

        let input = arguments
            .get(def.parameter)
            .and_then(Value::as_str)
            .unwrap_or_default();

        match def.name {
            CONVERT_WEBPAGE => self.convert_webpage(input).await,
            EXTRACT_PDF_TEXT => self.extract_pdf_text(input).await,
            _ => self.convert_to_markdown(input).await,
        }
    }
}

/// Render a converter failure for the user.
pub fn failure_message(url: &str, err: &ConversionError) -> String {
    match err.kind() {
        ConversionErrorKind::NotFound => format!("Error: The URL {url} was not found (404 error)"),
        ConversionErrorKind::Timeout => format!(
            "Error: The request to {url} timed out. The site might be slow or unreachable."
        ),
        ConversionErrorKind::Other => format!("Error converting {url}: {err}"),
    }
}

/// Keep the first `max` characters of `output` and mark the cut.
fn truncate(mut output: String, max: usize) -> String {
    if let Some((byte_idx, _)) = output.char_indices().nth(max) {
        output.truncate(byte_idx);
        output.push_str(TRUNCATION_SUFFIX);
    }
    output
}

/// A tool as advertised to a function-calling host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Name of the single string parameter.
    pub parameter: &'static str,
    pub parameter_description: &'static str,
}

impl ToolDefinition {
    /// JSON in the function-calling format most hosts accept.
    pub fn to_json(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": {
                    "type": "object",
                    "properties": {
                        (self.parameter): {
                            "type": "string",
                            "description": self.parameter_description,
                        }
                    },
                    "required": [self.parameter],
                }
            }
        })
    }
}

/// The three conversion tools.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: CONVERT_TO_MARKDOWN,
            description: "Convert any document URL to Markdown format.",
            parameter: "url",
            parameter_description: "URL of the document (webpage, PDF, etc.)",
        },
        ToolDefinition {
            name: CONVERT_WEBPAGE,
            description: "Convert a webpage to Markdown format.",
            parameter: "url",
            parameter_description: "The webpage URL",
        },
        ToolDefinition {
            name: EXTRACT_PDF_TEXT,
            description: "Extract text from a PDF and convert to Markdown.",
            parameter: "pdf_url",
            parameter_description: "URL of the PDF document",
        },
    ]
}
