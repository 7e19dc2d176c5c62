#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod converter;
mod html;
mod http;
mod normalize;
mod tools;

// ============================================================================
// Public API
// ============================================================================

// Configuration
pub use config::{ConverterConfig, DEFAULT_MAX_OUTPUT_CHARS};

// Converter
pub use converter::{DefaultDocumentConverter, HttpDocumentConverter};
pub use html::html_to_markdown;
pub use http::{FetchBackend, FetchedBody, ReqwestBackend};

// Tools
pub use normalize::{NormalizedInput, USAGE, normalize_url};
pub use tools::{
    CONVERT_TO_MARKDOWN, CONVERT_WEBPAGE, EXTRACT_PDF_TEXT, MarkdownTools, TRUNCATION_SUFFIX,
    ToolDefinition, failure_message, tool_definitions,
};
