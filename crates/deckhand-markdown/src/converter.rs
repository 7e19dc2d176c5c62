//! HTTP and local-file document converter.

use std::path::Path;

use async_trait::async_trait;
use deckhand_core::{ConversionError, ConvertedDocument, DocumentConverterPort};
use tracing::debug;
use url::Url;

use crate::config::ConverterConfig;
use crate::html::html_to_markdown;
use crate::http::{FetchBackend, FetchedBody, ReqwestBackend};

/// Converter fetching over reqwest.
pub type DefaultDocumentConverter = HttpDocumentConverter<ReqwestBackend>;

/// Converts `http(s)://` and `file://` documents to markdown.
pub struct HttpDocumentConverter<B: FetchBackend> {
    backend: B,
}

impl DefaultDocumentConverter {
    pub fn new(config: &ConverterConfig) -> Result<Self, ConversionError> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
        })
    }
}

impl<B: FetchBackend> HttpDocumentConverter<B> {
    /// Create a converter over a custom backend.
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    async fn convert_remote(&self, url: &Url) -> Result<ConvertedDocument, ConversionError> {
        let FetchedBody {
            content_type,
            bytes,
        } = self.backend.fetch(url).await?;

        let kind = content_type
            .as_deref()
            .and_then(ContentKind::from_content_type)
            .or_else(|| ContentKind::from_path(url.path()))
            .ok_or_else(|| ConversionError::UnsupportedContent {
                content_type: content_type.clone().unwrap_or_else(|| "unknown".to_string()),
            })?;
        Ok(kind.convert(&bytes))
    }

    async fn convert_file(url: &Url) -> Result<ConvertedDocument, ConversionError> {
        let path = url
            .to_file_path()
            .map_err(|()| ConversionError::InvalidUrl(url.to_string()))?;
        debug!("Reading {}", path.display());

        let kind = path
            .to_str()
            .and_then(ContentKind::from_path)
            .ok_or_else(|| ConversionError::UnsupportedContent {
                content_type: extension_label(&path),
            })?;

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConversionError::NotFound {
                    url: url.to_string(),
                }
            } else {
                ConversionError::Io(format!("{}: {e}", path.display()))
            }
        })?;
        Ok(kind.convert(&bytes))
    }
}

#[async_trait]
impl<B: FetchBackend> DocumentConverterPort for HttpDocumentConverter<B> {
    async fn convert(&self, url: &str) -> Result<ConvertedDocument, ConversionError> {
        let parsed =
            Url::parse(url).map_err(|e| ConversionError::InvalidUrl(format!("{url}: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => self.convert_remote(&parsed).await,
            "file" => Self::convert_file(&parsed).await,
            other => Err(ConversionError::InvalidUrl(format!(
                "unsupported scheme '{other}'"
            ))),
        }
    }
}

/// How a fetched body is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Html,
    Text,
}

impl ContentKind {
    fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "text/html" | "application/xhtml+xml" => Some(Self::Html),
            "application/json" | "application/xml" | "application/x-yaml" => Some(Self::Text),
            m if m.starts_with("text/") || m.ends_with("+json") || m.ends_with("+xml") => {
                Some(Self::Text)
            }
            _ => None,
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" | "xhtml" => Some(Self::Html),
            "md" | "markdown" | "txt" | "text" | "json" | "csv" | "tsv" | "xml" | "yaml"
            | "yml" | "rst" => Some(Self::Text),
            _ => None,
        }
    }

    fn convert(self, bytes: &[u8]) -> ConvertedDocument {
        let text = String::from_utf8_lossy(bytes);
        match self {
            Self::Html => html_to_markdown(&text),
            Self::Text => ConvertedDocument::new(text.into_owned()),
        }
    }
}

fn extension_label(path: &Path) -> String {
    path.extension().map_or_else(
        || "unknown".to_string(),
        |ext| format!(".{}", ext.to_string_lossy()),
    )
}
