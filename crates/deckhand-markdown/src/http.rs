//! HTTP fetching behind a small trait.
//!
//! The converter depends on [`FetchBackend`] rather than on `reqwest`
//! directly, so conversion logic is tested against canned responses.

use async_trait::async_trait;
use deckhand_core::ConversionError;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::config::ConverterConfig;

/// A successful response body with its declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fetches the body behind an `http(s)` URL.
///
/// Implementations classify failures where they observe them: a 404 is
/// `NotFound`, a client timeout is `Timeout`.
#[async_trait]
pub trait FetchBackend: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedBody, ConversionError>;
}

/// Production backend using reqwest. Redirects are followed.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &ConverterConfig) -> Result<Self, ConversionError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConversionError::Network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchBackend for ReqwestBackend {
    async fn fetch(&self, url: &Url) -> Result<FetchedBody, ConversionError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| classify_transport_error(url, &e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ConversionError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ConversionError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(url, &e))?;
        debug!("{url}: {} bytes ({content_type:?})", bytes.len());

        Ok(FetchedBody {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

fn classify_transport_error(url: &Url, err: &reqwest::Error) -> ConversionError {
    if err.is_timeout() {
        ConversionError::Timeout {
            url: url.to_string(),
        }
    } else {
        ConversionError::Network(err.to_string())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned outcome for the fake backend.
    #[derive(Debug, Clone)]
    pub enum CannedResponse {
        Body {
            content_type: Option<&'static str>,
            body: String,
        },
        Status(u16),
        Timeout,
    }

    impl CannedResponse {
        pub fn html(body: impl Into<String>) -> Self {
            Self::Body {
                content_type: Some("text/html; charset=utf-8"),
                body: body.into(),
            }
        }

        pub fn typed(content_type: &'static str, body: impl Into<String>) -> Self {
            Self::Body {
                content_type: Some(content_type),
                body: body.into(),
            }
        }
    }

    /// A fake backend matching URLs by substring. Unknown URLs are 404.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        /// URLs fetched so far.
        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FetchBackend for FakeBackend {
        async fn fetch(&self, url: &Url) -> Result<FetchedBody, ConversionError> {
            self.requested.lock().unwrap().push(url.to_string());
            let response = self
                .responses
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map_or(CannedResponse::Status(404), |(_, r)| r.clone());

            match response {
                CannedResponse::Body { content_type, body } => Ok(FetchedBody {
                    content_type: content_type.map(str::to_string),
                    bytes: body.into_bytes(),
                }),
                CannedResponse::Status(404) => Err(ConversionError::NotFound {
                    url: url.to_string(),
                }),
                CannedResponse::Status(status) => Err(ConversionError::Http {
                    status,
                    url: url.to_string(),
                }),
                CannedResponse::Timeout => Err(ConversionError::Timeout {
                    url: url.to_string(),
                }),
            }
        }
    }
}
