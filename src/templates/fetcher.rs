//! Remote template retrieval.
//!
//! # Responsibilities
//! - Plain HTTP GET of a template URL
//! - Decode the body as UTF-8 text
//! - Separate "the server answered with an error status" from transport failures
//!
//! # Design Decisions
//! - No retry, no timeout, no cache: every call hits the network
//! - [`TemplateSource`] is the seam the generator is written against

use std::future::Future;

use thiserror::Error;

/// Errors that can occur while fetching a template.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("template {url} not found (HTTP {status})")]
    NotFound { url: String, status: u16 },

    /// The request could not be sent or no response arrived.
    #[error("failed to fetch template {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("failed to read template body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not valid UTF-8.
    #[error("template {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl FetchError {
    /// Whether the server reported the template as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// Anything that can hand out template text by URL.
pub trait TemplateSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches templates over HTTP(S) with `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTemplateSource {
    client: reqwest::Client,
}

impl HttpTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing client (proxy settings, custom TLS roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl TemplateSource for HttpTemplateSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "Fetching template");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Always UTF-8, whatever charset the server advertises.
        let body = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        String::from_utf8(body.to_vec()).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
