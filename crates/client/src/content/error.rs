//! Content API client error types.

use std::sync::Arc;

/// Errors from the content search API client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    /// No API key configured.
    #[error("missing API key: FT_API_KEY not set")]
    MissingApiKey,

    /// Invalid base URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Non-2xx response. The body is kept for diagnostics.
    #[error("request for {path} was unsuccessful ({status}): {body}")]
    Request { path: String, status: u16, body: String },

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ContentError::Timeout } else { ContentError::Network(Arc::new(err)) }
    }
}

impl From<ContentError> for newsdesk_core::Error {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Request { path, body, .. } => newsdesk_core::Error::UpstreamRequest { path, body },
            ContentError::Parse(msg) => newsdesk_core::Error::UpstreamParse(msg),
            other => newsdesk_core::Error::UpstreamTransport(other.to_string()),
        }
    }
}
