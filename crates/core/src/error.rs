//! Unified error types for newsdesk.
//!
//! None of these are recovered locally. They surface to the request
//! orchestrators, which turn them into a 500 page.

/// Unified error types for the newsdesk front end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream service could not be reached, or did not answer in time.
    #[error("UPSTREAM_TRANSPORT: {0}")]
    UpstreamTransport(String),

    /// The upstream service answered with a non-2xx status.
    #[error("UPSTREAM_REQUEST: request for {path} was unsuccessful: {body}")]
    UpstreamRequest { path: String, body: String },

    /// The upstream body was not valid JSON.
    #[error("UPSTREAM_PARSE: {0}")]
    UpstreamParse(String),

    /// A single result record could not be normalized into an article.
    #[error("MALFORMED_RESULT: {0}")]
    MalformedResult(String),

    /// The landing page sample contained no usable articles.
    #[error("NO_ARTICLES_FOUND")]
    NoArticlesFound,

    /// Startup configuration was missing or invalid.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl Error {
    /// Stable machine-readable code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UpstreamTransport(_) => "upstream_transport",
            Error::UpstreamRequest { .. } => "upstream_request",
            Error::UpstreamParse(_) => "upstream_parse",
            Error::MalformedResult(_) => "malformed_result",
            Error::NoArticlesFound => "no_articles_found",
            Error::Config(_) => "config_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UpstreamRequest { path: "/content/search/v1".into(), body: "Forbidden".into() };
        assert!(err.to_string().contains("UPSTREAM_REQUEST"));
        assert!(err.to_string().contains("/content/search/v1"));
        assert!(err.to_string().contains("Forbidden"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::NoArticlesFound.error_code(), "no_articles_found");
        assert_eq!(Error::UpstreamTransport("timeout".into()).error_code(), "upstream_transport");
        assert_eq!(Error::MalformedResult("bad date".into()).error_code(), "malformed_result");
    }
}
