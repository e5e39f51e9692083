//! Content search API client.
//!
//! Provides a client for the FT content search API and normalization of its
//! result records into articles.
//!
//! ### Protocol
//!
//! - **Endpoint**: `POST https://api.ft.com/content/search/v1`
//! - **Authentication**: Uses `X-Api-Key` header.
//! - **Body**: JSON query, see [`SearchQuery`].
//! - **Failures**: Non-2xx responses, transport errors and timeouts are
//!   returned as-is. There are no retries.

pub mod error;
pub mod request;
pub mod response;

pub use error::ContentError;
pub use request::{DEFAULT_MAX_RESULTS, SearchQuery};
pub use response::{ContentApiResponse, SearchPage, to_article, to_articles};

use async_trait::async_trait;
use newsdesk_core::AppConfig;
use reqwest::header;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default base URL for the content API.
const DEFAULT_BASE_URL: &str = "https://api.ft.com";

/// Path of the search endpoint.
pub const SEARCH_PATH: &str = "/content/search/v1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "newsdesk/0.1";

/// Content API client configuration.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// API key sent as `X-Api-Key`.
    pub api_key: String,
    /// Base URL (default: https://api.ft.com).
    pub base_url: String,
    /// Request timeout (default: 5s).
    pub timeout: Duration,
    /// User-agent string (default: newsdesk/0.x).
    pub user_agent: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ContentConfig {
    /// Build client configuration from the application config.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::MissingApiKey` if no API key is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ContentError> {
        let api_key = config.require_api_key().map_err(|_| ContentError::MissingApiKey)?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.api_base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// A search backend that returns one page of results per query.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Run a single search and return its results with paging facts.
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, ContentError>;
}

/// Content search API client.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: Arc<ContentConfig>,
}

impl ContentClient {
    /// Create a new content client with the given configuration.
    pub fn new(config: ContentConfig) -> Result<Self, ContentError> {
        if config.api_key.is_empty() {
            return Err(ContentError::MissingApiKey);
        }

        url::Url::parse(&config.base_url).map_err(|e| ContentError::InvalidBaseUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ContentError::Network(Arc::new(e)))?;

        Ok(Self { http, config: Arc::new(config) })
    }

    /// Create a new content client from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ContentError> {
        Self::new(ContentConfig::from_app_config(config)?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl SearchApi for ContentClient {
    /// Execute a search query.
    ///
    /// Issues exactly one POST. Missing envelope fields decode to defaults.
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, ContentError> {
        let start = Instant::now();
        let url = self.endpoint(SEARCH_PATH);

        tracing::debug!(
            query = %query.query_string,
            max_results = query.max_results(),
            offset = query.offset(),
            "searching content API"
        );

        let http_response = self
            .http
            .post(&url)
            .header("X-Api-Key", &self.config.api_key)
            .header(header::ACCEPT, "application/json")
            .json(query)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("content API response status: {}", status);

        let body = http_response.text().await?;

        if !status.is_success() {
            return Err(ContentError::Request { path: SEARCH_PATH.to_string(), status: status.as_u16(), body });
        }

        let api_response: ContentApiResponse =
            serde_json::from_str(&body).map_err(|e| ContentError::Parse(e.to_string()))?;
        let page = SearchPage::from(api_response);

        tracing::debug!(
            "search completed in {:?}, {} results of {}",
            start.elapsed(),
            page.results.len(),
            page.pagination.total
        );

        Ok(page)
    }
}
