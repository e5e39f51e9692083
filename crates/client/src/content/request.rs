//! Content search request types.

use serde::Serialize;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_MAX_RESULTS: u64 = 20;

/// Result aspects requested for every search, as needed to build an article.
pub const ASPECTS: [&str; 4] = ["title", "summary", "location", "lifecycle"];

/// Curations searched. The front end only shows articles.
pub const CURATIONS: [&str; 1] = ["ARTICLES"];

/// Body of a `POST /content/search/v1` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free-text query. Empty matches everything.
    pub query_string: String,
    pub query_context: QueryContext,
    pub result_context: ResultContext,
}

/// Which kinds of content to search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryContext {
    pub curations: Vec<String>,
}

/// Paging and field selection for the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultContext {
    pub max_results: u64,
    pub offset: u64,
    pub aspects: Vec<String>,
}

impl SearchQuery {
    /// Build a query for `text`, defaulting absent or zero paging values.
    ///
    /// `max_results` defaults to 20 and `offset` to 0.
    pub fn build(text: impl Into<String>, max_results: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            query_string: text.into(),
            query_context: QueryContext { curations: CURATIONS.iter().map(|c| c.to_string()).collect() },
            result_context: ResultContext {
                max_results: max_results.filter(|&n| n > 0).unwrap_or(DEFAULT_MAX_RESULTS),
                offset: offset.unwrap_or(0),
                aspects: ASPECTS.iter().map(|a| a.to_string()).collect(),
            },
        }
    }

    /// Page size requested.
    pub fn max_results(&self) -> u64 {
        self.result_context.max_results
    }

    /// Offset requested.
    pub fn offset(&self) -> u64 {
        self.result_context.offset
    }
}
