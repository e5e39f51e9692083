//! Search results page.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use newsdesk_client::{SearchQuery, to_articles};
use newsdesk_core::{PaginationInfo, compute_pagination};

use super::SEARCH_BATCH_SIZE;
use crate::error::PageError;
use crate::render::{RenderOptions, SearchView};
use crate::state::AppState;

/// Query string of `GET /search`.
#[derive(Debug, Default)]
pub struct SearchParams {
    /// Free-text query. Missing: empty.
    pub q: String,
    /// 1-based page number, kept raw so bad input falls back to page 1.
    pub page: Option<String>,
}

impl SearchParams {
    /// Collect `q` and `page` from decoded query pairs.
    ///
    /// Repeated keys do not fail the request; the last value wins. Other keys
    /// are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().fold(Self::default(), |mut params, (key, value)| {
            match key.as_str() {
                "q" => params.q = value,
                "page" => params.page = Some(value),
                _ => {}
            }
            params
        })
    }

    /// Requested page, or 1 when missing, non-numeric or below 1.
    pub fn page(&self) -> u64 {
        self.page.as_deref().and_then(|p| p.trim().parse::<u64>().ok()).filter(|&p| p >= 1).unwrap_or(1)
    }

    /// Result offset of the requested page.
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(SEARCH_BATCH_SIZE)
    }
}

/// `GET /search?q=<text>&page=<n>`
///
/// Requests made by the browser script get the content region only.
pub async fn search(
    State(state): State<AppState>, headers: HeaderMap, Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let params = SearchParams::from_pairs(pairs);
    let query = SearchQuery::build(params.q.as_str(), Some(SEARCH_BATCH_SIZE), Some(params.offset()));
    let page = state.search.search(&query).await?;

    let articles = to_articles(&page.results);
    let pagination = compute_pagination(paging_facts(page.pagination, &query));
    let content_only = is_partial_request(&headers);

    tracing::debug!(
        query = %params.q,
        page = params.page(),
        results = articles.len(),
        total = page.pagination.total,
        content_only,
        "rendering search results"
    );

    let view = SearchView::new(&params.q, &articles, &pagination);
    Ok(Html(state.renderer.render_search(&view, RenderOptions { content_only })))
}

/// Paging facts for pagination, using the request's own paging values when
/// the upstream service did not echo a page size.
fn paging_facts(reported: PaginationInfo, query: &SearchQuery) -> PaginationInfo {
    if reported.count == 0 {
        PaginationInfo { count: query.max_results(), offset: query.offset(), total: reported.total }
    } else {
        reported
    }
}

/// Whether the request came from the browser script rather than a navigation.
fn is_partial_request(headers: &HeaderMap) -> bool {
    headers.contains_key("xmlhttprequest")
        || headers
            .get("x-requested-with")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}
