//! Page handlers.
//!
//! Each handler makes exactly one upstream search, normalizes the results and
//! renders the page before anything is written to the response.

pub mod index;
pub mod search;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use index::index;
pub use search::search;

use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;

/// Number of articles the landing page picks from.
pub const RANDOM_SAMPLE_SIZE: u64 = 20;

/// Number of search results per page.
pub const SEARCH_BATCH_SIZE: u64 = 20;

/// Fallback for paths that are neither pages nor static files.
pub async fn not_found(state: AppState) -> Response {
    Html(state.renderer.render_not_found()).into_response()
}
