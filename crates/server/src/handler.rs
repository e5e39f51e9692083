//! HTTP routing.
//!
//! Routes are a closed set:
//! - `GET /` - landing page
//! - `GET /search` - search results (full page or content fragment)
//! - anything else - static file from `static_dir`, or the 404 page
//!
//! Handler errors render the 500 page via [`PageError`](crate::error::PageError).

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::pages;
use crate::state::AppState;

/// Create the router with all page routes and the static fallback.
pub fn create_router(state: AppState) -> Router {
    let not_found = {
        let state = state.clone();
        move || pages::not_found(state.clone())
    };

    let static_files = ServeDir::new(&state.config.static_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(pages::index))
        .route("/search", get(pages::search))
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
