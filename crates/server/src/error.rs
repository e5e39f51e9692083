//! Page-level error handling.
//!
//! Every error that reaches a page handler is logged and answered with the
//! 500 page. Nothing is written before the page is fully rendered, so a
//! failed request never produces a partial body.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use newsdesk_client::ContentError;
use newsdesk_core::Error;

use crate::render::Renderer;

/// An error that aborts a page request.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] pub Error);

impl From<ContentError> for PageError {
    fn from(err: ContentError) -> Self {
        PageError(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.0.error_code(), error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(Renderer::default().render_error())).into_response()
    }
}
