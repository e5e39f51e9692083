//! Shared state for page handlers.

use std::sync::Arc;

use newsdesk_client::SearchApi;
use newsdesk_core::AppConfig;

use crate::render::Renderer;

/// Shared application state accessible to all page handlers.
///
/// Built once at startup and cloned per request (cheap Arc clones). Nothing
/// in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Upstream search backend.
    pub search: Arc<dyn SearchApi>,

    /// Page renderer.
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, search: Arc<dyn SearchApi>, renderer: Arc<Renderer>) -> Self {
        Self { config, search, renderer }
    }
}
