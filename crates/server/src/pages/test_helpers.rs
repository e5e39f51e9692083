//! Test doubles for page handlers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use newsdesk_client::{ContentError, SearchApi, SearchPage, SearchQuery};
use newsdesk_core::{AppConfig, PaginationInfo};
use serde_json::{Value, json};

use crate::render::Renderer;
use crate::state::AppState;

/// A search backend that replays a canned response and records queries.
pub struct StubSearch {
    response: Result<SearchPage, ContentError>,
    pub queries: Mutex<Vec<SearchQuery>>,
}

impl StubSearch {
    pub fn ok(pagination: PaginationInfo, results: Vec<Value>) -> Arc<Self> {
        Arc::new(Self { response: Ok(SearchPage { pagination, results }), queries: Mutex::new(Vec::new()) })
    }

    pub fn failing(err: ContentError) -> Arc<Self> {
        Arc::new(Self { response: Err(err), queries: Mutex::new(Vec::new()) })
    }

    pub fn recorded(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchApi for StubSearch {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, ContentError> {
        self.queries.lock().unwrap().push(query.clone());
        self.response.clone()
    }
}

/// A well-formed upstream result record.
pub fn record(title: &str) -> Value {
    json!({
        "title": { "title": title },
        "summary": { "excerpt": format!("About {title}") },
        "location": { "uri": format!("https://www.ft.com/content/{}", title.to_lowercase()) },
        "lifecycle": { "lastPublishDateTime": "2018-03-08T17:50:41Z" }
    })
}

/// App state around a stub backend, serving static files from `static_dir`.
pub fn state_with(search: Arc<StubSearch>, static_dir: &std::path::Path) -> AppState {
    let config =
        AppConfig { api_key: Some("test-key".into()), static_dir: static_dir.to_path_buf(), ..Default::default() };
    AppState::new(Arc::new(config), search, Arc::new(Renderer::default()))
}
