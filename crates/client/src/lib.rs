//! Client code for newsdesk.
//!
//! This crate provides the content search API client, its query builder, and
//! normalization of search results into articles.

pub mod content;

pub use content::{
    ContentClient, ContentConfig, ContentError, DEFAULT_MAX_RESULTS, SearchApi, SearchPage, SearchQuery, to_article,
    to_articles,
};
