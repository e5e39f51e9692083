//! Render-ready article view model.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Display format for `Article::published`, e.g. `10/16/2026, 9:34:00 AM`.
pub const PUBLISHED_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A single search result, normalized for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub permalink: String,
    /// RFC 3339 timestamp with millisecond precision, for `<time datetime>`.
    pub published_timestamp: String,
    /// Human-readable form of the same instant, in UTC.
    pub published: String,
}

impl Article {
    /// Build an article, deriving both published strings from one instant.
    pub fn new(title: String, summary: String, permalink: String, published_at: DateTime<Utc>) -> Self {
        Self {
            title,
            summary,
            permalink,
            published_timestamp: published_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            published: published_at.format(PUBLISHED_FORMAT).to_string(),
        }
    }
}
