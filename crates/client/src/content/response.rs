//! Content search response types and normalization.
//!
//! The upstream schema is loosely typed and drifts. Every envelope field is
//! optional and resolves to an explicit default, so a sparse response still
//! decodes. Individual result records are kept as raw JSON until they are
//! normalized, so one bad record cannot fail the whole envelope.

use chrono::{DateTime, NaiveDateTime, Utc};
use newsdesk_core::{Article, Error, PaginationInfo};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw response from the content search API.
///
/// Shape: `{ query: { resultContext: { maxResults, offset } }, results: [ { indexCount, results: [...] } ] }`
///
/// Absent and `null` fields both resolve to the default noted on each field.
#[derive(Debug, Default, Deserialize)]
pub struct ContentApiResponse {
    /// Echo of the submitted query. Missing: no paging echo.
    #[serde(default)]
    pub query: Option<QueryEcho>,
    /// Result blocks, one per curation. Missing: empty. A `null` block counts as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Option<ResultBlock>>,
}

/// Echoed query metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho {
    #[serde(default)]
    pub result_context: Option<ResultContextEcho>,
}

/// Echoed paging values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultContextEcho {
    /// Missing: 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_results: u64,
    /// Missing: 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: u64,
}

/// One block of results.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultBlock {
    /// Total matches in the index. Missing: 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub index_count: u64,
    /// Result records. Missing: empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Value>,
}

/// Decode a field that may be `null`, using the type's default in that case.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of search results with its paging facts.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub pagination: PaginationInfo,
    pub results: Vec<Value>,
}

impl From<ContentApiResponse> for SearchPage {
    fn from(raw: ContentApiResponse) -> Self {
        let echo = raw.query.and_then(|q| q.result_context).unwrap_or_default();
        let first = raw.results.into_iter().next().flatten().unwrap_or_default();

        SearchPage {
            pagination: PaginationInfo { count: echo.max_results, offset: echo.offset, total: first.index_count },
            results: first.results,
        }
    }
}

/// Typed view of one result record.
#[derive(Debug, Default, Deserialize)]
struct ContentResult {
    #[serde(default)]
    title: Option<TitleAspect>,
    #[serde(default)]
    summary: Option<SummaryAspect>,
    #[serde(default)]
    location: Option<LocationAspect>,
    #[serde(default)]
    lifecycle: Option<LifecycleAspect>,
}

#[derive(Debug, Default, Deserialize)]
struct TitleAspect {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryAspect {
    #[serde(default)]
    excerpt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LocationAspect {
    #[serde(default)]
    uri: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LifecycleAspect {
    #[serde(default)]
    last_publish_date_time: Option<String>,
}

/// Normalize one raw result record into an article.
///
/// Title, summary and permalink are copied as-is and default to empty.
///
/// # Errors
///
/// Returns `Error::MalformedResult` if the record is not an object of
/// aspects, or its `lifecycle.lastPublishDateTime` is absent or unparsable.
pub fn to_article(raw: &Value) -> Result<Article, Error> {
    let record = ContentResult::deserialize(raw).map_err(|e| Error::MalformedResult(e.to_string()))?;

    let published = record
        .lifecycle
        .and_then(|l| l.last_publish_date_time)
        .ok_or_else(|| Error::MalformedResult("missing lifecycle.lastPublishDateTime".into()))?;
    let published_at = parse_publish_time(&published)?;

    Ok(Article::new(
        record.title.and_then(|t| t.title).unwrap_or_default(),
        record.summary.and_then(|s| s.excerpt).unwrap_or_default(),
        record.location.and_then(|l| l.uri).unwrap_or_default(),
        published_at,
    ))
}

/// Normalize every record, skipping the ones that fail.
///
/// Skipped records are logged at warn level and do not fail the request.
pub fn to_articles(results: &[Value]) -> Vec<Article> {
    results
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| match to_article(raw) {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::warn!(index = idx, error = %e, "skipping malformed search result");
                None
            }
        })
        .collect()
}

/// Parse an upstream publish timestamp.
///
/// Accepts RFC 3339, and offset-less ISO 8601 which is taken as UTC.
fn parse_publish_time(input: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::MalformedResult(format!("invalid lastPublishDateTime {input:?}: {e}")))
}
