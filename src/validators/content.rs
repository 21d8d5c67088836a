//! Per-item completeness check.

use crate::accessor::ItemAccessor;
use crate::error::AccessError;
use crate::models::{ArticleDetails, ContentValidationResult};
use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument};

/// Maximum number of items read at the same time.
const CONTENT_CONCURRENCY: usize = 16;

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(-?\d+)").unwrap());

/// Read the fields of one item.
///
/// A failed read yields an empty string (or `None` for the score); it never
/// fails the caller.
pub async fn extract_details<I: ItemAccessor>(item: &I) -> ArticleDetails {
    let (title, url, author, score) =
        futures::join!(item.title(), item.url(), item.author(), item.score());

    ArticleDetails {
        title: or_empty("title", title),
        url: or_empty("url", url),
        author: or_empty("author", author),
        score: score
            .unwrap_or_else(|e| {
                debug!(error = %e, "Score lookup failed");
                None
            })
            .as_deref()
            .and_then(parse_score),
    }
}

/// Check that one item has a title, url, author and numeric score.
pub async fn validate_content<I: ItemAccessor>(item: &I) -> ContentValidationResult {
    let details = extract_details(item).await;
    ContentValidationResult {
        is_valid: details.is_complete(),
        details,
    }
}

/// Run [`validate_content`] over every item, returning results in input order.
#[instrument(level = "info", skip_all, fields(count = items.len()))]
pub async fn validate_all_content<I: ItemAccessor>(items: &[I]) -> Vec<ContentValidationResult> {
    let results: Vec<ContentValidationResult> = stream::iter(items)
        .map(|item| validate_content(item))
        .buffered(CONTENT_CONCURRENCY)
        .collect()
        .await;

    let incomplete = results.iter().filter(|r| !r.is_valid).count();
    info!(count = results.len(), incomplete, "Checked item content");
    results
}

/// Leading integer of a score label such as `"12 points"`.
pub fn parse_score(raw: &str) -> Option<i64> {
    SCORE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn or_empty(field: &'static str, read: Result<String, AccessError>) -> String {
    read.unwrap_or_else(|e| {
        debug!(field, error = %e, "Field lookup failed; using empty value");
        String::new()
    })
}
