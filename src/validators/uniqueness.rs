//! Duplicate-title check.
//!
//! Titles are compared exactly as read: no trimming, no case folding. An empty
//! title is an ordinary key, so several untitled items count as duplicates.

use crate::accessor::ItemAccessor;
use crate::models::{DuplicateItem, UniquenessResult};
use futures::future::join_all;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Report every item whose title already appeared earlier in `items`.
///
/// The first occurrence of a title is never reported.
#[instrument(level = "info", skip_all, fields(count = items.len()))]
pub async fn validate_uniqueness<I: ItemAccessor>(items: &[I]) -> UniquenessResult {
    let titles = join_all(items.iter().map(|item| async move {
        item.title().await.unwrap_or_else(|e| {
            debug!(error = %e, "Title lookup failed; using empty title");
            String::new()
        })
    }))
    .await;

    let mut seen = HashSet::with_capacity(titles.len());
    let mut duplicates = Vec::new();
    for (index, title) in titles.into_iter().enumerate() {
        if seen.contains(&title) {
            duplicates.push(DuplicateItem { index, title });
        } else {
            seen.insert(title);
        }
    }

    if duplicates.is_empty() {
        info!("All titles are unique");
    } else {
        warn!(duplicates = duplicates.len(), "Duplicate titles found");
    }

    UniquenessResult {
        is_unique: duplicates.is_empty(),
        duplicates,
    }
}
