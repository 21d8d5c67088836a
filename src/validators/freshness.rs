//! Timestamp freshness check.
//!
//! Items older than the staleness threshold relative to one sampled "now" are
//! reported. Items with an unknown timestamp are neither stale nor counted as
//! fresh; they are skipped.

use crate::accessor::ItemAccessor;
use crate::models::{InaccurateItem, TimestampAccuracyResult};
use crate::timestamp::extract_timestamp;
use chrono::{DateTime, TimeDelta, Utc};
use futures::future::join_all;
use tracing::{info, instrument, warn};

/// Flag items whose age exceeds `threshold`, measured against the current time.
///
/// The clock is read once, so every item in the pass shares one reference instant.
pub async fn validate_freshness<I: ItemAccessor>(
    items: &[I],
    threshold: TimeDelta,
) -> TimestampAccuracyResult {
    validate_freshness_at(items, threshold, Utc::now()).await
}

/// Same as [`validate_freshness`] with an explicit reference instant.
///
/// Only an age strictly greater than `threshold` is stale.
#[instrument(
    level = "info",
    skip_all,
    fields(count = items.len(), threshold_secs = threshold.num_seconds())
)]
pub async fn validate_freshness_at<I: ItemAccessor>(
    items: &[I],
    threshold: TimeDelta,
    now: DateTime<Utc>,
) -> TimestampAccuracyResult {
    let timestamps = join_all(items.iter().map(|item| extract_timestamp(item))).await;

    let inaccurate_items: Vec<InaccurateItem> = timestamps
        .into_iter()
        .enumerate()
        .filter_map(|(index, ts)| ts.map(|timestamp| (index, timestamp)))
        .filter(|(_, timestamp)| now.signed_duration_since(*timestamp) > threshold)
        .map(|(index, timestamp)| InaccurateItem { index, timestamp })
        .collect();

    if inaccurate_items.is_empty() {
        info!("All known timestamps are within the staleness threshold");
    } else {
        warn!(stale = inaccurate_items.len(), "Stale items found");
    }

    TimestampAccuracyResult {
        is_accurate: inaccurate_items.is_empty(),
        inaccurate_items,
    }
}
