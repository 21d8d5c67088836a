//! Article validation checks and the orchestrator that runs them together.
//!
//! Each check reads the same item collection through
//! [`ItemAccessor`](crate::accessor::ItemAccessor) and never mutates it:
//!
//! | Check | Module | Entry point |
//! |-------|--------|-------------|
//! | Newest-first ordering | [`sorting`] | [`validate_sorting`] |
//! | Required fields present | [`content`] | [`validate_content`], [`validate_all_content`] |
//! | Timestamps within the staleness window | [`freshness`] | [`validate_freshness`] |
//! | No repeated titles | [`uniqueness`] | [`validate_uniqueness`] |
//!
//! [`perform_full_validation`] runs all four concurrently and always returns
//! every outcome, even when an earlier check already failed.

pub mod content;
pub mod freshness;
pub mod sorting;
pub mod uniqueness;

pub use content::{extract_details, validate_all_content, validate_content};
pub use freshness::{validate_freshness, validate_freshness_at};
pub use sorting::validate_sorting;
pub use uniqueness::validate_uniqueness;

use crate::accessor::ItemAccessor;
use crate::config::ValidationConfig;
use crate::models::{FullValidationResult, SortingResult};
use tracing::{info, instrument, warn};

/// Run every check over `items` and fold the outcomes into one verdict.
///
/// The four checks share read access to `items` and run concurrently. An
/// empty collection cannot be sorted; it is reported as an invalid sorting
/// result carrying the error text, while the other checks still run.
#[instrument(level = "info", skip_all, fields(count = items.len()))]
pub async fn perform_full_validation<I: ItemAccessor>(
    items: &[I],
    config: &ValidationConfig,
) -> FullValidationResult {
    let (sorting, content, timestamp_accuracy, uniqueness) = futures::join!(
        validate_sorting(items, config.expected_item_count),
        validate_all_content(items),
        validate_freshness(items, config.staleness_threshold()),
        validate_uniqueness(items)
    );

    let sorting = sorting.unwrap_or_else(|e| {
        warn!(error = %e, "Sorting check rejected its input");
        SortingResult::invalid(None, e.to_string())
    });

    let result = FullValidationResult::new(sorting, content, timestamp_accuracy, uniqueness);
    info!(
        is_fully_valid = result.is_fully_valid,
        sorted = result.sorting.is_valid,
        incomplete = result.incomplete_indexes().len(),
        stale = result.timestamp_accuracy.inaccurate_items.len(),
        duplicates = result.uniqueness.duplicates.len(),
        "Full validation complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::ListedItem;
    use crate::accessor::fixtures::{FlakyItem, item, newest_first};
    use chrono::{Duration, Utc};

    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    #[tokio::test]
    async fn test_hundred_fresh_sorted_items_are_fully_valid() {
        let items = newest_first(100, Utc::now(), Duration::seconds(1));
        let result = perform_full_validation(&items, &config()).await;
        assert!(result.sorting.is_valid);
        assert_eq!(result.content.len(), 100);
        assert!(result.timestamp_accuracy.is_accurate);
        assert!(result.uniqueness.is_unique);
        assert!(result.is_fully_valid);
    }

    #[tokio::test]
    async fn test_ninety_nine_items_still_report_every_check() {
        let items = newest_first(99, Utc::now(), Duration::seconds(1));
        let result = perform_full_validation(&items, &config()).await;
        assert!(!result.sorting.is_valid);
        assert!(result.sorting.message.contains("Expected 100, but found 99"));
        assert_eq!(result.content.len(), 99);
        assert!(result.content.iter().all(|c| c.is_valid));
        assert!(result.timestamp_accuracy.is_accurate);
        assert!(result.uniqueness.is_unique);
        assert!(!result.is_fully_valid);
    }

    #[tokio::test]
    async fn test_out_of_order_item_is_pinpointed() {
        let now = Utc::now();
        let mut items = newest_first(100, now - Duration::minutes(1), Duration::seconds(1));
        items[50] = item("Story 50", now);
        let result = perform_full_validation(&items, &config()).await;
        assert_eq!(result.sorting.error_index, Some(50));
        assert!(!result.is_fully_valid);
    }

    #[tokio::test]
    async fn test_every_failure_is_reported_together() {
        let now = Utc::now();
        let mut items = newest_first(100, now, Duration::seconds(1));
        items[3].author = None;
        items[9].title = items[8].title.clone();
        items[99] = item("Story 99", now - Duration::hours(1));

        let result = perform_full_validation(&items, &config()).await;
        assert!(result.sorting.is_valid);
        assert_eq!(result.incomplete_indexes(), vec![3]);
        assert_eq!(result.uniqueness.duplicates[0].index, 9);
        assert_eq!(result.timestamp_accuracy.inaccurate_items[0].index, 99);
        assert!(!result.is_fully_valid);
    }

    #[tokio::test]
    async fn test_empty_collection_returns_complete_result() {
        let items: Vec<ListedItem> = vec![];
        let result = perform_full_validation(&items, &config()).await;
        assert!(!result.sorting.is_valid);
        assert!(result.sorting.message.contains("invalid input"));
        assert!(result.content.is_empty());
        assert!(result.timestamp_accuracy.is_accurate);
        assert!(result.uniqueness.is_unique);
        assert!(!result.is_fully_valid);
    }

    #[tokio::test]
    async fn test_page_navigating_away_degrades_single_items() {
        let mut items: Vec<FlakyItem> = newest_first(100, Utc::now(), Duration::seconds(1))
            .into_iter()
            .map(FlakyItem::live)
            .collect();
        items[60] = FlakyItem::detached();

        let result = perform_full_validation(&items, &config()).await;
        assert!(result.sorting.is_valid);
        assert_eq!(result.incomplete_indexes(), vec![60]);
        assert!(result.timestamp_accuracy.is_accurate);
        assert!(result.uniqueness.is_unique);
        assert!(!result.is_fully_valid);
    }
}
