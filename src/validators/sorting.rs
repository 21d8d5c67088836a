//! Recency-ordering check.
//!
//! The listing must be newest-first: every known timestamp is no newer than
//! the last known timestamp before it. Items with an unknown timestamp are
//! skipped and do not move the comparison baseline.

use crate::accessor::ItemAccessor;
use crate::error::ValidationError;
use crate::models::SortingResult;
use crate::timestamp::extract_timestamp;
use chrono::SecondsFormat;
use tracing::{debug, info, instrument, warn};

/// Check that `items` is ordered newest-first.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] when `items` is empty.
///
/// A collection whose length differs from `expected_count` is not scanned; the
/// mismatch is reported as an invalid [`SortingResult`]. Equal adjacent
/// timestamps are allowed. The scan stops at the first item found newer than
/// its baseline.
#[instrument(
    level = "info",
    skip_all,
    fields(count = items.len(), expected_count = expected_count)
)]
pub async fn validate_sorting<I: ItemAccessor>(
    items: &[I],
    expected_count: usize,
) -> Result<SortingResult, ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::InvalidInput(
            "cannot validate sorting of an empty item collection".to_string(),
        ));
    }

    if items.len() != expected_count {
        warn!(
            expected = expected_count,
            found = items.len(),
            "Item count mismatch; skipping order scan"
        );
        return Ok(SortingResult::invalid(
            None,
            format!(
                "Expected {}, but found {} items",
                expected_count,
                items.len()
            ),
        ));
    }

    let mut baseline = None;
    for (index, item) in items.iter().enumerate() {
        let Some(current) = extract_timestamp(item).await else {
            debug!(index, "Unknown timestamp; keeping previous baseline");
            continue;
        };

        if let Some(previous) = baseline {
            if current > previous {
                let message = format!(
                    "Item {} ({}) is newer than {}",
                    index,
                    current.to_rfc3339_opts(SecondsFormat::Secs, true),
                    previous.to_rfc3339_opts(SecondsFormat::Secs, true)
                );
                warn!(index, %message, "Sort order violation");
                return Ok(SortingResult::invalid(Some(index), message));
            }
        }
        baseline = Some(current);
    }

    info!("All items correctly sorted");
    Ok(SortingResult::valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::ListedItem;
    use crate::accessor::fixtures::{FlakyItem, item, newest_first};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn newest() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_empty_collection_is_invalid_input() {
        let items: Vec<ListedItem> = vec![];
        let err = validate_sorting(&items, 100).await.unwrap_err();
        assert!(matches!(err, ValidationError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_strictly_decreasing_is_valid() {
        let items = newest_first(100, newest(), Duration::seconds(1));
        let result = validate_sorting(&items, 100).await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.error_index, None);
        assert_eq!(result.message, "All items correctly sorted");
    }

    #[tokio::test]
    async fn test_ties_are_valid() {
        let items = newest_first(100, newest(), Duration::zero());
        assert!(validate_sorting(&items, 100).await.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_count_mismatch_short_circuits() {
        // Detached items would read as unknown; a scan would have passed.
        let items = vec![FlakyItem::detached(); 99];
        let result = validate_sorting(&items, 100).await.unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.error_index, None);
        assert!(result.message.contains("Expected 100, but found 99"));
    }

    #[tokio::test]
    async fn test_out_of_order_item_reports_index() {
        let mut items = newest_first(100, newest(), Duration::seconds(1));
        items[50] = item("Story 50", newest() + Duration::minutes(1));
        let result = validate_sorting(&items, 100).await.unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.error_index, Some(50));
        assert!(result.message.starts_with("Item 50 (2025-05-06T14:31:00Z) is newer than"));
    }

    #[tokio::test]
    async fn test_only_first_violation_is_reported() {
        let mut items = newest_first(100, newest(), Duration::seconds(1));
        items[10] = item("Story 10", newest() + Duration::minutes(1));
        items[20] = item("Story 20", newest() + Duration::minutes(2));
        let result = validate_sorting(&items, 100).await.unwrap();
        assert_eq!(result.error_index, Some(10));
    }

    #[tokio::test]
    async fn test_unknown_timestamp_anywhere_is_skipped() {
        for position in [0, 37, 99] {
            let mut items = newest_first(100, newest(), Duration::seconds(1));
            items[position].timestamp_attribute = Some("not a time".to_string());
            let result = validate_sorting(&items, 100).await.unwrap();
            assert!(result.is_valid, "unknown at {position} broke the order");
        }
    }

    #[tokio::test]
    async fn test_unknown_timestamp_does_not_reset_baseline() {
        // 0: t, 1: unknown, 2: newer than 0 -> violation at 2, compared against item 0.
        let mut items = newest_first(100, newest(), Duration::seconds(1));
        items[1].timestamp_attribute = None;
        items[2] = item("Story 2", newest() + Duration::seconds(5));
        let result = validate_sorting(&items, 100).await.unwrap();
        assert_eq!(result.error_index, Some(2));
    }

    #[tokio::test]
    async fn test_detached_item_mid_scan_is_treated_as_unknown() {
        let mut items: Vec<FlakyItem> = newest_first(100, newest(), Duration::seconds(1))
            .into_iter()
            .map(FlakyItem::live)
            .collect();
        items[42] = FlakyItem::detached();
        assert!(validate_sorting(&items, 100).await.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_custom_expected_count() {
        let items = newest_first(30, newest(), Duration::seconds(1));
        assert!(validate_sorting(&items, 30).await.unwrap().is_valid);
    }
}
