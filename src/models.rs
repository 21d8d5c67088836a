//! Data models for listed articles and validation outcomes.
//!
//! This module defines the values produced by one validation pass:
//! - [`ArticleDetails`]: fields read from a single listed item
//! - [`SortingResult`], [`ContentValidationResult`], [`TimestampAccuracyResult`],
//!   [`UniquenessResult`]: per-check outcomes
//! - [`FullValidationResult`]: the folded verdict returned to callers
//!
//! Every result is created fresh per call and owns its data; nothing here
//! borrows from the page the items came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized instant, or `None` when the item's time marker was absent or unparseable.
pub type Timestamp = Option<DateTime<Utc>>;

/// The fields read from one listed item.
///
/// Missing fields are empty strings, and a missing or non-numeric score is
/// `None`. Completeness is checked with [`ArticleDetails::is_complete`], never
/// at extraction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetails {
    /// The headline text, exactly as rendered.
    pub title: String,
    /// The link target of the headline.
    pub url: String,
    /// The submitting user's name.
    pub author: String,
    /// Points shown next to the item. `Some(0)` is a valid score.
    pub score: Option<i64>,
}

impl ArticleDetails {
    /// Title, url and author are non-empty and the score parsed as a number.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.url.is_empty()
            && !self.author.is_empty()
            && self.score.is_some()
    }
}

/// Outcome of the recency-ordering check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingResult {
    pub is_valid: bool,
    /// Index of the first item found newer than its predecessor.
    pub error_index: Option<usize>,
    pub message: String,
}

impl SortingResult {
    pub(crate) fn valid() -> Self {
        Self {
            is_valid: true,
            error_index: None,
            message: "All items correctly sorted".to_string(),
        }
    }

    pub(crate) fn invalid(error_index: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_index,
            message: message.into(),
        }
    }
}

/// Outcome of the completeness check for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentValidationResult {
    pub is_valid: bool,
    pub details: ArticleDetails,
}

/// An item whose timestamp is older than the staleness threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InaccurateItem {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of the freshness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampAccuracyResult {
    pub is_accurate: bool,
    pub inaccurate_items: Vec<InaccurateItem>,
}

/// A repeated title. The first occurrence is never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateItem {
    pub index: usize,
    pub title: String,
}

/// Outcome of the duplicate-title check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniquenessResult {
    pub is_unique: bool,
    pub duplicates: Vec<DuplicateItem>,
}

/// All four checks from a single pass, plus the combined verdict.
///
/// Every field is always populated, even when an earlier check already failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullValidationResult {
    pub sorting: SortingResult,
    pub content: Vec<ContentValidationResult>,
    pub timestamp_accuracy: TimestampAccuracyResult,
    pub uniqueness: UniquenessResult,
    pub is_fully_valid: bool,
}

impl FullValidationResult {
    /// Fold the individual outcomes into one result.
    pub fn new(
        sorting: SortingResult,
        content: Vec<ContentValidationResult>,
        timestamp_accuracy: TimestampAccuracyResult,
        uniqueness: UniquenessResult,
    ) -> Self {
        let is_fully_valid = sorting.is_valid
            && content.iter().all(|c| c.is_valid)
            && timestamp_accuracy.is_accurate
            && uniqueness.is_unique;
        Self {
            sorting,
            content,
            timestamp_accuracy,
            uniqueness,
            is_fully_valid,
        }
    }

    /// Indexes of items that failed the completeness check.
    pub fn incomplete_indexes(&self) -> Vec<usize> {
        self.content
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_valid)
            .map(|(i, _)| i)
            .collect()
    }
}

/// One run of the harness as written to disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// When validation finished, in UTC.
    pub checked_at: DateTime<Utc>,
    /// The first listing page that was retrieved.
    pub listing_url: String,
    /// Number of items handed to the validators.
    pub item_count: usize,
    pub result: FullValidationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(title: &str, url: &str, author: &str, score: Option<i64>) -> ArticleDetails {
        ArticleDetails {
            title: title.to_string(),
            url: url.to_string(),
            author: author.to_string(),
            score,
        }
    }

    #[test]
    fn test_empty_title_is_incomplete() {
        assert!(!details("", "x", "y", Some(1)).is_complete());
    }

    #[test]
    fn test_zero_score_is_complete() {
        assert!(details("t", "u", "a", Some(0)).is_complete());
    }

    #[test]
    fn test_missing_score_is_incomplete() {
        assert!(!details("t", "u", "a", None).is_complete());
    }

    #[test]
    fn test_default_details_are_incomplete() {
        assert!(!ArticleDetails::default().is_complete());
    }

    #[test]
    fn test_full_result_folds_every_check() {
        let content_ok = ContentValidationResult {
            is_valid: true,
            details: details("t", "u", "a", Some(3)),
        };
        let fresh = TimestampAccuracyResult {
            is_accurate: true,
            inaccurate_items: vec![],
        };
        let unique = UniquenessResult {
            is_unique: true,
            duplicates: vec![],
        };

        let ok = FullValidationResult::new(
            SortingResult::valid(),
            vec![content_ok.clone()],
            fresh.clone(),
            unique.clone(),
        );
        assert!(ok.is_fully_valid);

        let bad_content = ContentValidationResult {
            is_valid: false,
            details: ArticleDetails::default(),
        };
        let not_ok = FullValidationResult::new(
            SortingResult::valid(),
            vec![content_ok, bad_content],
            fresh,
            unique,
        );
        assert!(!not_ok.is_fully_valid);
        assert_eq!(not_ok.incomplete_indexes(), vec![1]);
    }

    #[test]
    fn test_sorting_result_serializes_snake_case() {
        let json = serde_json::to_string(&SortingResult::invalid(Some(50), "boom")).unwrap();
        assert!(json.contains("\"is_valid\":false"));
        assert!(json.contains("\"error_index\":50"));
    }
}
