//! The read-only capability validators use to look at a listed item.
//!
//! Validators never own or navigate the page. They only read through
//! [`ItemAccessor`], which lets the same algorithms run against a live page
//! adapter or against in-memory items in tests.

use crate::error::AccessError;

/// Per-item field reads.
///
/// Each read may suspend and may fail; callers are expected to degrade a
/// failure into "unknown" or an empty value for that one item.
pub trait ItemAccessor {
    /// The raw absolute-time attribute of the item's age marker, if present.
    async fn timestamp_attribute(&self) -> Result<Option<String>, AccessError>;

    /// The headline text.
    async fn title(&self) -> Result<String, AccessError>;

    /// The headline's link target.
    async fn url(&self) -> Result<String, AccessError>;

    /// The submitting user's name.
    async fn author(&self) -> Result<String, AccessError>;

    /// The raw score text (e.g. `"12 points"`), if present.
    async fn score(&self) -> Result<Option<String>, AccessError>;
}

/// An owned snapshot of one rendered listing row.
///
/// Produced by [`crate::scrapers::newest`]. A `None` title, url or author means
/// the element was not present on the row and reads back as
/// [`AccessError::MissingElement`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListedItem {
    /// The row's item id, when the page exposes one.
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub author: Option<String>,
    pub score: Option<String>,
    pub timestamp_attribute: Option<String>,
}

impl ItemAccessor for ListedItem {
    async fn timestamp_attribute(&self) -> Result<Option<String>, AccessError> {
        Ok(self.timestamp_attribute.clone())
    }

    async fn title(&self) -> Result<String, AccessError> {
        self.title.clone().ok_or(AccessError::MissingElement("title"))
    }

    async fn url(&self) -> Result<String, AccessError> {
        self.url.clone().ok_or(AccessError::MissingElement("url"))
    }

    async fn author(&self) -> Result<String, AccessError> {
        self.author.clone().ok_or(AccessError::MissingElement("author"))
    }

    async fn score(&self) -> Result<Option<String>, AccessError> {
        Ok(self.score.clone())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_title_reads_as_missing_element() {
        let item = ListedItem::default();
        assert_eq!(item.title().await, Err(AccessError::MissingElement("title")));
        assert_eq!(item.score().await, Ok(None));
    }

    #[tokio::test]
    async fn test_detached_item_fails_every_read() {
        let item = fixtures::FlakyItem::detached();
        assert!(item.timestamp_attribute().await.is_err());
        assert!(item.author().await.is_err());
    }
}
