//! # Newest Check
//!
//! End-to-end validation of a news aggregator's "newest" listing. Items are
//! scraped across paginated views and checked for:
//!
//! - newest-first ordering by timestamp
//! - completeness (title, url, author, score)
//! - freshness against a staleness window
//! - duplicate titles
//!
//! ## Architecture
//!
//! 1. **Fetching**: [`fetch`] retrieves listing pages with retry and backoff
//! 2. **Indexing**: [`scrapers`] turn each page into [`accessor::ListedItem`]s
//! 3. **Validation**: [`validators`] read items only through
//!    [`accessor::ItemAccessor`], so they run the same on live or in-memory items
//! 4. **Output**: [`outputs`] writes a single-run JSON report

pub mod accessor;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod timestamp;
pub mod utils;
pub mod validators;

pub use accessor::{ItemAccessor, ListedItem};
pub use config::ValidationConfig;
pub use error::ValidationError;
pub use models::FullValidationResult;
pub use validators::perform_full_validation;
