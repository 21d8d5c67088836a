//! Listing page adapters.
//!
//! An adapter retrieves the rendered listing and turns each row into a
//! [`ListedItem`](crate::accessor::ListedItem) the validators can read. It owns
//! pagination; the validators only see the final ordered collection.
//!
//! | Listing | Module | Method |
//! |---------|--------|--------|
//! | Hacker News "newest" | [`newest`] | HTML scraping, follows the "More" link |

pub mod newest;
