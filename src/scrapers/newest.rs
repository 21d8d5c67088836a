//! Hacker News "newest" listing scraper.
//!
//! Each story is a `tr.athing` row holding the headline, followed by a
//! subtext row with the score, the submitter and the age marker:
//!
//! ```text
//! <tr class="athing submission" id="43901234">
//!   ... <span class="titleline"><a href="https://...">Headline</a> ...
//! </tr>
//! <tr><td class="subtext"><span class="subline">
//!   <span class="score">3 points</span> by <a class="hnuser">user</a>
//!   <span class="age" title="2025-05-06T14:30:00 1746541800">...</span>
//! </span></td></tr>
//! ```
//!
//! Pages are chained through the `a.morelink` link at the bottom.

use crate::accessor::ListedItem;
use crate::config::ValidationConfig;
use crate::error::FetchError;
use crate::fetch::PageFetcher;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Collect up to `expected_item_count` items, following pagination.
///
/// Stops when enough items are collected, when a page has no "More" link, or
/// after `max_pages` pages. The result is truncated to the expected count; a
/// shorter result is returned as-is for the validators to report.
///
/// # Errors
///
/// Fails when a page cannot be retrieved, or when the first page has no items.
#[instrument(level = "info", skip_all, fields(listing_url = %config.listing_url))]
pub async fn index_items<F: PageFetcher>(
    fetcher: &F,
    config: &ValidationConfig,
) -> Result<Vec<ListedItem>, FetchError> {
    let mut page_url = Url::parse(&config.listing_url)?;
    let mut items = Vec::new();

    for page in 1..=config.max_pages {
        let body = fetcher.fetch(page_url.as_str()).await?;
        let (page_items, next) = parse_listing(&body, &page_url)?;
        info!(page, url = %page_url, count = page_items.len(), "Indexed listing page");

        if page_items.is_empty() {
            if items.is_empty() {
                return Err(FetchError::EmptyListing(page_url.to_string()));
            }
            warn!(page, "Listing page had no items; stopping pagination");
            break;
        }
        items.extend(page_items);

        if items.len() >= config.expected_item_count {
            break;
        }
        match next {
            Some(next) => page_url = next,
            None => {
                debug!(page, "No further pages");
                break;
            }
        }
    }

    items.truncate(config.expected_item_count);
    info!(count = items.len(), "Collected listing items");
    Ok(items)
}

/// Parse one listing page into items and the absolute URL of the next page.
pub fn parse_listing(
    html: &str,
    base: &Url,
) -> Result<(Vec<ListedItem>, Option<Url>), FetchError> {
    let document = Html::parse_document(html);
    let row_selector = selector("tr.athing")?;
    let title_selector = selector("span.titleline > a")?;
    let score_selector = selector("span.score")?;
    let author_selector = selector("a.hnuser")?;
    let age_selector = selector("span.age")?;
    let more_selector = selector("a.morelink[href]")?;

    let mut items = Vec::new();
    for row in document.select(&row_selector) {
        let headline = row.select(&title_selector).next();
        let subtext = row.next_siblings().find_map(ElementRef::wrap);
        let in_subtext = |sel: &Selector| subtext.and_then(|s| s.select(sel).next());

        let url = headline
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve(base, href));

        let item = ListedItem {
            id: row.value().id().map(str::to_string),
            title: headline.map(|a| a.text().collect::<String>()),
            url,
            author: in_subtext(&author_selector).map(|a| a.text().collect::<String>()),
            score: in_subtext(&score_selector).map(|s| s.text().collect::<String>()),
            timestamp_attribute: in_subtext(&age_selector)
                .and_then(|s| s.value().attr("title"))
                .map(str::to_string),
        };
        debug!(id = ?item.id, title = ?item.title, "Parsed listing row");
        items.push(item);
    }

    let next = document
        .select(&more_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| base.join(href).ok());

    Ok((items, next))
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Selector(format!("{css}: {e}")))
}

/// Resolve a possibly relative link; links that do not resolve are kept verbatim.
fn resolve(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}
