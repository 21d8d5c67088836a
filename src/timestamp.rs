//! Resolve an item's age marker into a UTC instant.
//!
//! The listing renders each item's age as relative text ("3 minutes ago")
//! with the absolute time carried in an attribute, typically
//! `"2025-05-06T14:30:00 1746541800"`. Anything that cannot be resolved is
//! reported as unknown; a failed read never reaches the validators.

use crate::accessor::ItemAccessor;
use crate::models::Timestamp;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, warn};

/// Read and parse the timestamp of one item.
///
/// Returns `None` when the marker is absent, the read fails, or the value
/// does not parse.
pub async fn extract_timestamp<I: ItemAccessor>(item: &I) -> Timestamp {
    match item.timestamp_attribute().await {
        Ok(Some(raw)) => {
            let parsed = parse_timestamp_attribute(&raw);
            if parsed.is_none() {
                warn!(raw = %raw, "Unparseable timestamp attribute; treating as unknown");
            }
            parsed
        }
        Ok(None) => {
            debug!("Item has no timestamp attribute");
            None
        }
        Err(e) => {
            warn!(error = %e, "Timestamp lookup failed; treating as unknown");
            None
        }
    }
}

/// Parse a raw time attribute.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2025-05-06T14:30:00Z`, `2025-05-06T16:30:00+02:00`)
/// - naive ISO-8601 taken as UTC (`2025-05-06T14:30:00`, optional fraction)
/// - unix epoch seconds (`1746541800`)
///
/// The datetime forms are read from the first whitespace-separated token.
/// Epoch seconds are only accepted in values of one or two tokens, first token
/// before second, so relative text such as `"3 minutes ago"` stays unknown.
pub fn parse_timestamp_attribute(raw: &str) -> Timestamp {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let first = tokens.first()?;

    parse_datetime(first).or_else(|| match tokens.as_slice() {
        [only] => parse_epoch(only),
        [first, second] => parse_epoch(first).or_else(|| parse_epoch(second)),
        _ => None,
    })
}

fn parse_datetime(token: &str) -> Timestamp {
    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn parse_epoch(token: &str) -> Timestamp {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
