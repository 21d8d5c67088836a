//! # Newest Check
//!
//! Scrapes the first `expected_item_count` items of a news aggregator's
//! "newest" listing and validates ordering, content, freshness and
//! uniqueness in one pass.
//!
//! ## Usage
//!
//! ```sh
//! newest_check --report-dir ./reports
//! ```
//!
//! Exits with status 0 when every check passes and 1 otherwise.

use chrono::Utc;
use clap::Parser;
use newest_check::cli::Cli;
use newest_check::config::ValidationConfig;
use newest_check::fetch::{HttpFetcher, RetryFetch};
use newest_check::models::{FullValidationResult, RunReport};
use newest_check::outputs::json;
use newest_check::scrapers;
use newest_check::utils::{summarize_indexes, truncate_for_log};
use newest_check::validators::perform_full_validation;
use std::error::Error;
use std::process::ExitCode;
use std::time::Duration as StdDuration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// Indexes listed per failing check before eliding the rest.
const LOG_INDEX_LIMIT: usize = 10;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newest_check starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Configuration ----
    let config = match &args.config {
        Some(path) => ValidationConfig::load(path).await?,
        None => ValidationConfig::default(),
    };
    let config = args.apply(config);
    config.check()?;
    info!(
        listing_url = %config.listing_url,
        expected_item_count = config.expected_item_count,
        staleness_threshold_minutes = config.staleness_threshold_minutes,
        "Configuration ready"
    );

    // Fail early rather than after a full scrape.
    if let Some(dir) = &args.report_dir {
        if let Err(e) = newest_check::utils::ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Report directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Index listing items ----
    let fetcher = RetryFetch::new(
        HttpFetcher::new(StdDuration::from_secs(args.timeout_secs))?,
        3,
        StdDuration::from_secs(1),
    );
    let items = scrapers::newest::index_items(&fetcher, &config).await?;
    info!(count = items.len(), "Items ready for validation");

    // ---- Validate ----
    let result = perform_full_validation(&items, &config).await;
    log_summary(&result);

    // ---- Report ----
    if let Some(dir) = &args.report_dir {
        let report = RunReport {
            checked_at: Utc::now(),
            listing_url: config.listing_url.clone(),
            item_count: items.len(),
            result: result.clone(),
        };
        match json::write_report(&report, dir).await {
            Ok(path) => info!(path = %path.display(), "Report written"),
            Err(e) => error!(error = %e, "Failed to write report"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        is_fully_valid = result.is_fully_valid,
        "Execution complete"
    );

    Ok(if result.is_fully_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// One log line per check, with the offending indexes for failures.
fn log_summary(result: &FullValidationResult) {
    if result.sorting.is_valid {
        info!(message = %result.sorting.message, "Sorting: pass");
    } else {
        warn!(
            error_index = ?result.sorting.error_index,
            message = %result.sorting.message,
            "Sorting: FAIL"
        );
    }

    let incomplete = result.incomplete_indexes();
    if incomplete.is_empty() {
        info!(checked = result.content.len(), "Content: pass");
    } else {
        warn!(
            count = incomplete.len(),
            indexes = %summarize_indexes(&incomplete, LOG_INDEX_LIMIT),
            "Content: FAIL"
        );
        for index in incomplete.iter().take(LOG_INDEX_LIMIT) {
            let details = &result.content[*index].details;
            debug!(
                index,
                title = %truncate_for_log(&details.title, 80),
                url_present = !details.url.is_empty(),
                author_present = !details.author.is_empty(),
                score = ?details.score,
                "Incomplete item"
            );
        }
    }

    let stale: Vec<usize> = result
        .timestamp_accuracy
        .inaccurate_items
        .iter()
        .map(|i| i.index)
        .collect();
    if stale.is_empty() {
        info!("Freshness: pass");
    } else {
        warn!(
            count = stale.len(),
            indexes = %summarize_indexes(&stale, LOG_INDEX_LIMIT),
            "Freshness: FAIL"
        );
    }

    if result.uniqueness.is_unique {
        info!("Uniqueness: pass");
    } else {
        for dup in result.uniqueness.duplicates.iter().take(LOG_INDEX_LIMIT) {
            warn!(
                index = dup.index,
                title = %truncate_for_log(&dup.title, 80),
                "Uniqueness: duplicate title"
            );
        }
    }
}
