//! Command-line interface definitions.
//!
//! Every option can also be supplied through an environment variable. Flags
//! override values loaded from `--config`.

use crate::config::ValidationConfig;
use clap::Parser;

/// Command-line arguments for the newest-listing check.
///
/// # Examples
///
/// ```sh
/// # Validate the live listing with defaults
/// newest_check
///
/// # Looser freshness window, keep a JSON report
/// newest_check --staleness-minutes 10 --report-dir ./reports
///
/// # Settings from a file
/// newest_check -c ./newest_check.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the first listing page
    #[arg(short, long, env = "NEWEST_CHECK_URL")]
    pub url: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWEST_CHECK_CONFIG")]
    pub config: Option<String>,

    /// Number of items the sorting check requires
    #[arg(short = 'n', long, env = "NEWEST_CHECK_EXPECTED_COUNT")]
    pub expected_count: Option<usize>,

    /// Maximum item age, in minutes, before it is reported as stale
    #[arg(short, long, env = "NEWEST_CHECK_STALENESS_MINUTES")]
    pub staleness_minutes: Option<u64>,

    /// Maximum number of listing pages to follow
    #[arg(long, env = "NEWEST_CHECK_MAX_PAGES")]
    pub max_pages: Option<usize>,

    /// Directory for the JSON run report (no report is written when omitted)
    #[arg(short, long, env = "NEWEST_CHECK_REPORT_DIR")]
    pub report_dir: Option<String>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "NEWEST_CHECK_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Cli {
    /// Overlay any flags that were given onto `config`.
    pub fn apply(&self, mut config: ValidationConfig) -> ValidationConfig {
        if let Some(url) = &self.url {
            config.listing_url = url.clone();
        }
        if let Some(n) = self.expected_count {
            config.expected_item_count = n;
        }
        if let Some(minutes) = self.staleness_minutes {
            config.staleness_threshold_minutes = minutes;
        }
        if let Some(pages) = self.max_pages {
            config.max_pages = pages;
        }
        config
    }
}
