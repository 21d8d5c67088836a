//! JSON report for a single run.
//!
//! # Output Structure
//!
//! One file per run, named after the UTC time the check finished:
//! ```text
//! report_dir/
//! └── 2025-05-06_143000.json
//! ```

use crate::models::RunReport;
use crate::utils::ensure_writable_dir;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `report` as pretty JSON into `report_dir`.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip_all, fields(report_dir = %report_dir))]
pub async fn write_report(report: &RunReport, report_dir: &str) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    if let Err(e) = ensure_writable_dir(report_dir).await {
        error!(error = %e, "Report directory is not writable");
        return Err(e);
    }

    let path = PathBuf::from(report_dir).join(report_file_name(report));
    info!(path = %path.display(), "Writing JSON report");
    fs::write(&path, json).await?;
    info!(path = %path.display(), items = report.item_count, "Wrote JSON report");

    Ok(path)
}

/// `{YYYY-MM-DD}_{HHMMSS}.json` from the report's check time.
pub fn report_file_name(report: &RunReport) -> String {
    format!("{}.json", report.checked_at.format("%Y-%m-%d_%H%M%S"))
}
