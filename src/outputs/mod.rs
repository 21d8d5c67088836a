//! Output generation for run reports.
//!
//! - [`json`]: writes one [`RunReport`](crate::models::RunReport) per run
//!
//! Reports are never read back or merged; each run stands alone.

pub mod json;
