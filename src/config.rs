//! Run configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an optional
//! YAML file, and CLI flags or environment variables (see [`crate::cli`]).
//!
//! ```yaml
//! listing_url: https://news.ycombinator.com/newest
//! expected_item_count: 100
//! staleness_threshold_minutes: 5
//! max_pages: 5
//! ```

use crate::error::ConfigError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

/// Page the harness validates when none is configured.
pub const DEFAULT_LISTING_URL: &str = "https://news.ycombinator.com/newest";

/// Settings shared by the page adapter and the validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// First page of the listing.
    pub listing_url: String,
    /// Number of items a sorting check requires before it scans.
    pub expected_item_count: usize,
    /// Maximum allowed item age before it is reported as stale.
    pub staleness_threshold_minutes: u64,
    /// Upper bound on listing pages followed while collecting items.
    pub max_pages: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            expected_item_count: 100,
            staleness_threshold_minutes: 5,
            max_pages: 5,
        }
    }
}

impl ValidationConfig {
    /// The staleness threshold as a signed duration for instant arithmetic.
    pub fn staleness_threshold(&self) -> TimeDelta {
        i64::try_from(self.staleness_threshold_minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .unwrap_or(TimeDelta::MAX)
    }

    /// Read a YAML config file. Fields missing from the file keep their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
        let config = Self::from_yaml(&raw)?;
        info!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    /// Reject settings that would make every run meaningless.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.expected_item_count == 0 {
            return Err(ConfigError::Invalid(
                "expected_item_count must be at least 1".to_string(),
            ));
        }
        if self.max_pages == 0 {
            return Err(ConfigError::Invalid("max_pages must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.expected_item_count, 100);
        assert_eq!(config.staleness_threshold(), TimeDelta::minutes(5));
        assert_eq!(config.listing_url, DEFAULT_LISTING_URL);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ValidationConfig::from_yaml("staleness_threshold_minutes: 15\n").unwrap();
        assert_eq!(config.staleness_threshold_minutes, 15);
        assert_eq!(config.expected_item_count, 100);
        assert_eq!(config.max_pages, 5);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ValidationConfig::from_yaml("  \n").unwrap(),
            ValidationConfig::default()
        );
    }

    #[test]
    fn test_zero_expected_count_rejected() {
        let err = ValidationConfig::from_yaml("expected_item_count: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = ValidationConfig::from_yaml("expected_item_count: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_huge_threshold_saturates() {
        let config = ValidationConfig {
            staleness_threshold_minutes: u64::MAX,
            ..Default::default()
        };
        assert_eq!(config.staleness_threshold(), TimeDelta::MAX);
    }
}
