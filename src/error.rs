//! Error types for the validation core and its collaborators.
//!
//! Only [`ValidationError`] ever reaches a validator's caller. Accessor and
//! fetch failures are either recovered per item or surfaced to the binary.

use thiserror::Error;

/// Structural problems with the input handed to a validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The item collection was empty or otherwise unusable as a sequence.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// A failed read through an [`ItemAccessor`](crate::accessor::ItemAccessor).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The element backing this item is no longer reachable (e.g. the page navigated away).
    #[error("item is no longer available: {0}")]
    Detached(String),
    /// The requested sub-element does not exist on this item.
    #[error("element not found: {0}")]
    MissingElement(&'static str),
}

/// Failures while retrieving or parsing the listing pages.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid selector: {0}")]
    Selector(String),
    #[error("listing at {0} contained no items")]
    EmptyListing(String),
}

/// Problems loading or checking the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
