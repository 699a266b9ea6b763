//! Crawsan: a concurrent command-line web crawler
//!
//! This crate fetches a list of seed URLs, reports on each page (HTTP status
//! or selector-driven extraction) and optionally follows discovered links up
//! to a bounded depth, visiting every distinct URL at most once per run.

pub mod config;
pub mod crawler;
pub mod output;

use std::fmt;
use thiserror::Error;

/// Main error type for Crawsan operations
#[derive(Debug, Error)]
pub enum CrawsanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Crawl(#[from] MultipleErrors),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading or creating the persisted configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

/// Invalid processor options, detected before any fetch begins
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid pick-type '{0}'. please set 'text' or 'attr'")]
    InvalidPickMode(String),

    #[error("if you set selector option, please set pick-type option too")]
    SelectorWithoutPickMode,

    #[error("if you set 'attr' to pick-type option, please set attribute")]
    AttrWithoutAttribute,

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Category of a transport-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request exceeded the configured timeout
    Timeout,
    /// DNS failure, connection refused, TLS handshake failure
    Connect,
    /// Redirect loop or too many redirects
    Redirect,
    /// The response body could not be read
    Body,
    /// The URL could not be turned into a request
    InvalidUrl,
    /// Any other transport failure
    Request,
}

/// A failed fetch of one URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Get \"{url}\": {message}")]
pub struct FetchError {
    pub url: String,
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Every fetch failure of a crawl run, in the order they were recorded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipleErrors {
    errors: Vec<FetchError>,
}

impl MultipleErrors {
    pub fn new(errors: Vec<FetchError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FetchError] {
        &self.errors
    }

    /// Converts the collection into a run result: failed iff non-empty
    pub fn into_result(self) -> std::result::Result<(), MultipleErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for MultipleErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultipleErrors {}

/// Result type alias for Crawsan operations
pub type Result<T> = std::result::Result<T, CrawsanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{ConfigFile, PickMode, ProcessorKind, RunConfig};
pub use crawler::{Crawler, FetchResult};
pub use output::{PageProcessor, SelectorReporter, StatusReporter};
