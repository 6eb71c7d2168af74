//! doc-census: a documentation status auditor
//!
//! This crate crawls a proposal index and its documentation site,
//! extracts structured facts from their HTML and produces tabular reports.
//! The centrepiece is the status reconciliation in [`status`], which checks
//! every indexed document's declared status against the statuses expected
//! for its category.

pub mod config;
pub mod crawler;
pub mod docs;
pub mod modes;
pub mod output;
pub mod status;
pub mod storage;

use thiserror::Error;

/// Main error type for doc-census operations
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Page structure error: {0}")]
    Parse(#[from] ParseError),

    #[error("Cache error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Structural errors raised while reading a page that did load.
///
/// Any of these means the site's markup no longer matches what the parsers
/// expect. They are never skipped: the run aborts so that no aggregate is
/// built from half-understood pages.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No element matches `{selector}` on {location}")]
    TagNotFound { selector: String, location: String },

    #[error("<{tag}> has no {direction} sibling element on {location}")]
    SiblingNotFound {
        tag: String,
        direction: crawler::Direction,
        location: String,
    },

    #[error("Invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("<{tag}> is missing its `{attribute}` attribute on {location}")]
    MissingAttribute {
        tag: String,
        attribute: String,
        location: String,
    },

    #[error("Cannot resolve link `{href}` found on {location}: {source}")]
    InvalidLink {
        href: String,
        location: String,
        source: ::url::ParseError,
    },

    #[error("Malformed category cell `{text}` on {location}: {reason}")]
    MalformedCategory {
        text: String,
        location: String,
        reason: String,
    },

    #[error("No version list found in the sidebar of {location}")]
    VersionListNotFound { location: String },
}

/// Result type alias for doc-census operations
pub type Result<T> = std::result::Result<T, CensusError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for page parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Fetcher, HttpFetcher, Page};
pub use modes::{run_mode, Mode};
pub use output::Table;
pub use status::{CategoryKey, Discrepancy, ExpectedStatusTable, StatusReport};
