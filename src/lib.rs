//! Pydoc-Scraper: a scraper for the Python documentation site and PEP index
//!
//! This crate fetches pages from docs.python.org and peps.python.org and turns
//! them into result tables: "what's new" articles, documentation versions, PEP
//! status tallies. It can also download the A4 PDF documentation archive.

pub mod cache;
pub mod config;
pub mod html;
pub mod http;
pub mod output;
pub mod parsers;
pub mod progress;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Empty response while loading {url}")]
    EmptyResponse { url: String },

    #[error("Tag not found: {tag} {attrs}")]
    TagNotFound { tag: String, attrs: String },

    #[error("Tag {tag} has no '{attr}' attribute")]
    MissingAttribute { tag: String, attr: String },

    #[error("Python versions list not found")]
    PythonVersionsNotFound,

    #[error("Unknown PEP status abbreviation '{abbreviation}' in row {row}")]
    UnknownStatusAbbreviation { abbreviation: String, row: String },

    #[error("Cache error: {0}")]
    Cache(#[from] cache::CacheError),

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

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use output::{ResultTable, StatusTally};
pub use parsers::{run_mode, Mode};
