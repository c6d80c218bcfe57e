//! Configuration module for the scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section has a default, so the scraper runs against the real Python
//! sites without any file at all.
//!
//! # Example
//!
//! ```no_run
//! use pydoc_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("PEP index: {}", config.urls.main_pep_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{default_expected_status, Config, HttpConfig, OutputConfig, UrlsConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
