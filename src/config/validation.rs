use crate::config::types::{Config, HttpConfig, OutputConfig, UrlsConfig};
use crate::{ConfigError, ConfigResult};
use chrono::format::{Item, StrftimeItems};
use std::collections::BTreeMap;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_urls_config(&config.urls)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    validate_expected_status(&config.expected_status)?;
    Ok(())
}

/// Validates the source page URLs
fn validate_urls_config(config: &UrlsConfig) -> ConfigResult<()> {
    validate_base_url("main_doc_url", &config.main_doc_url)?;
    validate_base_url("main_pep_url", &config.main_pep_url)?;
    Ok(())
}

/// A base URL must be absolute http(s) and end with a slash, otherwise
/// relative joins drop its last path segment
fn validate_base_url(name: &str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            name, value
        )));
    }

    if !url.path().ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must end with '/'",
            name, value
        )));
    }

    Ok(())
}

/// Validates HTTP configuration
fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.cache_path.is_empty() {
        return Err(ConfigError::Validation(
            "cache_path cannot be empty".to_string(),
        ));
    }

    if let Some(secs) = config.cache_expire_after_secs {
        if secs < 0 {
            return Err(ConfigError::Validation(format!(
                "cache_expire_after_secs must be >= 0, got {}",
                secs
            )));
        }
        if chrono::Duration::try_seconds(secs).is_none() {
            return Err(ConfigError::Validation(format!(
                "cache_expire_after_secs is out of range, got {}",
                secs
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.base_dir.is_empty() {
        return Err(ConfigError::Validation(
            "base_dir cannot be empty".to_string(),
        ));
    }

    if config.datetime_format.is_empty() {
        return Err(ConfigError::Validation(
            "datetime_format cannot be empty".to_string(),
        ));
    }

    if StrftimeItems::new(&config.datetime_format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Validation(format!(
            "datetime_format '{}' is not a valid strftime format",
            config.datetime_format
        )));
    }

    Ok(())
}

/// Validates the abbreviation -> expected statuses table
fn validate_expected_status(table: &BTreeMap<String, Vec<String>>) -> ConfigResult<()> {
    if table.is_empty() {
        return Err(ConfigError::Validation(
            "expected_status table cannot be empty".to_string(),
        ));
    }

    for (abbreviation, statuses) in table {
        if abbreviation.chars().count() > 1 {
            return Err(ConfigError::Validation(format!(
                "Status abbreviation '{}' must be empty or a single character",
                abbreviation
            )));
        }

        if statuses.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Status abbreviation '{}' must map to at least one status",
                abbreviation
            )));
        }

        if statuses.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Status abbreviation '{}' maps to an empty status",
                abbreviation
            )));
        }
    }

    Ok(())
}
