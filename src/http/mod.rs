//! HTTP layer: the caching session and the page fetcher

mod fetcher;
mod session;

pub use fetcher::{classify_error, get_response};
pub use session::{build_http_client, Response, Session};

use crate::cache::SqliteCache;
use crate::config::Config;
use crate::{ConfigError, Result};

/// Opens the on-disk cache described by `config` and builds a session around it
pub fn open_session(config: &Config) -> Result<Session> {
    let client = build_http_client(&config.http)?;

    let expire_after = match config.http.cache_expire_after_secs {
        Some(secs) => Some(chrono::Duration::try_seconds(secs).ok_or_else(|| {
            ConfigError::Validation(format!(
                "cache_expire_after_secs is out of range, got {}",
                secs
            ))
        })?),
        None => None,
    };
    let cache = SqliteCache::open(&config.cache_path(), expire_after)?;

    Ok(Session::new(client, Some(Box::new(cache))))
}
