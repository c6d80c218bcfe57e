//! Cache traits and error types
//!
//! This module defines the trait interface for response cache backends and
//! associated error types.

use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// A response body stored in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedEntry {
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
    /// RFC 3339 timestamp of the original fetch
    pub fetched_at: String,
}

/// Trait for response cache backends
pub trait ResponseCache {
    /// Looks up a fresh entry by cache key
    ///
    /// Entries past the backend's expiry are reported as misses.
    fn get(&self, key: &str) -> CacheResult<Option<CachedEntry>>;

    /// Inserts or replaces the entry for `key`
    fn put(&mut self, key: &str, entry: &CachedEntry) -> CacheResult<()>;

    /// Removes every stored response
    fn clear(&mut self) -> CacheResult<()>;

    /// Number of stored responses, stale ones included
    fn len(&self) -> CacheResult<u64>;

    fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.len()? == 0)
    }
}
