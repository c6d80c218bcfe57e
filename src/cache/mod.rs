//! On-disk HTTP response cache
//!
//! Successful GET responses are kept in a SQLite database keyed by a hash of
//! the request, so repeated runs against unchanged pages do not hit the network.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteCache;
pub use traits::{CacheError, CacheResult, CachedEntry, ResponseCache};

use sha2::{Digest, Sha256};

/// Computes the cache key for a GET of `url`
///
/// Hex-encoded SHA-256 of the method and URL.
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"GET ");
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
