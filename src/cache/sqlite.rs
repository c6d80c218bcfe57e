//! SQLite cache implementation
//!
//! This module provides a SQLite-based implementation of the ResponseCache trait.

use crate::cache::schema::initialize_schema;
use crate::cache::traits::{CacheResult, CachedEntry, ResponseCache};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite response cache
pub struct SqliteCache {
    conn: Connection,
    expire_after: Option<Duration>,
}

impl SqliteCache {
    /// Opens or creates the cache database at `path`
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    /// * `expire_after` - Maximum age of a usable entry; `None` keeps entries forever
    pub fn open(path: &Path, expire_after: Option<Duration>) -> CacheResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;
        initialize_schema(&conn)?;

        Ok(Self { conn, expire_after })
    }

    /// Creates an in-memory cache that lives as long as the value
    pub fn open_in_memory(expire_after: Option<Duration>) -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn, expire_after })
    }

    fn is_stale(&self, fetched_at: &str) -> bool {
        let Some(max_age) = self.expire_after else {
            return false;
        };

        match fetched_at.parse::<DateTime<Utc>>() {
            Ok(fetched) => Utc::now() - fetched > max_age,
            // Unreadable timestamps are refetched
            Err(_) => true,
        }
    }
}

impl ResponseCache for SqliteCache {
    fn get(&self, key: &str) -> CacheResult<Option<CachedEntry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT url, status, body, fetched_at FROM responses WHERE key = ?1",
                params![key],
                |row| {
                    Ok(CachedEntry {
                        url: row.get(0)?,
                        status: row.get(1)?,
                        body: row.get(2)?,
                        fetched_at: row.get(3)?,
                    })
                },
            )
            .optional()?;

        Ok(entry.filter(|e| !self.is_stale(&e.fetched_at)))
    }

    fn put(&mut self, key: &str, entry: &CachedEntry) -> CacheResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO responses (key, url, status, body, fetched_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![key, entry.url, entry.status, entry.body, entry.fetched_at],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> CacheResult<()> {
        self.conn.execute("DELETE FROM responses", [])?;
        Ok(())
    }

    fn len(&self) -> CacheResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM responses", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
