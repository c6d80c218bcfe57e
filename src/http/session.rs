//! Caching HTTP session
//!
//! A `Session` owns the reqwest client and, optionally, a response cache. It is
//! created once per run and passed by `&mut` to every extractor.

use crate::cache::{cache_key, CacheError, CachedEntry, ResponseCache};
use crate::config::HttpConfig;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

/// A fetched page
#[derive(Debug, Clone)]
pub struct Response {
    /// Final URL after redirects (the requested URL for cache hits)
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
    /// Whether the body came from the cache instead of the network
    pub from_cache: bool,
}

impl Response {
    /// Decodes the body as UTF-8, whatever the server declared
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// HTTP session with an optional response cache
pub struct Session {
    client: Client,
    cache: Option<Box<dyn ResponseCache>>,
}

impl Session {
    pub fn new(client: Client, cache: Option<Box<dyn ResponseCache>>) -> Self {
        Self { client, cache }
    }

    /// Session that always goes to the network
    pub fn uncached(client: Client) -> Self {
        Self::new(client, None)
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// GETs `url`, serving it from the cache when possible
    ///
    /// Only `200 OK` responses are stored. Cache failures are logged and
    /// otherwise ignored; the network response is still returned.
    pub async fn get(&mut self, url: &str) -> Result<Response, reqwest::Error> {
        let key = cache_key(url);

        if let Some(cache) = &self.cache {
            match cache.get(&key) {
                Ok(Some(entry)) => {
                    tracing::debug!("Cache hit: {}", url);
                    return Ok(Response {
                        url: entry.url,
                        status: entry.status,
                        body: entry.body,
                        from_cache: true,
                    });
                }
                Ok(None) => tracing::trace!("Cache miss: {}", url),
                Err(e) => tracing::warn!("Cache lookup failed for {}: {}", url, e),
            }
        }

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        if status == 200 {
            if let Some(cache) = &mut self.cache {
                let entry = CachedEntry {
                    url: url.to_string(),
                    status,
                    body: body.clone(),
                    fetched_at: Utc::now().to_rfc3339(),
                };
                if let Err(e) = cache.put(&key, &entry) {
                    tracing::warn!("Failed to cache response for {}: {}", url, e);
                }
            }
        }

        Ok(Response {
            url: final_url,
            status,
            body,
            from_cache: false,
        })
    }

    /// GETs `url` bypassing the cache and returns the raw body
    ///
    /// Non-success statuses are errors.
    pub async fn get_uncached(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Drops every cached response
    pub fn clear_cache(&mut self) -> Result<(), CacheError> {
        if let Some(cache) = &mut self.cache {
            cache.clear()?;
        }
        Ok(())
    }
}
