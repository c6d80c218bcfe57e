//! Page fetcher
//!
//! Wraps `Session::get` with failure classification and logging. A transport
//! failure is logged and reported as `None`; callers decide what a missing
//! page means for them.

use crate::http::session::{Response, Session};

/// Fetches `url` through the session
///
/// # Returns
///
/// * `Some(Response)` - A response was received (any status); its text is
///   always decoded as UTF-8
/// * `None` - The request failed at the transport level; the error has
///   already been logged
pub async fn get_response(session: &mut Session, url: &str) -> Option<Response> {
    match session.get(url).await {
        Ok(response) => {
            if !response.is_success() {
                tracing::warn!("Got HTTP {} while loading page {}", response.status, url);
            }
            Some(response)
        }
        Err(e) => {
            tracing::error!(
                "Error while loading page {} ({}): {:?}",
                url,
                classify_error(&e),
                e
            );
            None
        }
    }
}

/// Short human-readable class for a transport error
pub fn classify_error(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "request timeout"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_redirect() {
        "redirect error"
    } else if error.is_body() || error.is_decode() {
        "body read failed"
    } else {
        "request failed"
    }
}
