//! Helpers shared by the reqwest-backed adapters.

use std::time::Duration;

use reqwest::{Client, Url};

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Build a client that gives up after `timeout`.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub(crate) fn client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("brunch-backend/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Append path segments to `base`, keeping any path it already has.
///
/// Segments are percent-encoded. An empty final segment yields a trailing
/// slash. Returns `None` for URLs that cannot carry a path.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url)
}

/// Whitespace-collapsed, truncated view of a response body for logs.
pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        preview.push_str("...");
    }
    preview
}
