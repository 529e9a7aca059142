//! Page fetching abstraction.
//!
//! Everything the engine reads over the network goes through the
//! [`PageFetcher`] trait: listing pages, movie pages and the torrent
//! payload itself. Each fetch is a single attempt with no retry; the
//! caller decides what a failure means.

mod http;

pub use http::HttpFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, timeout).
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// Whether this failure carries an HTTP error status (as opposed to
    /// a transport failure that never produced a response).
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status { .. })
    }
}

/// Resolves a URL to a response body or fails.
///
/// Callers must not inspect partial bodies on error; a failed fetch
/// yields no data at all.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a URL and return its body as text (HTML pages).
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch a URL and return its body as raw bytes (torrent payloads).
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
