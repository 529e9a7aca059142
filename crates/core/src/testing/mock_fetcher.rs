//! Mock page fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fetcher::{FetchError, PageFetcher};

/// Canned response for a routed URL.
#[derive(Debug, Clone)]
enum Routed {
    Text(String),
    Bytes(Vec<u8>),
    Status(u16),
}

/// Mock implementation of [`PageFetcher`].
///
/// Provides controllable behavior for testing:
/// - route URLs to canned text or byte bodies
/// - route URLs to HTTP error statuses
/// - record every fetched URL for call-count assertions
/// - inject a one-shot error ahead of the routing table
#[derive(Debug, Default)]
pub struct MockFetcher {
    routes: Arc<RwLock<HashMap<String, Routed>>>,
    requests: Arc<RwLock<Vec<String>>>,
    next_error: Arc<RwLock<Option<FetchError>>>,
}

impl MockFetcher {
    /// Create a mock with no routes; every fetch fails as a transport
    /// error until a route is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` as text for `url`.
    pub async fn route_text(&self, url: impl Into<String>, body: impl Into<String>) {
        self.routes
            .write()
            .await
            .insert(url.into(), Routed::Text(body.into()));
    }

    /// Serve `body` as bytes for `url`.
    pub async fn route_bytes(&self, url: impl Into<String>, body: Vec<u8>) {
        self.routes
            .write()
            .await
            .insert(url.into(), Routed::Bytes(body));
    }

    /// Answer `url` with an HTTP error status.
    pub async fn route_status(&self, url: impl Into<String>, status: u16) {
        self.routes
            .write()
            .await
            .insert(url.into(), Routed::Status(status));
    }

    /// Fail the next fetch with `error`, regardless of routing.
    pub async fn fail_next(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// URLs fetched so far, in order.
    pub async fn recorded_requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    async fn lookup(&self, url: &str) -> Result<Routed, FetchError> {
        self.requests.write().await.push(url.to_string());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        match self.routes.read().await.get(url) {
            Some(Routed::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            Some(routed) => Ok(routed.clone()),
            None => Err(FetchError::Transport {
                url: url.to_string(),
                reason: "no route configured".to_string(),
            }),
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        match self.lookup(url).await? {
            Routed::Text(body) => Ok(body),
            Routed::Bytes(body) => Ok(String::from_utf8_lossy(&body).into_owned()),
            Routed::Status(_) => unreachable!("lookup maps statuses to errors"),
        }
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        match self.lookup(url).await? {
            Routed::Text(body) => Ok(body.into_bytes()),
            Routed::Bytes(body) => Ok(body),
            Routed::Status(_) => unreachable!("lookup maps statuses to errors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_routes_and_records() {
        let fetcher = MockFetcher::new();
        fetcher.route_text("https://a", "body").await;

        assert_eq!(fetcher.fetch_text("https://a").await.unwrap(), "body");
        assert!(fetcher.fetch_text("https://b").await.is_err());
        assert_eq!(
            fetcher.recorded_requests().await,
            vec!["https://a", "https://b"]
        );
    }

    #[tokio::test]
    async fn test_fail_next_is_one_shot() {
        let fetcher = MockFetcher::new();
        fetcher.route_text("https://a", "body").await;
        fetcher
            .fail_next(FetchError::Status {
                url: "https://a".to_string(),
                status: 500,
            })
            .await;

        assert!(fetcher.fetch_text("https://a").await.is_err());
        assert_eq!(fetcher.fetch_text("https://a").await.unwrap(), "body");
    }
}
