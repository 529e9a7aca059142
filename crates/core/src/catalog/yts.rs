//! YTS site client.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::CatalogConfig;
use crate::extractor::{extract_format_table, extract_listings, PageLayout};
use crate::fetcher::PageFetcher;

use super::{CatalogError, FormatTable, Listing, MovieId};

/// Catalog client for the YTS index site.
///
/// Each operation performs exactly one fetch and one extraction pass;
/// nothing is cached across calls.
pub struct YtsCatalog {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
}

impl YtsCatalog {
    /// Create a catalog over the given fetcher and configuration.
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: &CatalogConfig) -> Self {
        Self {
            fetcher,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Popular downloads from the site root, keyed by identifier.
    ///
    /// Entries without a rating are dropped during the collapse.
    pub async fn popular(&self) -> Result<HashMap<MovieId, String>, CatalogError> {
        let html = self.fetcher.fetch_text(&self.base_url).await?;
        let listings = extract_listings(&html, PageLayout::Home);
        Ok(collapse(listings))
    }

    /// Search the site for a free-text query, keyed by identifier.
    ///
    /// The query is passed through with standard URL path encoding;
    /// ordering and relevance come entirely from the site.
    pub async fn search(&self, query: &str) -> Result<HashMap<MovieId, String>, CatalogError> {
        let url = format!(
            "{}/browse-movies/{}",
            self.base_url,
            urlencoding::encode(query)
        );
        let html = self.fetcher.fetch_text(&url).await?;
        let listings = extract_listings(&html, PageLayout::Search);
        Ok(collapse(listings))
    }

    /// Available release formats for a movie.
    ///
    /// An HTTP error status on the movie page means the page does not
    /// exist and maps to [`CatalogError::PageNotFound`]; transport
    /// failures propagate unchanged. An empty table means the movie page
    /// lists no formats, which is not an error.
    pub async fn formats(&self, movie: &MovieId) -> Result<FormatTable, CatalogError> {
        let url = format!("{}/movies/{}", self.base_url, movie);
        let html = self.fetcher.fetch_text(&url).await.map_err(|e| {
            if e.is_status() {
                CatalogError::PageNotFound(movie.clone())
            } else {
                CatalogError::FetchFailed(e)
            }
        })?;
        Ok(extract_format_table(&html))
    }
}

/// Collapse listings into an identifier-to-rating map, omitting entries
/// without a rating. Last write wins on duplicate identifiers.
fn collapse(listings: Vec<Listing>) -> HashMap<MovieId, String> {
    let total = listings.len();
    let map: HashMap<MovieId, String> = listings
        .into_iter()
        .filter_map(|l| l.rating.map(|r| (l.movie, r)))
        .collect();

    if map.len() < total {
        debug!(
            dropped = total - map.len(),
            "dropped listings without rating"
        );
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;
    use crate::testing::{fixtures, MockFetcher};

    fn catalog(fetcher: Arc<MockFetcher>) -> YtsCatalog {
        let config = CatalogConfig {
            base_url: "https://yts.test".to_string(),
            ..CatalogConfig::default()
        };
        YtsCatalog::new(fetcher, &config)
    }

    #[tokio::test]
    async fn test_popular_collapses_by_identifier() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.route_text("https://yts.test", fixtures::home_page()).await;

        let popular = catalog(fetcher).popular().await.unwrap();

        assert_eq!(popular.len(), 2);
        assert_eq!(
            popular.get(&MovieId::new("the-nun-2018")).map(String::as_str),
            Some("5.3 / 10")
        );
    }

    #[tokio::test]
    async fn test_popular_drops_unrated_entries() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher
            .route_text("https://yts.test", fixtures::home_page_with_unrated_entry())
            .await;

        let popular = catalog(fetcher).popular().await.unwrap();

        // Three cards on the page, one without a rating element.
        assert_eq!(popular.len(), 2);
        assert!(!popular.contains_key(&MovieId::new("promo-feature-2018")));
    }

    #[tokio::test]
    async fn test_search_encodes_query_path_segment() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher
            .route_text(
                "https://yts.test/browse-movies/the%20nun",
                fixtures::search_page(),
            )
            .await;

        let results = catalog(fetcher.clone()).search("the nun").await.unwrap();

        assert_eq!(results.len(), 2);
        let requests = fetcher.recorded_requests().await;
        assert_eq!(requests, vec!["https://yts.test/browse-movies/the%20nun"]);
    }

    #[tokio::test]
    async fn test_search_no_results_is_empty_not_error() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher
            .route_text(
                "https://yts.test/browse-movies/zzz",
                "<html><body><section><div class=\"row\"></div></section></body></html>",
            )
            .await;

        let results = catalog(fetcher).search("zzz").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_formats_for_existing_movie() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher
            .route_text(
                "https://yts.test/movies/the-nun-2018",
                fixtures::movie_page(),
            )
            .await;

        let table = catalog(fetcher)
            .formats(&MovieId::new("the-nun-2018"))
            .await
            .unwrap();

        assert!(!table.is_empty());
        assert!(table.contains("720p.WEB"));
    }

    #[tokio::test]
    async fn test_formats_http_error_maps_to_page_not_found() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.route_status("https://yts.test/movies/nope-1999", 404).await;

        let err = catalog(fetcher)
            .formats(&MovieId::new("nope-1999"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::PageNotFound(ref m) if m.as_str() == "nope-1999"));
    }

    #[tokio::test]
    async fn test_formats_transport_error_stays_fetch_failed() {
        let fetcher = Arc::new(MockFetcher::new());
        // No route registered: the mock reports a transport failure.

        let err = catalog(fetcher)
            .formats(&MovieId::new("the-nun-2018"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::FetchFailed(_)));
    }
}
