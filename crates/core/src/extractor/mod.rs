//! HTML extraction of movie listings and format tables.
//!
//! The extractors are total over "page parses but the expected structure
//! is absent": a missing section or an element without the expected
//! sub-elements yields an empty (or smaller) result, never an error. The
//! HTML5 parser itself is error-tolerant, so there is no unparseable
//! document case to handle.

mod profiles;

pub use profiles::PageLayout;

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::catalog::{FormatTable, Listing, MovieId};

/// Extract movie listings from an index or search page.
///
/// The identifier is taken from the last path segment of each card's
/// link, never from free text. Cards without a link are skipped; cards
/// without a rating element come back with `rating: None` so the caller
/// can decide whether to keep them.
pub fn extract_listings(html: &str, layout: PageLayout) -> Vec<Listing> {
    let document = Html::parse_document(html);

    let Some(section) = document.select(layout.section()).next() else {
        debug!(?layout, "listing section not found");
        return Vec::new();
    };

    let mut listings = Vec::new();
    for item in section.select(&profiles::LISTING_ITEM) {
        let Some(anchor) = item.select(&profiles::LISTING_ANCHOR).next() else {
            continue;
        };
        let Some(movie) = movie_id_from_anchor(anchor) else {
            continue;
        };

        let rating = anchor
            .select(&profiles::LISTING_RATING)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty());

        listings.push(Listing { movie, rating });
    }

    debug!(?layout, count = listings.len(), "extracted listings");
    listings
}

/// Extract the format table from a movie page.
///
/// The page guarantees at most one format block; if it is absent the
/// table is empty, which callers treat as "no formats available".
pub fn extract_format_table(html: &str) -> FormatTable {
    let document = Html::parse_document(html);

    let Some(block) = document.select(PageLayout::MoviePage.section()).next() else {
        debug!("format block not found");
        return FormatTable::new();
    };

    let mut table = FormatTable::new();
    for link in block.select(&profiles::FORMAT_LINK) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let label = element_text(link);
        if label.is_empty() {
            continue;
        }
        table.insert(label, href);
    }

    debug!(formats = table.len(), "extracted format table");
    table
}

/// Identifier from the last path segment of the anchor's target URL.
fn movie_id_from_anchor(anchor: ElementRef<'_>) -> Option<MovieId> {
    let href = anchor.value().attr("href")?;
    let segment = href.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(MovieId::new(segment))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_extract_listings_home() {
        let listings = extract_listings(&fixtures::home_page(), PageLayout::Home);

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].movie.as_str(), "the-nun-2018");
        assert_eq!(listings[0].rating.as_deref(), Some("5.3 / 10"));
        assert_eq!(listings[1].movie.as_str(), "hereditary-2018");
        assert_eq!(listings[1].rating.as_deref(), Some("7.3 / 10"));
    }

    #[test]
    fn test_extract_listings_search_layout() {
        let listings = extract_listings(&fixtures::search_page(), PageLayout::Search);

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].movie.as_str(), "the-nun-2018");
        assert_eq!(listings[1].movie.as_str(), "the-conjuring-2013");
    }

    #[test]
    fn test_extract_listings_wrong_layout_is_empty() {
        // A home page queried with the search profile has no matching
        // section and yields nothing, not an error.
        let listings = extract_listings(&fixtures::home_page(), PageLayout::Search);
        assert!(listings.is_empty());
    }

    #[test]
    fn test_extract_listings_missing_rating_kept_as_none() {
        let listings =
            extract_listings(&fixtures::home_page_with_unrated_entry(), PageLayout::Home);

        assert_eq!(listings.len(), 3);
        let unrated: Vec<_> = listings.iter().filter(|l| l.rating.is_none()).collect();
        assert_eq!(unrated.len(), 1);
        assert_eq!(unrated[0].movie.as_str(), "promo-feature-2018");
    }

    #[test]
    fn test_extract_listings_trims_rating_text() {
        let html = r#"
            <div id="popular-downloads">
              <div class="browse-movie-wrap">
                <a href="https://yts.mx/movies/the-nun-2018">
                  <figure><figcaption><h4 class="rating">
                    5.3 / 10
                  </h4></figcaption></figure>
                </a>
              </div>
            </div>"#;
        let listings = extract_listings(html, PageLayout::Home);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].rating.as_deref(), Some("5.3 / 10"));
    }

    #[test]
    fn test_extract_listings_empty_document() {
        let listings = extract_listings("<html><body></body></html>", PageLayout::Home);
        assert!(listings.is_empty());
    }

    #[test]
    fn test_identifier_from_link_path_segment() {
        let html = r##"
            <div id="popular-downloads">
              <div class="browse-movie-wrap">
                <a href="https://yts.mx/movies/blade-runner-2049-2017/">
                  <figure><figcaption><h4 class="rating">8.0 / 10</h4></figcaption></figure>
                </a>
              </div>
            </div>"##;
        let listings = extract_listings(html, PageLayout::Home);
        assert_eq!(listings.len(), 1);
        // Trailing slash does not change the extracted segment.
        assert_eq!(listings[0].movie.as_str(), "blade-runner-2049-2017");
    }

    #[test]
    fn test_extract_format_table() {
        let table = extract_format_table(&fixtures::movie_page());

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get("720p.WEB"),
            Some("https://yts.mx/torrent/download/AAA720")
        );
        assert_eq!(
            table.get("1080p.WEB"),
            Some("https://yts.mx/torrent/download/BBB1080")
        );
        assert_eq!(
            table.get("720p.BluRay"),
            Some("https://yts.mx/torrent/download/CCCBR")
        );
    }

    #[test]
    fn test_extract_format_table_absent_block() {
        let table = extract_format_table(&fixtures::movie_page_without_formats());
        assert!(table.is_empty());
    }

    #[test]
    fn test_extract_format_table_skips_unlabeled_links() {
        let html = r#"
            <p class="hidden-xs hidden-sm">
              <a href="https://yts.mx/torrent/download/X">720p.WEB</a>
              <a href="https://yts.mx/torrent/download/Y">   </a>
            </p>"#;
        let table = extract_format_table(html);
        assert_eq!(table.len(), 1);
        assert!(table.contains("720p.WEB"));
    }
}
