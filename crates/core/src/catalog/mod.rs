//! Movie catalog: read operations against the source site.
//!
//! Composes the page fetcher and the markup extractor into the three
//! lookups the CLI exposes: popular downloads, free-text search, and the
//! format table of a single movie.

mod types;
mod yts;

pub use types::{FormatTable, Listing, MovieId};
pub use yts::YtsCatalog;

use thiserror::Error;

use crate::fetcher::FetchError;

/// Errors that can occur during catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A page fetch failed at the network level.
    #[error(transparent)]
    FetchFailed(#[from] FetchError),

    /// The movie page does not exist; usually a wrong identifier.
    #[error("no movie page for '{0}', check the identifier (title-year, e.g. the-nun-2018)")]
    PageNotFound(MovieId),
}
