//! Types for torrent acquisition.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::fetcher::FetchError;

/// Result of an acquisition attempt.
///
/// `AlreadyExists` and `FormatUnavailable` are normal outcomes, not
/// errors: the first signals idempotent behavior, the second a request
/// the movie's format table cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AcquireOutcome {
    /// The torrent was fetched and written to `file`.
    Downloaded { file: PathBuf },
    /// A torrent file for this movie is already on disk, left untouched.
    AlreadyExists { file: PathBuf },
    /// The requested format is not among the movie's formats.
    FormatUnavailable { format: String },
}

/// Errors that can occur while acquiring a torrent.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// Fetching the torrent payload failed; no file was created.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing the torrent file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
