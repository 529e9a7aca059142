//! Idempotent torrent-file acquisition.
//!
//! Given a movie's format table and a desired format, fetches the
//! torrent payload and persists it exactly once under the storage root.
//! Local state is checked before any network call so a repeat request
//! never refetches. The check-then-write sequence is not atomic against
//! other processes; within a single invocation there is no concurrency.

mod types;

pub use types::{AcquireError, AcquireOutcome};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tracing::{debug, info};

use crate::catalog::{FormatTable, MovieId};
use crate::fetcher::PageFetcher;

/// Downloads torrent files to a storage root, refusing to overwrite.
pub struct TorrentAcquirer {
    fetcher: Arc<dyn PageFetcher>,
    storage_root: PathBuf,
}

impl TorrentAcquirer {
    /// Create an acquirer writing into `storage_root`.
    pub fn new(fetcher: Arc<dyn PageFetcher>, storage_root: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            storage_root: storage_root.into(),
        }
    }

    /// Directory torrent files are written to.
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Acquire the torrent for `movie` in the `desired` format.
    ///
    /// Checks run in order, cheapest first: format membership, then
    /// local file existence, then the fetch. On success the response
    /// body is written verbatim as `<identifier>.torrent`; a fetch
    /// failure leaves no file behind.
    pub async fn acquire(
        &self,
        movie: &MovieId,
        formats: &FormatTable,
        desired: &str,
    ) -> Result<AcquireOutcome, AcquireError> {
        let Some(url) = formats.get(desired) else {
            debug!(movie = %movie, format = desired, "format not in table");
            return Ok(AcquireOutcome::FormatUnavailable {
                format: desired.to_string(),
            });
        };

        let file = self.storage_root.join(movie.torrent_file_name());
        if fs::try_exists(&file).await.unwrap_or(false) {
            debug!(file = %file.display(), "torrent already on disk");
            return Ok(AcquireOutcome::AlreadyExists { file });
        }

        // Make sure the destination is writable before spending a fetch.
        fs::create_dir_all(&self.storage_root)
            .await
            .map_err(|e| AcquireError::Io {
                path: self.storage_root.clone(),
                source: e,
            })?;

        let payload = self.fetcher.fetch_bytes(url).await?;

        fs::write(&file, &payload)
            .await
            .map_err(|e| AcquireError::Io {
                path: file.clone(),
                source: e,
            })?;

        info!(
            movie = %movie,
            format = desired,
            bytes = payload.len(),
            file = %file.display(),
            "torrent downloaded"
        );
        Ok(AcquireOutcome::Downloaded { file })
    }
}
