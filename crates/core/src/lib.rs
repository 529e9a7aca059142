pub mod acquirer;
pub mod catalog;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod testing;

pub use acquirer::{AcquireError, AcquireOutcome, TorrentAcquirer};
pub use catalog::{CatalogError, FormatTable, Listing, MovieId, YtsCatalog};
pub use config::{
    load_config, load_config_from_str, CatalogConfig, Config, ConfigError, DownloadConfig,
    LauncherConfig,
};
pub use extractor::{extract_format_table, extract_listings, PageLayout};
pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
