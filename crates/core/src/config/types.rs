use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
///
/// Every section has defaults; the CLI works with no config file at all.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub download: DownloadConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// Source-site configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL of the index site.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://yts.mx".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Where downloaded torrent files are stored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadConfig {
    /// Storage root for `.torrent` files (default: working directory).
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

/// External torrent-client launcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LauncherConfig {
    /// Command to hand the downloaded file to.
    #[serde(default = "default_command")]
    pub command: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}

fn default_command() -> String {
    "transmission-gtk".to_string()
}
