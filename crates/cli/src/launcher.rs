//! Fire-and-forget handoff to an external torrent client.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use yts_core::LauncherConfig;

/// Spawn the configured torrent client with the downloaded file.
///
/// The child is not waited on and its failures are not observed beyond
/// the spawn itself; a missing binary is logged, not fatal.
pub fn launch(config: &LauncherConfig, torrent_file: &Path) {
    match Command::new(&config.command).arg(torrent_file).spawn() {
        Ok(child) => {
            info!(
                command = %config.command,
                pid = child.id(),
                file = %torrent_file.display(),
                "torrent client launched"
            );
        }
        Err(e) => {
            warn!(
                command = %config.command,
                error = %e,
                "failed to launch torrent client"
            );
            eprintln!("warning: could not launch {}: {}", config.command, e);
        }
    }
}
