mod launcher;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yts_core::{
    load_config, AcquireOutcome, HttpFetcher, MovieId, PageFetcher, TorrentAcquirer, YtsCatalog,
};

/// Command line client for YTS movie torrents.
#[derive(Debug, Parser)]
#[command(name = "yts", version, about)]
struct Cli {
    /// Path to the configuration file (default: $YTS_CONFIG, else built-in defaults).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show popular downloads from the site root.
    Popular,
    /// Search movies by free-text query.
    Search {
        /// Search query, e.g. "the nun".
        query: String,
    },
    /// List available release formats for a movie.
    Formats {
        /// Movie identifier, title-year (e.g. the-nun-2018).
        movie: String,
    },
    /// Download the torrent for a movie in the given format.
    Download {
        /// Movie identifier, title-year (e.g. the-nun-2018).
        movie: String,
        /// Release format label, e.g. 720p.WEB.
        format: String,
        /// Hand the downloaded file to the configured torrent client.
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| std::env::var("YTS_CONFIG").ok().map(PathBuf::from));
    let config = load_config(config_path.as_deref()).context("failed to load configuration")?;

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(config.catalog.timeout_secs));
    let catalog = YtsCatalog::new(fetcher.clone(), &config.catalog);

    match cli.command {
        Command::Popular => {
            let movies = catalog.popular().await?;
            print_listings("Popular Downloads:", &movies);
        }
        Command::Search { query } => {
            let movies = catalog.search(&query).await?;
            print_listings("Movies Found:", &movies);
        }
        Command::Formats { movie } => {
            let movie = MovieId::new(movie);
            let formats = catalog.formats(&movie).await?;
            if formats.is_empty() {
                println!("No formats available for {}", movie);
            } else {
                println!("Available In:");
                let mut labels: Vec<_> = formats.labels().collect();
                labels.sort_unstable();
                for label in labels {
                    println!("\t{}", label);
                }
            }
        }
        Command::Download {
            movie,
            format,
            open,
        } => {
            let movie = MovieId::new(movie);
            let formats = catalog.formats(&movie).await?;
            let acquirer = TorrentAcquirer::new(fetcher, config.download.directory.clone());

            match acquirer.acquire(&movie, &formats, &format).await? {
                AcquireOutcome::Downloaded { file } => {
                    println!("Downloaded {}", file.display());
                    if open {
                        launcher::launch(&config.launcher, &file);
                    }
                }
                AcquireOutcome::AlreadyExists { file } => {
                    println!("{} already exists, not downloading again", file.display());
                    if open {
                        launcher::launch(&config.launcher, &file);
                    }
                }
                AcquireOutcome::FormatUnavailable { format } => {
                    anyhow::bail!("{} format not available for {}", format, movie);
                }
            }
        }
    }

    Ok(())
}

fn print_listings(header: &str, movies: &HashMap<MovieId, String>) {
    if movies.is_empty() {
        println!("No movies found");
        return;
    }

    info!(count = movies.len(), "listing movies");
    println!("{}", header);
    let mut entries: Vec<_> = movies.iter().collect();
    entries.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
    for (movie, rating) in entries {
        println!("\t{} ({})", movie, rating);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_download_subcommand_args() {
        let cli = Cli::parse_from(["yts", "download", "the-nun-2018", "720p.WEB", "--open"]);
        match cli.command {
            Command::Download {
                movie,
                format,
                open,
            } => {
                assert_eq!(movie, "the-nun-2018");
                assert_eq!(format, "720p.WEB");
                assert!(open);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_subcommand_args() {
        let cli = Cli::parse_from(["yts", "search", "the nun"]);
        match cli.command {
            Command::Search { query } => assert_eq!(query, "the nun"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_exactly_one_subcommand_required() {
        assert!(Cli::try_parse_from(["yts"]).is_err());
    }
}
