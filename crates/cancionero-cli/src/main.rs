use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use cancionero_engine::{Config, QueryEngine, Request};

mod commands;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "cancionero", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog CSV (default: ~/.local/share/cancionero/datos_procesados.csv)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print results as JSON instead of a listing
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Find songs by exact name or by artist
    ///
    /// The name must match a song title exactly, ignoring case. Any song
    /// whose artist list contains the text also matches. Results are
    /// ordered newest first.
    Find {
        /// Song name or artist
        name: String,
    },
    /// List the most popular songs
    Popular {
        /// Number of songs (default from config)
        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Autocomplete song names and artists
    Suggest {
        /// At least two characters
        query: String,

        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Songs for a mood
    ///
    /// Accepts Spanish or English synonyms, e.g. calma, ansiedad, triste,
    /// feliz, energía, focus, relax, sad, happy. Unknown moods list the
    /// most popular songs instead.
    Mood {
        mood: String,

        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Songs with a musical feature
    ///
    /// One of: recent, danceable, acoustic, high-energy, instrumental,
    /// live, speech. Unknown features list the most popular songs instead.
    Feature {
        feature: String,

        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Recommend songs similar to the song at INDEX
    ///
    /// Neighbors are searched within the song's cluster, or across the
    /// whole catalog when the cluster is small. The distance shown is the
    /// raw Euclidean distance over normalized features; lower is closer.
    Recommend {
        /// Catalog index, as shown by the other commands
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Show catalog status
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match cli.catalog {
        Some(path) => Config::load_with_catalog_path(path)?,
        None => Config::load()?,
    };
    logging::init(&config.logging, cli.json)?;
    log::debug!(
        "Using config file {} (reference year {})",
        cancionero_engine::config::config_file_path().display(),
        config.reference_year
    );

    let request = match cli.command {
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::show_config(&config),
                ConfigAction::Path => commands::config::show_path(),
                ConfigAction::Example => commands::config::show_example(),
                ConfigAction::Init => commands::config::init_config(),
            }?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Status => {
            let engine = load_engine(&config)?;
            commands::show_status(&engine, cli.json)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Find { name } => Request::FindSongs { name },
        Commands::Popular { limit } => Request::PopularSongs { limit },
        Commands::Suggest { query, limit } => Request::SearchSuggestions { query, limit },
        Commands::Mood { mood, limit } => Request::SongsByMood { mood, limit },
        Commands::Feature { feature, limit } => Request::SongsByFeature { feature, limit },
        Commands::Recommend { index } => Request::Recommendations { song_index: index },
    };

    let engine = load_engine(&config)?;
    commands::run_query(&engine, request, cli.json)
}

fn load_engine(config: &Config) -> Result<QueryEngine> {
    log::debug!("Loading catalog from {}", config.catalog_path.display());
    QueryEngine::from_config(config).with_context(|| {
        format!(
            "Failed to load catalog from {}",
            config.catalog_path.display()
        )
    })
}
