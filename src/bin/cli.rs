//! Book Finder CLI
//!
//! Text shell over the search and favorites state.

use std::path::PathBuf;

use bookfinder::{
    display,
    error::Result,
    models::Config,
    services::GoogleBooksClient,
    state::{FavoritesStore, SearchState},
    storage::LocalStorage,
};
use clap::{Parser, Subcommand};

/// bookfinder - search books and keep a reading list
#[derive(Parser, Debug)]
#[command(
    name = "bookfinder",
    version,
    about = "Search books and keep a reading list"
)]
struct Cli {
    /// Directory holding config.toml and the reading list
    #[arg(short, long, default_value = ".bookfinder")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for books, authors, or genres
    Search {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Number of result pages to fetch
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },

    /// Add a book to the reading list, or remove it if already there
    Favorite {
        /// Book id as shown on a result card
        id: String,
    },

    /// List the reading list
    Favorites,

    /// Validate configuration files
    Validate,

    /// Show storage and configuration info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    log::debug!("Loaded configuration from {}", cli.storage_dir.display());

    let storage = LocalStorage::new(&cli.storage_dir);

    match cli.command {
        Command::Search { query, pages } => {
            let query = query.join(" ");
            config.ensure_valid(&config_path)?;
            let favorites = FavoritesStore::load(storage, &config.storage.favorites_key);
            let client = GoogleBooksClient::new(config.api.clone())?;
            let mut state = SearchState::new(client, config.api.page_size);

            state.search(&query).await;
            let mut fetched = 1;
            while fetched < pages && state.can_load_more() && state.error().is_none() {
                state.load_more(&query).await;
                fetched += 1;
            }

            if let Some(error) = state.error() {
                println!("{error}. Please try again.");
            }
            if state.has_searched() && state.books().is_empty() && state.error().is_none() {
                println!("No books found");
                println!("Try adjusting your search terms or exploring different genres.");
            }
            if !state.books().is_empty() {
                println!("{}", display::results_heading(state.books().len(), query.trim()));
                println!();
                for book in state.books() {
                    println!("{}", display::render_card(book, favorites.has(&book.id)));
                    println!();
                }
                if state.can_load_more() {
                    println!("More results available: rerun with --pages {}", fetched + 1);
                }
            }
        }

        Command::Favorite { id } => {
            let mut favorites = FavoritesStore::load(storage, &config.storage.favorites_key);
            let added = favorites.toggle(&id)?;
            let (title, description) = display::toggle_notice(added);
            println!("{title}: {description}");
            println!("{}", display::favorites_summary(favorites.count()));
        }

        Command::Favorites => {
            let favorites = FavoritesStore::load(storage, &config.storage.favorites_key);
            for id in favorites.ids() {
                println!("♥ {id}");
            }
            println!("{}", display::favorites_summary(favorites.count()));
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }

        Command::Info => {
            let favorites = FavoritesStore::load(storage, &config.storage.favorites_key);
            log::info!("Storage directory: {}", cli.storage_dir.display());
            log::info!(
                "Config: {}",
                if config_path.exists() {
                    "found"
                } else {
                    "not found (using defaults)"
                }
            );
            log::info!("Search endpoint: {}", config.api.base_url);
            log::info!("Page size: {}", config.api.page_size);
            log::info!("{}", display::favorites_summary(favorites.count()));
        }
    }

    Ok(())
}
