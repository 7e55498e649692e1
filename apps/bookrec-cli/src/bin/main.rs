use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use bookrec_core::config::{expand_path, resolve_with_base, Config};
use bookrec_core::sources::{JsonCatalog, JsonRatings};
use bookrec_core::store::JsonFileStore;
use bookrec_core::traits::RecommendationStore;
use bookrec_core::types::{ItemId, RatingEvent, UserId};
use bookrec_engine::Recommender;

#[derive(Parser)]
#[command(name = "bookrec", about = "Content-based book recommendations over JSON snapshots")]
struct Cli {
    /// Directory holding config.toml; relative data paths in it resolve against this directory
    #[arg(long, global = true, env = "BOOKREC_CONFIG_DIR", default_value = ".")]
    config_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recompute a user's recommendations and replace the stored set
    Recommend {
        user_id: UserId,
        #[arg(long)]
        catalog: Option<String>,
        #[arg(long)]
        ratings: Option<String>,
        /// Directory of per-user recommendation files
        #[arg(long)]
        store: Option<String>,
        #[arg(long)]
        top_n: Option<usize>,
        /// Print without persisting
        #[arg(long)]
        dry_run: bool,
    },
    /// Items whose content is closest to the given item
    Similar {
        item_id: ItemId,
        #[arg(long)]
        catalog: Option<String>,
        #[arg(long, default_value_t = 5)]
        top_n: usize,
    },
    /// Print the stored recommendations of a user
    Show {
        user_id: UserId,
        /// Directory of per-user recommendation files
        #[arg(long)]
        store: Option<String>,
    },
}

fn data_path(config: &Config, flag: Option<String>, key: &str, fallback: &str) -> PathBuf {
    match flag {
        Some(raw) => expand_path(raw),
        None => config.get_path(key).unwrap_or_else(|_| resolve_with_base(config.base(), fallback)),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config_dir)
        .with_context(|| format!("loading configuration from {}", cli.config_dir.display()))?;
    match cli.command {
        Command::Recommend { user_id, catalog, ratings, store, top_n, dry_run } => {
            let catalog = data_path(&config, catalog, "data.catalog_path", "data/catalog.json");
            let ratings = data_path(&config, ratings, "data.ratings_path", "data/ratings.json");
            let mut settings = config.recommender()?;
            if let Some(n) = top_n {
                settings.top_n = n;
            }
            info!(user_id, catalog = %catalog.display(), ratings = %ratings.display(), "generating recommendations");
            let recommender = Recommender::new(JsonCatalog::new(catalog), JsonRatings::new(ratings), settings)?;
            let recommendations = if dry_run {
                recommender.recommend(user_id)?
            } else {
                let store = JsonFileStore::new(data_path(&config, store, "data.recommendations_dir", "data/recommendations"));
                recommender.refresh(user_id, &store).with_context(|| format!("refreshing user {}", user_id))?
            };
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        }
        Command::Similar { item_id, catalog, top_n } => {
            let catalog = data_path(&config, catalog, "data.catalog_path", "data/catalog.json");
            let recommender = Recommender::new(JsonCatalog::new(catalog), Vec::<RatingEvent>::new(), config.recommender()?)?;
            let similar = recommender.similar_items(item_id, top_n)?;
            println!("{}", serde_json::to_string_pretty(&similar)?);
        }
        Command::Show { user_id, store } => {
            let store = JsonFileStore::new(data_path(&config, store, "data.recommendations_dir", "data/recommendations"));
            println!("{}", serde_json::to_string_pretty(&store.get(user_id)?)?);
        }
    }
    Ok(())
}
