//! Periplus - Adaptive Navigation Personalization Engine
//!
//! Command-line front end for the personalization engine: record
//! navigation events, inspect the three ranked views, and reset usage
//! data. This binary stands in for the dashboard UI that would normally
//! consume the library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use periplus_core::{
    config::resolve_store_path, EngineConfig, JsonFileBackend, PersonalizationEngine,
    SuggestionItem,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "periplus", version, about = "Adaptive navigation personalization engine")]
struct Cli {
    /// Usage store location (overrides config and platform default)
    #[arg(long, global = true, env = "PERIPLUS_DATA_PATH")]
    data_path: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record one navigation event
    Record {
        /// Target id (e.g. a route path like /billing)
        target: String,

        /// Human-readable label for the target
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Show the most-visited targets
    Frequent {
        /// Maximum entries to show
        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },

    /// Show the most-recently-visited targets
    Recent {
        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },

    /// Show personalized suggestions, excluding the current target
    Suggest {
        /// Target the user is currently on
        #[arg(long, default_value = "")]
        current: String,

        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },

    /// Show store location and usage summary
    Status,

    /// Clear all recorded usage data
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let store_path = resolve_store_path(cli.data_path.clone(), &config);
    let mut engine =
        PersonalizationEngine::new(Box::new(JsonFileBackend::new(&store_path)), config);

    match cli.command {
        Commands::Record { target, name } => {
            let display_name = if name.is_empty() { target.clone() } else { name };
            engine.record(&target, &display_name);
            println!("✓ recorded {}", target);
        }
        Commands::Frequent { limit } => {
            print_items("Frequently used", &engine.frequently_used_items(limit));
        }
        Commands::Recent { limit } => {
            print_items("Recently used", &engine.recently_used_items(limit));
        }
        Commands::Suggest { current, limit } => {
            print_items(
                "Suggestions",
                &engine.personalized_suggestions(&current, limit),
            );
        }
        Commands::Status => {
            println!("Store:   {}", engine.store_location());
            println!("Targets: {}", engine.record_count());
            if let Some(top) = engine.frequently_used_items(1).first() {
                println!(
                    "Top:     {} ({} visits)",
                    top.target_id, top.click_count
                );
            }
        }
        Commands::Reset => {
            engine.reset_usage_data();
            println!("✓ usage data cleared");
        }
    }

    Ok(())
}

fn print_items(heading: &str, items: &[SuggestionItem]) {
    if items.is_empty() {
        println!("{}: (no data yet)", heading);
        return;
    }

    println!("{}:", heading);
    for (i, item) in items.iter().enumerate() {
        println!(
            "  {}. {} — {} ({} visits, last {})",
            i + 1,
            item.target_id,
            item.display_name,
            item.click_count,
            item.last_accessed_at.format("%Y-%m-%d %H:%M"),
        );
    }
}
