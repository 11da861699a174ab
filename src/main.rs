use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use bike_finder::catalog::{default_catalog_path, load_catalog};
use bike_finder::config::{load_config, DEFAULT_TOP};
use bike_finder::output;
use bike_finder::prefs::{load_preferences, prompt_preferences, Preferences};
use bike_finder::scoring::{rank, validate_preferences};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a few questions and get recommendations (default if no subcommand)
    Find,
    /// Rank the catalog against a YAML preference file
    Rank {
        /// Path to the preference file
        #[arg(short, long)]
        prefs: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Format {
    #[default]
    Text,
    Tsv,
}

#[derive(Parser, Debug)]
#[command(name = "bike-finder")]
#[command(about = "Recommend motorcycles from a catalog by budget, fit, and riding style", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/bike-finder/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the bike catalog JSON (overrides config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Number of results to show (overrides config)
    #[arg(short = 'n', long, global = true)]
    top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Find);
    let start_time = Instant::now();

    let config = match load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let catalog_path = cli
        .catalog
        .or(config.catalog)
        .unwrap_or_else(default_catalog_path);
    let top = cli.top.or(config.top).unwrap_or(DEFAULT_TOP);

    let catalog = match load_catalog(&catalog_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::info!(bikes = catalog.len(), path = %catalog_path.display(), "catalog ready");

    let prefs: Preferences = match command {
        Commands::Find => match prompt_preferences() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Input error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        },
        Commands::Rank { prefs } => {
            let loaded = match load_preferences(&prefs) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Preference error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            if let Err(errors) = validate_preferences(&loaded) {
                eprintln!("Preference file errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }
            loaded
        }
    };

    if prefs.budget_min > prefs.budget_max {
        tracing::warn!(
            budget_min = prefs.budget_min,
            budget_max = prefs.budget_max,
            "budget_min is above budget_max; the price band may be empty"
        );
    }

    let ranked = rank(&catalog, &prefs);

    match cli.format {
        Format::Text => {
            let use_colors = output::should_use_colors();
            if cli.verbose && !ranked.is_empty() {
                println!("\n{}\n", output::format_header(&ranked, top, use_colors));
                for (idx, result) in ranked.iter().take(top).enumerate() {
                    println!("{}", output::format_bike_detail(idx + 1, result, use_colors));
                    println!("{}", output::format_breakdown(result));
                    println!();
                }
            } else {
                println!("\n{}", output::format_results(&ranked, top, use_colors));
            }
        }
        Format::Tsv => {
            let tsv = output::format_tsv(&ranked, top);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
    }

    tracing::debug!(
        matches = ranked.len(),
        elapsed = ?start_time.elapsed(),
        "done"
    );

    std::process::exit(EXIT_SUCCESS);
}
