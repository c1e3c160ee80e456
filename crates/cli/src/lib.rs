pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Duration;
use clap::{Parser, Subcommand};

use grocer_catalog::Recommender;
use grocer_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use grocer_core::recs::{DEFAULT_PAIRING_LIMIT, DEFAULT_RELATED_LIMIT, DEFAULT_TRENDING_LIMIT};

use crate::commands::CommandResult;

#[derive(Debug, Parser)]
#[command(
    name = "grocer",
    about = "Grocer storefront catalog CLI",
    long_about = "Browse the product catalog and preview the storefront's recommendation \
                  panels against a live backend or a JSON catalog fixture.",
    after_help = "Examples:\n  grocer trending\n  grocer related FV-001 --limit 4 --json\n  grocer pairings SN-002 --catalog fixtures/catalog.json"
)]
pub struct Cli {
    /// Serve the catalog from a JSON fixture file instead of the backend
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Show related products for a product view")]
    Related {
        product_id: String,
        #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show frequently-bought-together picks for a product")]
    Pairings {
        product_id: String,
        #[arg(long, default_value_t = DEFAULT_PAIRING_LIMIT)]
        limit: usize,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show the trending panel sample")]
    Trending {
        #[arg(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
        limit: usize,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List currently discounted products")]
    Discounts {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values")]
    Config,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions {
        overrides: ConfigOverrides {
            catalog_base_url: cli.base_url.clone(),
            ..ConfigOverrides::default()
        },
        ..LoadOptions::default()
    }) {
        Ok(config) => config,
        Err(error) => {
            let result =
                CommandResult::failure("config", "config_validation", error.to_string(), 2);
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    init_logging(&config);

    let result = dispatch(&cli, &config).await;
    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

async fn dispatch(cli: &Cli, config: &AppConfig) -> CommandResult {
    if let Command::Config = cli.command {
        return CommandResult { exit_code: 0, output: commands::config::run(config) };
    }

    let source = match commands::catalog_source(cli.catalog.as_deref(), config) {
        Ok(source) => source,
        Err(error) => {
            return CommandResult::failure("catalog", "catalog_source", format!("{error:#}"), 2)
        }
    };
    let ttl = Duration::seconds(config.catalog.cache_ttl_secs as i64);
    let recommender = Recommender::with_cache_ttl(source, ttl);

    match &cli.command {
        Command::Related { product_id, limit, json } => {
            commands::related::run(&recommender, product_id, *limit, *json).await
        }
        Command::Pairings { product_id, limit, json } => {
            commands::pairings::run(&recommender, product_id, *limit, *json).await
        }
        Command::Trending { limit, json } => {
            commands::trending::run(&recommender, *limit, *json).await
        }
        Command::Discounts { json } => commands::discounts::run(&recommender, *json).await,
        Command::Config => unreachable!("handled above"),
    }
}

fn init_logging(config: &AppConfig) {
    use grocer_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}
