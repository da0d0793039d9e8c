//! CLI entrypoint for Storefront
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use storefront_application::{LatencyConfig, StorefrontGateway, StorefrontSession};
use storefront_domain::Catalog;
use storefront_infrastructure::{
    ConfigLoader, FileConfig, MockStorefrontGateway, load_catalog, seed_catalog,
};
use storefront_presentation::{Cli, Command, ConsoleFormatter, LoadingSpinner, ShopRepl};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{}", e))?
    };
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command.clone() else {
        bail!("A command is required. Run `storefront --help` for usage.");
    };

    info!("Starting Storefront");

    // === Dependency Injection ===
    let catalog = load_configured_catalog(&config)?;
    let latency = if cli.instant {
        LatencyConfig::none()
    } else {
        config.latency.to_latency()
    };
    let gateway = Arc::new(MockStorefrontGateway::new(Arc::new(catalog)).with_latency(latency));
    let spinner = LoadingSpinner::new(!cli.quiet);

    match command {
        Command::Products { category, featured } => {
            let products = match (category, featured) {
                (Some(category), _) => {
                    spinner
                        .run("Loading products...", gateway.get_products_by_category(&category))
                        .await?
                }
                (None, true) => {
                    spinner
                        .run("Loading products...", gateway.get_featured_products())
                        .await?
                }
                (None, false) => {
                    spinner
                        .run("Loading products...", gateway.get_products())
                        .await?
                }
            };
            print!("{}", ConsoleFormatter::product_list(&products));
        }
        Command::Search { query } => {
            let products = spinner
                .run("Searching...", gateway.search_products(&query))
                .await?;
            print!("{}", ConsoleFormatter::product_list(&products));
        }
        Command::Show { id } => {
            let product = spinner
                .run("Loading product...", gateway.get_product_by_id(&id))
                .await?
                .with_context(|| format!("No product with id {id}"))?;
            let (reviews, average) = spinner
                .run("Loading reviews...", async {
                    tokio::try_join!(
                        gateway.get_product_reviews(&id),
                        gateway.get_average_rating(&id)
                    )
                })
                .await?;
            print!(
                "{}",
                ConsoleFormatter::product_detail(&product, &reviews, average)
            );
        }
        Command::Ask { message } => {
            let recommendation = spinner
                .run("Assistant is typing...", gateway.send_chat_message(&message))
                .await?;
            print!("{}", ConsoleFormatter::recommendation(&recommendation));
        }
        Command::Shop => {
            let session = if config.chat.greeting {
                StorefrontSession::with_greeting()
            } else {
                StorefrontSession::new()
            };
            let mut repl = ShopRepl::new(gateway, session).with_progress(!cli.quiet);
            if let Some(path) = config.chat.history_path() {
                repl = repl.with_history_file(path);
            }
            repl.run().await?;
        }
    }

    Ok(())
}

fn load_configured_catalog(config: &FileConfig) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => Ok(load_catalog(path)?),
        None => Ok(seed_catalog()),
    }
}
