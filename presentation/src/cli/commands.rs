//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for storefront
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about = "Storefront - browse the catalog and chat with the shopping assistant")]
#[command(long_about = r#"
Storefront runs the storefront core against its built-in mock backend.

Every request waits a short, fixed delay the way the web storefront does.
Use --instant to skip it.

Configuration files are loaded from (in priority order):
1. STOREFRONT_* environment variables
2. --config <path>          Explicit config file
3. ./storefront.toml        Project-level config
4. ~/.config/storefront/config.toml   Global config

Example:
  storefront products --category electronics
  storefront search laptop
  storefront show 1
  storefront ask "I need a laptop for work"
  storefront shop
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress loading spinners
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Answer immediately instead of simulating backend latency
    #[arg(long, global = true)]
    pub instant: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Storefront subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List products
    Products {
        /// Only products in this category (case-insensitive)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Only featured products
        #[arg(short, long, conflicts_with = "category")]
        featured: bool,
    },

    /// Search titles, descriptions and categories
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Show one product with its specifications and reviews
    Show {
        /// Product id
        id: String,
    },

    /// Ask the shopping assistant once
    Ask {
        /// Message for the assistant
        message: String,
    },

    /// Interactive shop: chat, cart and wishlist
    Shop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products_with_category() {
        let cli = Cli::parse_from(["storefront", "products", "--category", "home"]);
        assert_eq!(
            cli.command,
            Some(Command::Products {
                category: Some("home".to_string()),
                featured: false,
            })
        );
    }

    #[test]
    fn test_featured_conflicts_with_category() {
        let result =
            Cli::try_parse_from(["storefront", "products", "--featured", "--category", "home"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["storefront", "ask", "shoes", "--instant", "-vv"]);
        assert!(cli.instant);
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::Ask {
                message: "shoes".to_string()
            })
        );
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["storefront", "--show-config"]);
        assert!(cli.command.is_none());
        assert!(cli.show_config);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
