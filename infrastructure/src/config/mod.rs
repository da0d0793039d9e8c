//! Configuration file loading for storefront
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STOREFRONT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./storefront.toml` or `./.storefront.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/storefront/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileChatConfig, FileConfig, FileLatencyConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
