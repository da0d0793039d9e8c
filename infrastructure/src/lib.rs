//! Infrastructure layer for storefront
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the built-in catalog data, and
//! configuration file loading.

pub mod catalog;
pub mod config;
pub mod mock;

// Re-export commonly used types
pub use catalog::{CatalogLoadError, load_catalog, seed_catalog};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileChatConfig, FileConfig,
    FileLatencyConfig, FileOutputConfig,
};
pub use mock::MockStorefrontGateway;
