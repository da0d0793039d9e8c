//! Catalog data sources.
//!
//! - [`seed_catalog`] — the built-in product and review data
//! - [`load_catalog`] — a catalog read from a JSON file and validated

mod json;
mod seed;

pub use json::{CatalogFile, CatalogLoadError, load_catalog};
pub use seed::seed_catalog;
