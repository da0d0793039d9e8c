//! JSON catalog files.
//!
//! ```json
//! {
//!   "products": [{ "id": "1", "title": "Mug", "price": 9.5, "category": "Home" }],
//!   "reviews": []
//! }
//! ```
//!
//! Records go through [`Catalog::try_new`], so a file with a negative price
//! or an orphan review is rejected as a whole.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_domain::{Catalog, DomainError, Product, Review};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Could not read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Read and validate a JSON catalog
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: CatalogFile =
        serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::try_new(file.products, file.reviews).map_err(|source| {
        CatalogLoadError::Invalid {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(
        "Loaded {} products and {} reviews from {}",
        catalog.len(),
        catalog.reviews().len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_catalog() {
        let file = write(
            r#"{
                "products": [
                    {"id": "1", "title": "Mug", "price": 9.5, "category": "home", "featured": true,
                     "specifications": [["Material", "Stoneware"], ["Volume", "350ml"]]},
                    {"id": "2", "title": "Novel", "price": 14.0, "category": "Books"}
                ],
                "reviews": [
                    {"id": "r1", "productId": "1", "author": "Kim", "rating": 4,
                     "date": "2024-02-10", "title": "Solid", "comment": "Keeps coffee warm"}
                ]
            }"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.featured().len(), 1);
        assert_eq!(catalog.average_rating("1"), 4.0);
        let mug = catalog.product_by_id("1").unwrap();
        assert_eq!(mug.specifications.get("Volume"), Some("350ml"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = write("{ not json");
        assert!(matches!(
            load_catalog(file.path()),
            Err(CatalogLoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_unknown_category_is_a_parse_error() {
        let file = write(r#"{"products": [{"id": "1", "title": "Kite", "price": 5, "category": "Toys"}]}"#);
        assert!(matches!(
            load_catalog(file.path()),
            Err(CatalogLoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_records_are_rejected() {
        let file = write(r#"{"products": [{"id": "1", "title": "Mug", "price": -2, "category": "Home"}]}"#);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Invalid {
                source: DomainError::InvalidProduct(_),
                ..
            }
        ));
    }
}
