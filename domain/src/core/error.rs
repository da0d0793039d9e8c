//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Store operations never fail; these errors only come from validating
/// catalog records at the boundary where they enter the domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Invalid review: {0}")]
    InvalidReview(String),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Unknown product id: {0}")]
    UnknownProduct(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    /// Check if this error was raised while validating a single record
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidProduct(_) | DomainError::InvalidReview(_)
        )
    }
}
