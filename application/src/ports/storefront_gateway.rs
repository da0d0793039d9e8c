//! Storefront gateway port
//!
//! Defines the interface the storefront uses to reach its backend. The only
//! adapter today is a mock that answers from an in-memory catalog.

use async_trait::async_trait;
use storefront_domain::{AuthToken, Product, Recommendation, Review, User};
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// The mock adapter never produces them; they exist so a real backend can
/// report failures without changing the port.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Result of a successful login or sign-up
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: User,
    pub token: AuthToken,
}

/// Gateway for catalog, account and chat requests
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait StorefrontGateway: Send + Sync {
    /// All products in catalog order
    async fn get_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Exact-id lookup
    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, GatewayError>;

    /// Case-insensitive category filter
    async fn get_products_by_category(&self, category: &str)
    -> Result<Vec<Product>, GatewayError>;

    async fn get_featured_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Substring search over title, description and category
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, GatewayError>;

    async fn get_product_reviews(&self, product_id: &str) -> Result<Vec<Review>, GatewayError>;

    /// Mean review rating, one decimal, `0.0` without reviews
    async fn get_average_rating(&self, product_id: &str) -> Result<f64, GatewayError>;

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError>;

    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, GatewayError>;

    async fn reset_password(&self, email: &str) -> Result<(), GatewayError>;

    /// Scripted assistant reply with suggested products
    async fn send_chat_message(&self, message: &str) -> Result<Recommendation, GatewayError>;
}
