//! Mock backend adapter.
//!
//! [`MockStorefrontGateway`] implements the
//! [`StorefrontGateway`](storefront_application::StorefrontGateway) port
//! over an in-memory catalog, waiting a fixed delay before each answer.

mod gateway;

pub use gateway::MockStorefrontGateway;
