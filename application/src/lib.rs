//! Application layer for storefront
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LatencyConfig;
pub use ports::storefront_gateway::{AuthSession, GatewayError, StorefrontGateway};
pub use use_cases::authenticate::{AuthError, AuthenticateUseCase, CreateAccountInput};
pub use use_cases::send_chat::{SendChatError, SendChatUseCase};
pub use use_cases::session::StorefrontSession;
