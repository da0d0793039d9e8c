//! Domain layer for storefront
//!
//! This crate contains the catalog entities, the client-side state stores,
//! and the chat recommendation rules. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A [`Catalog`] owns the immutable product and review lists and exposes the
//! pure lookup, filter, search and rating accessors over them.
//!
//! ## Stores
//!
//! Cart, wishlist, chat and user state are plain values owned by the caller.
//! There are no globals: a UI layer creates the stores once per session and
//! passes them to whatever needs them.
//!
//! ## Recommendation
//!
//! The chat assistant is a fixed, ordered keyword rule table. The first rule
//! whose keyword occurs in the message picks the suggested products.

pub mod catalog;
pub mod core;
pub mod recommend;
pub mod store;

// Re-export commonly used types
pub use catalog::{
    Catalog,
    product::{Category, Product, Specifications},
    review::Review,
};
pub use core::error::DomainError;
pub use recommend::{
    FALLBACK_REPLY, MATCHED_REPLY, MAX_SUGGESTIONS, Recommendation, RecommendationRule,
    Recommender, Selector,
};
pub use store::{
    cart::{CartItem, CartStore},
    chat::{ChatMessage, ChatRole, ChatStore},
    user::{AuthToken, User, UserStore},
    wishlist::WishlistStore,
};
