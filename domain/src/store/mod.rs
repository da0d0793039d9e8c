//! Client-side state stores.
//!
//! - [`cart::CartStore`] — cart lines keyed by product id
//! - [`wishlist::WishlistStore`] — saved products with set semantics
//! - [`chat::ChatStore`] — the recommender conversation
//! - [`user::UserStore`] — the signed-in user and token
//!
//! Stores are plain owned values. Operations never fail: unknown ids are
//! ignored rather than reported.

pub mod cart;
pub mod chat;
pub mod user;
pub mod wishlist;
