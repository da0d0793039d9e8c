//! Per-session client state
//!
//! [`StorefrontSession`] is the context object a UI layer owns for the
//! lifetime of a session. It replaces process-wide singleton stores: every
//! piece of code that needs a store receives it from here.

use storefront_domain::{CartStore, ChatStore, UserStore, WishlistStore};

/// The four client stores of one storefront session
#[derive(Debug, Clone, Default)]
pub struct StorefrontSession {
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub chat: ChatStore,
    pub user: UserStore,
}

impl StorefrontSession {
    /// Empty stores
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty stores except for the assistant greeting
    pub fn with_greeting() -> Self {
        Self {
            chat: ChatStore::with_greeting(),
            ..Self::default()
        }
    }

    pub fn with_cart(mut self, cart: CartStore) -> Self {
        self.cart = cart;
        self
    }

    pub fn with_wishlist(mut self, wishlist: WishlistStore) -> Self {
        self.wishlist = wishlist;
        self
    }

    pub fn with_chat(mut self, chat: ChatStore) -> Self {
        self.chat = chat;
        self
    }

    pub fn with_user(mut self, user: UserStore) -> Self {
        self.user = user;
        self
    }

    /// Move a wishlist entry into the cart. See [`WishlistStore::move_to_cart`].
    pub fn move_to_cart(&mut self, id: &str) -> bool {
        self.wishlist.move_to_cart(id, &mut self.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_domain::{Category, Product};

    #[test]
    fn test_sessions_are_independent() {
        let mut first = StorefrontSession::new();
        let second = StorefrontSession::new();

        first
            .cart
            .add_item(Product::new("1", "Lamp", 10.0, Category::Home));
        assert_eq!(first.cart.item_count(), 1);
        assert!(second.cart.is_empty());
    }

    #[test]
    fn test_injected_state() {
        let mut cart = CartStore::new();
        cart.add_item(Product::new("1", "Lamp", 10.0, Category::Home));
        let session = StorefrontSession::new().with_cart(cart);
        assert!(session.cart.contains("1"));
    }

    #[test]
    fn test_move_to_cart() {
        let lamp = Product::new("1", "Lamp", 10.0, Category::Home);
        let mut session =
            StorefrontSession::new().with_wishlist(WishlistStore::with_items([lamp]));

        assert!(session.move_to_cart("1"));
        assert!(session.wishlist.is_empty());
        assert!(session.cart.contains("1"));
        assert!(!session.move_to_cart("1"));
    }

    #[test]
    fn test_with_greeting() {
        let session = StorefrontSession::with_greeting();
        assert_eq!(session.chat.len(), 1);
        assert!(!session.user.is_authenticated());
    }
}
