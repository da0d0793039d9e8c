//! Wishlist store

use crate::catalog::product::Product;
use crate::store::cart::CartStore;
use serde::{Deserialize, Serialize};

/// Saved products, each product id at most once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistStore {
    items: Vec<Product>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Product>) -> Self {
        let mut wishlist = Self::new();
        for product in items {
            wishlist.add(product);
        }
        wishlist
    }

    /// Insert `product` unless its id is already saved.
    pub fn add(&mut self, product: Product) {
        if !self.contains(&product.id) {
            self.items.push(product);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }

    /// Move a saved product into `cart`.
    ///
    /// Returns `false` and touches neither store when `id` is not saved.
    pub fn move_to_cart(&mut self, id: &str, cart: &mut CartStore) -> bool {
        let Some(index) = self.items.iter().position(|p| p.id == id) else {
            return false;
        };
        let product = self.items.remove(index);
        cart.add_item(product);
        true
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::Category;

    fn scarf() -> Product {
        Product::new("20", "Wool Scarf", 35.0, Category::Fashion)
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = WishlistStore::new();
        wishlist.add(scarf());
        wishlist.add(scarf());
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut wishlist = WishlistStore::with_items([scarf()]);
        wishlist.remove("nope");
        assert_eq!(wishlist.len(), 1);
        wishlist.remove("20");
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_move_to_cart() {
        let mut wishlist = WishlistStore::with_items([scarf()]);
        let mut cart = CartStore::new();

        assert!(wishlist.move_to_cart("20", &mut cart));
        assert!(!wishlist.contains("20"));
        assert!(cart.contains("20"));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_move_to_cart_increments_existing_line() {
        let mut wishlist = WishlistStore::with_items([scarf()]);
        let mut cart = CartStore::new();
        cart.add_item(scarf());

        wishlist.move_to_cart("20", &mut cart);
        assert_eq!(cart.get("20").unwrap().quantity, 2);
    }

    #[test]
    fn test_move_to_cart_missing_id_is_noop() {
        let mut wishlist = WishlistStore::with_items([scarf()]);
        let mut cart = CartStore::new();

        assert!(!wishlist.move_to_cart("99", &mut cart));
        assert_eq!(wishlist.len(), 1);
        assert!(cart.is_empty());
    }
}
