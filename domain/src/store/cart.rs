//! Shopping cart store

use crate::catalog::product::Product;
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Cart contents
///
/// Holds at most one [`CartItem`] per product id. Totals are derived on
/// read and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing lines, merging duplicate product ids.
    pub fn with_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            match cart.items.iter_mut().find(|i| i.id() == item.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity)
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of `product`.
    pub fn add_item(&mut self, product: Product) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(product)),
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id() != id);
    }

    /// Set the quantity verbatim. Callers clamp to at least 1.
    pub fn update_qty(&mut self, id: &str, qty: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == id) {
            item.quantity = qty;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities, saturating at `u32::MAX`
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |n, i| n.saturating_add(i.quantity))
    }

    /// Sum of price x quantity
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
