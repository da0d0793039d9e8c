//! Product catalog domain.
//!
//! - [`product::Product`] — a sellable item
//! - [`review::Review`] — a customer review of a product
//! - [`Catalog`] — the static product and review lists plus pure accessors

pub mod product;
pub mod review;

use crate::core::error::DomainError;
use product::Product;
use review::Review;
use std::collections::HashSet;

/// Static catalog of products and their reviews
///
/// Loaded once and never mutated. All accessors are pure and return items
/// in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build a catalog without validation (trusted, built-in data)
    pub fn new(products: Vec<Product>, reviews: Vec<Review>) -> Self {
        Self { products, reviews }
    }

    /// Build a catalog from untrusted records
    ///
    /// Every record is validated, product ids must be unique and every
    /// review must point at a product in the catalog.
    pub fn try_new(products: Vec<Product>, reviews: Vec<Review>) -> Result<Self, DomainError> {
        let mut ids = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !ids.insert(product.id.as_str()) {
                return Err(DomainError::DuplicateProduct(product.id.clone()));
            }
        }
        for review in &reviews {
            review.validate()?;
            if !ids.contains(review.product_id.as_str()) {
                return Err(DomainError::UnknownProduct(review.product_id.clone()));
            }
        }
        Ok(Self::new(products, reviews))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose category name equals `category`, ignoring case
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        let wanted = category.trim();
        self.products
            .iter()
            .filter(|p| p.category.as_str().eq_ignore_ascii_case(wanted))
            .collect()
    }

    /// Case-insensitive substring search over title, description and category
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    pub fn reviews_for(&self, product_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }

    /// Mean review rating rounded to one decimal, `0.0` without reviews
    pub fn average_rating(&self, product_id: &str) -> f64 {
        let ratings: Vec<f64> = self
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .map(|r| f64::from(r.rating))
            .collect();

        if ratings.is_empty() {
            return 0.0;
        }

        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    }
}
