//! Product entity and its value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest rating a product or review can carry.
pub const MAX_RATING: f64 = 5.0;

/// Product category (fixed set)
///
/// Deserialization accepts any casing of the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Sports,
    Books,
    Beauty,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Sports,
        Category::Books,
        Category::Beauty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Beauty => "Beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

/// Ordered specification table (label -> value)
///
/// Keeps insertion order, which is the order the storefront renders rows in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specifications(Vec<(String, String)>);

impl Specifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing an existing label in place.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for Specifications {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut specs = Specifications::new();
        for (label, value) in iter {
            specs.insert(label, value);
        }
        specs
    }
}

/// A sellable item (Entity)
///
/// Immutable once the catalog is loaded. Built with [`Product::new`] and the
/// `with_*` builder methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub category: Category,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            currency: default_currency(),
            category,
            rating: 0.0,
            review_count: 0,
            image: String::new(),
            images: Vec::new(),
            description: String::new(),
            specifications: Specifications::new(),
            in_stock: true,
            featured: false,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set the primary image. It is also listed first in `images`.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        if !self.images.contains(&image) {
            self.images.insert(0, image.clone());
        }
        self.image = image;
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for image in images {
            let image = image.into();
            if !self.images.contains(&image) {
                self.images.push(image);
            }
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_spec(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(label, value);
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Check the record against the catalog invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidProduct("id cannot be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidProduct(format!(
                "product {} has an empty title",
                self.id
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidProduct(format!(
                "product {} has invalid price {}",
                self.id, self.price
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(DomainError::InvalidProduct(format!(
                "product {} has rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }

    /// Case-insensitive substring match over title, description and category.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}
