//! Chat product recommendation.
//!
//! The assistant is a keyword rule table, not a relevance model. Rules are
//! evaluated top-down against the lower-cased message and the first rule
//! with a matching keyword picks the candidate products.
//!
//! # Example
//!
//! ```
//! use storefront_domain::{Catalog, Category, Product, Recommender, MATCHED_REPLY};
//!
//! let catalog = Catalog::new(
//!     vec![Product::new("5", "Floor Lamp", 80.0, Category::Home)],
//!     vec![],
//! );
//! let answer = Recommender::default().recommend(&catalog, "Decor for my living room");
//! assert_eq!(answer.reply, MATCHED_REPLY);
//! assert_eq!(answer.products[0].id, "5");
//! ```

mod rule;

pub use rule::{RecommendationRule, Selector};

use crate::catalog::Catalog;
use crate::catalog::product::Product;
use serde::{Deserialize, Serialize};

/// Most products suggested in one reply
pub const MAX_SUGGESTIONS: usize = 3;

/// Reply when a keyword rule fired
pub const MATCHED_REPLY: &str =
    "Based on what you're looking for, here are some products I think you'll love:";

/// Reply when no keyword rule fired
pub const FALLBACK_REPLY: &str = "I'm not sure exactly what you're looking for, but here are \
some of our featured products you might like:";

/// Assistant answer to one message (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub reply: String,
    pub products: Vec<Product>,
    /// Name of the rule that fired, `None` for the fallback
    pub matched_rule: Option<String>,
}

impl Recommendation {
    pub fn is_match(&self) -> bool {
        self.matched_rule.is_some()
    }
}

/// Ordered rule table
#[derive(Debug, Clone)]
pub struct Recommender {
    rules: Vec<RecommendationRule>,
}

impl Recommender {
    pub fn new(rules: Vec<RecommendationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Answer `message` from `catalog`.
    ///
    /// No match falls back to featured products; an empty candidate set
    /// falls back to the head of the catalog.
    pub fn recommend(&self, catalog: &Catalog, message: &str) -> Recommendation {
        let lowered = message.to_lowercase();
        let rule = self.rules.iter().find(|r| r.matches(&lowered));

        let mut candidates = match rule {
            Some(rule) => rule.selector.select(catalog),
            None => catalog.featured(),
        };
        if candidates.is_empty() {
            candidates = catalog.products().iter().collect();
        }

        Recommendation {
            reply: match rule {
                Some(_) => MATCHED_REPLY.to_string(),
                None => FALLBACK_REPLY.to_string(),
            },
            products: candidates
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .cloned()
                .collect(),
            matched_rule: rule.map(|r| r.name.clone()),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommendationRule::standard_table())
    }
}
