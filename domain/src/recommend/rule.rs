//! Recommendation rules and candidate selectors

use crate::catalog::Catalog;
use crate::catalog::product::{Category, Product};
use serde::{Deserialize, Serialize};

/// How a rule picks candidate products from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Fixed product ids, in the listed order; unknown ids are skipped
    Ids(Vec<String>),
    /// Products whose title contains `needle` (case-insensitive),
    /// optionally limited to one category
    TitleContains {
        category: Option<Category>,
        needle: String,
    },
    /// Every product in a category
    Category(Category),
}

impl Selector {
    pub fn select<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        match self {
            Selector::Ids(ids) => ids
                .iter()
                .filter_map(|id| catalog.product_by_id(id))
                .collect(),
            Selector::TitleContains { category, needle } => {
                let needle = needle.to_lowercase();
                catalog
                    .products()
                    .iter()
                    .filter(|p| category.is_none_or(|c| p.category == c))
                    .filter(|p| p.title.to_lowercase().contains(&needle))
                    .collect()
            }
            Selector::Category(category) => catalog.products_by_category(category.as_str()),
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub name: String,
    /// Lower-case keywords; any one occurring as a substring fires the rule
    pub keywords: Vec<String>,
    pub selector: Selector,
}

impl RecommendationRule {
    pub fn new<I, S>(name: impl Into<String>, keywords: I, selector: Selector) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
            selector,
        }
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// The storefront's rule table, in evaluation order
    pub fn standard_table() -> Vec<RecommendationRule> {
        vec![
            Self::new(
                "laptops",
                ["laptop", "computer", "work", "personal"],
                Selector::Ids(vec!["1".into(), "2".into(), "3".into()]),
            ),
            Self::new(
                "audio",
                ["headphone", "audio", "music"],
                Selector::TitleContains {
                    category: Some(Category::Electronics),
                    needle: "speaker".to_string(),
                },
            ),
            Self::new(
                "watches",
                ["watch", "fitness", "health"],
                Selector::TitleContains {
                    category: None,
                    needle: "watch".to_string(),
                },
            ),
            Self::new(
                "shoes",
                ["shoe", "running", "sport"],
                Selector::Ids(vec!["8".into(), "9".into()]),
            ),
            Self::new(
                "fashion",
                ["cloth", "shirt", "fashion"],
                Selector::Category(Category::Fashion),
            ),
            Self::new(
                "home",
                ["home", "kitchen", "decor"],
                Selector::Category(Category::Home),
            ),
            Self::new(
                "electronics",
                ["electronic", "tech", "gadget"],
                Selector::Category(Category::Electronics),
            ),
        ]
    }
}
