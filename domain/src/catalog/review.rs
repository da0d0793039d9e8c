//! Customer review entity

use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer review of one product (Entity)
///
/// `helpful` is shown next to the review but no operation changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub author: String,
    pub rating: u8,
    pub date: NaiveDate,
    pub title: String,
    pub comment: String,
    #[serde(default)]
    pub helpful: u32,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        author: impl Into<String>,
        rating: u8,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            author: author.into(),
            rating,
            date,
            title: String::new(),
            comment: String::new(),
            helpful: 0,
        }
    }

    pub fn with_text(mut self, title: impl Into<String>, comment: impl Into<String>) -> Self {
        self.title = title.into();
        self.comment = comment.into();
        self
    }

    pub fn with_helpful(mut self, helpful: u32) -> Self {
        self.helpful = helpful;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidReview("id cannot be empty".to_string()));
        }
        if self.product_id.trim().is_empty() {
            return Err(DomainError::InvalidReview(format!(
                "review {} has no product id",
                self.id
            )));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(DomainError::InvalidReview(format!(
                "review {} has rating {} outside 1-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(Review::new("r1", "1", "Ann", 1, date()).validate().is_ok());
        assert!(Review::new("r1", "1", "Ann", 5, date()).validate().is_ok());
        assert!(Review::new("r1", "1", "Ann", 0, date()).validate().is_err());
        assert!(Review::new("r1", "1", "Ann", 6, date()).validate().is_err());
    }

    #[test]
    fn test_validate_requires_product() {
        let err = Review::new("r1", "", "Ann", 4, date()).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidReview(_)));
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let review = Review::new("r1", "1", "Ann", 4, date()).with_text("Nice", "Works well");
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["productId"], "1");
    }
}
