//! Review entity and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::storage::{assign, to_attribute, EntityBase, StorageEntity};
use crate::domain::DomainError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReviewValidationError {
    #[error("Review text cannot be empty")]
    EmptyText,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}

pub fn validate_text(text: &str) -> Result<(), ReviewValidationError> {
    if text.trim().is_empty() {
        return Err(ReviewValidationError::EmptyText);
    }
    Ok(())
}

pub fn validate_rating(rating: i64) -> Result<(), ReviewValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ReviewValidationError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// A user's review of a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    base: EntityBase,
    text: String,
    rating: i64,
    user_id: String,
    place_id: String,
}

impl Review {
    pub fn new(
        text: impl Into<String>,
        rating: i64,
        user_id: impl Into<String>,
        place_id: impl Into<String>,
    ) -> Self {
        Self {
            base: EntityBase::new(),
            text: text.into(),
            rating,
            user_id: user_id.into(),
            place_id: place_id.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.base.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> i64 {
        self.rating
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at
    }
}

impl StorageEntity for Review {
    const KIND: &'static str = "Review";

    fn key(&self) -> &str {
        &self.base.id
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "text" => to_attribute(&self.text),
            "rating" => to_attribute(&self.rating),
            "user_id" => to_attribute(&self.user_id),
            "place_id" => to_attribute(&self.place_id),
            _ => self.base.attribute(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<bool, DomainError> {
        match name {
            "text" => assign(&mut self.text, name, value),
            "rating" => assign(&mut self.rating, name, value),
            "user_id" => assign(&mut self.user_id, name, value),
            "place_id" => assign(&mut self.place_id, name, value),
            _ => self.base.set_attribute(name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_attributes() {
        let review = Review::new("Great stay", 5, "u1", "p1").with_id("r1");

        assert_eq!(review.attribute("rating"), Some(json!(5)));
        assert_eq!(review.attribute("place_id"), Some(json!("p1")));
        assert_eq!(review.attribute("title"), None);
    }

    #[test]
    fn test_rating_rejects_non_integers() {
        let mut review = Review::new("Great stay", 5, "u1", "p1");

        assert!(review.set_attribute("rating", json!("five")).is_err());
        assert!(review.set_attribute("rating", json!(4.5)).is_err());
        assert_eq!(review.rating(), 5);
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(validate_rating(MIN_RATING).is_ok());
        assert!(validate_rating(MAX_RATING).is_ok());
        assert_eq!(validate_rating(0), Err(ReviewValidationError::RatingOutOfRange(0)));
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("ok").is_ok());
        assert_eq!(validate_text("  "), Err(ReviewValidationError::EmptyText));
    }
}
