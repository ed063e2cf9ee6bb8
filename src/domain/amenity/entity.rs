//! Amenity entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::storage::{assign, to_attribute, EntityBase, StorageEntity};
use crate::domain::DomainError;

pub const MAX_AMENITY_NAME_LENGTH: usize = 50;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmenityValidationError {
    #[error("Amenity name cannot be empty")]
    EmptyName,

    #[error("Amenity name exceeds maximum length of {0} characters")]
    NameTooLong(usize),
}

pub fn validate_amenity_name(name: &str) -> Result<(), AmenityValidationError> {
    if name.trim().is_empty() {
        return Err(AmenityValidationError::EmptyName);
    }

    if name.chars().count() > MAX_AMENITY_NAME_LENGTH {
        return Err(AmenityValidationError::NameTooLong(MAX_AMENITY_NAME_LENGTH));
    }

    Ok(())
}

/// A feature a place can offer (Wi-Fi, parking, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    base: EntityBase,
    name: String,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(),
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.base.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at
    }
}

impl StorageEntity for Amenity {
    const KIND: &'static str = "Amenity";

    fn key(&self) -> &str {
        &self.base.id
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => to_attribute(&self.name),
            _ => self.base.attribute(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<bool, DomainError> {
        match name {
            "name" => assign(&mut self.name, name, value),
            _ => self.base.set_attribute(name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amenity_attributes() {
        let mut amenity = Amenity::new("Wi-Fi").with_id("a1");

        assert_eq!(amenity.attribute("name"), Some(json!("Wi-Fi")));
        assert!(amenity.set_attribute("name", json!("Parking")).unwrap());
        assert_eq!(amenity.name(), "Parking");
        assert!(!amenity.set_attribute("title", json!("x")).unwrap());
    }

    #[test]
    fn test_validate_amenity_name() {
        assert!(validate_amenity_name("Pool").is_ok());
        assert_eq!(validate_amenity_name(" "), Err(AmenityValidationError::EmptyName));
        assert_eq!(
            validate_amenity_name(&"x".repeat(51)),
            Err(AmenityValidationError::NameTooLong(MAX_AMENITY_NAME_LENGTH))
        );
    }
}
