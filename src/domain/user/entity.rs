//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::storage::{assign, to_attribute, EntityBase, StorageEntity};
use crate::domain::DomainError;

/// A registered user of the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    base: EntityBase,
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    is_admin: bool,
}

impl User {
    /// Create a new user with a generated id
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            base: EntityBase::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            is_admin: false,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.base.id = id.into();
        self
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at
    }
}

impl StorageEntity for User {
    const KIND: &'static str = "User";

    fn key(&self) -> &str {
        &self.base.id
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "first_name" => to_attribute(&self.first_name),
            "last_name" => to_attribute(&self.last_name),
            "email" => to_attribute(&self.email),
            "is_admin" => to_attribute(&self.is_admin),
            _ => self.base.attribute(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<bool, DomainError> {
        match name {
            "first_name" => assign(&mut self.first_name, name, value),
            "last_name" => assign(&mut self.last_name, name, value),
            "email" => assign(&mut self.email, name, value),
            "is_admin" => assign(&mut self.is_admin, name, value),
            _ => self.base.set_attribute(name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_user() -> User {
        User::new("Ada", "Lovelace", "ada@example.com").with_id("u1")
    }

    #[test]
    fn test_user_creation() {
        let user = User::new("Ada", "Lovelace", "ada@example.com");

        assert!(!user.id().is_empty());
        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.email(), "ada@example.com");
        assert!(!user.is_admin());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_user_attributes() {
        let user = create_test_user();

        assert_eq!(user.attribute("id"), Some(json!("u1")));
        assert_eq!(user.attribute("email"), Some(json!("ada@example.com")));
        assert_eq!(user.attribute("is_admin"), Some(json!(false)));
        assert_eq!(user.attribute("bogus"), None);
        assert!(user.has_attribute("last_name"));
        assert!(!user.has_attribute("password"));
    }

    #[test]
    fn test_user_set_attribute() {
        let mut user = create_test_user();

        assert!(user.set_attribute("email", json!("x@y.com")).unwrap());
        assert_eq!(user.email(), "x@y.com");

        assert!(!user.set_attribute("bogus", json!(1)).unwrap());
        assert!(!user.set_attribute("id", json!("u2")).unwrap());
        assert_eq!(user.id(), "u1");
    }

    #[test]
    fn test_user_set_attribute_wrong_type() {
        let mut user = create_test_user();

        let result = user.set_attribute("is_admin", json!("yes"));
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(!user.is_admin());
    }

    #[test]
    fn test_user_serialization_is_flat() {
        let user = create_test_user();

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "u1");
        assert_eq!(json["first_name"], "Ada");
        assert!(json.get("base").is_none());
        assert!(json.get("created_at").is_some());
    }
}
