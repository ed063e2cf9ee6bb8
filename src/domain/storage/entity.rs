//! Storage entity traits and the shared identity/timestamp block

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::DomainError;

/// Trait for types that can be stored in a repository
///
/// Each implementation declares a fixed schema: every attribute reachable by
/// name through [`attribute`](StorageEntity::attribute) and writable through
/// [`set_attribute`](StorageEntity::set_attribute).
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// Entity kind used in error messages and logs
    const KIND: &'static str;

    /// Returns the entity's identifier
    fn key(&self) -> &str;

    /// Reads a named attribute, `None` if the schema has no such attribute
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Writes a named attribute
    ///
    /// Returns `Ok(false)` when the schema has no writable attribute of that
    /// name, and a validation error when the value has the wrong shape.
    fn set_attribute(&mut self, name: &str, value: Value) -> Result<bool, DomainError>;

    /// Checks whether the schema exposes an attribute of that name
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Converts a field into its attribute value
pub fn to_attribute<T: Serialize>(field: &T) -> Option<Value> {
    serde_json::to_value(field).ok()
}

/// Assigns an attribute value to a typed field
pub fn assign<T: DeserializeOwned>(
    field: &mut T,
    name: &str,
    value: Value,
) -> Result<bool, DomainError> {
    *field = serde_json::from_value(value)
        .map_err(|e| DomainError::validation(format!("Invalid value for '{}': {}", name, e)))?;
    Ok(true)
}

/// Identity and timestamps carried by every entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityBase {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for EntityBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityBase {
    /// Creates a base with a fresh UUID v4 identifier
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Creates a base with an explicit identifier
    pub fn with_id(id: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::String(self.id.clone())),
            "created_at" => to_attribute(&self.created_at),
            "updated_at" => to_attribute(&self.updated_at),
            _ => None,
        }
    }

    /// The identifier is never writable through attributes
    pub fn set_attribute(&mut self, name: &str, value: Value) -> Result<bool, DomainError> {
        match name {
            "created_at" => assign(&mut self.created_at, name, value),
            "updated_at" => assign(&mut self.updated_at, name, value),
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_base_has_uuid_and_equal_timestamps() {
        let base = EntityBase::new();

        assert!(Uuid::parse_str(&base.id).is_ok());
        assert_eq!(base.created_at, base.updated_at);
    }

    #[test]
    fn test_base_attributes() {
        let base = EntityBase::with_id("e-1");

        assert_eq!(base.attribute("id"), Some(json!("e-1")));
        assert!(base.attribute("created_at").is_some());
        assert_eq!(base.attribute("name"), None);
    }

    #[test]
    fn test_id_is_not_writable() {
        let mut base = EntityBase::with_id("e-1");

        let applied = base.set_attribute("id", json!("other")).unwrap();
        assert!(!applied);
        assert_eq!(base.id, "e-1");
    }

    #[test]
    fn test_updated_at_accepts_rfc3339() {
        let mut base = EntityBase::with_id("e-1");

        let applied = base
            .set_attribute("updated_at", json!("2030-01-01T00:00:00Z"))
            .unwrap();
        assert!(applied);
        assert_eq!(base.updated_at.to_rfc3339(), "2030-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_bad_timestamp_is_validation_error() {
        let mut base = EntityBase::with_id("e-1");

        let result = base.set_attribute("updated_at", json!("yesterday"));
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
