//! Repository trait definition

use std::fmt::Debug;

use serde_json::{Map, Number, Value};

use crate::domain::DomainError;

use super::entity::StorageEntity;
use super::key::{EntityKey, IntoEntityKey};

/// Generic identity-keyed repository for one entity kind
///
/// Lookups that merely miss (`get_by_key`, `list_all`, `delete_by_key`,
/// `clear`) never fail; operations that require an existing entity report
/// [`DomainError::NotFound`].
pub trait Repository<E>: Send + Sync + Debug
where
    E: StorageEntity,
{
    /// Inserts a new entity, fails with a conflict if the id is taken
    fn add(&self, entity: E) -> Result<E, DomainError>;

    /// Retrieves an entity by its key
    fn get_by_key(&self, key: &EntityKey) -> Option<E>;

    /// Retrieves all entities in insertion order
    fn list_all(&self) -> Vec<E>;

    /// Applies a patch of named attributes to an existing entity
    ///
    /// The `id` key is dropped and keys outside the entity's schema are
    /// ignored. The patch is applied atomically: if any value has the wrong
    /// shape nothing is written.
    fn update_by_key(&self, key: &EntityKey, patch: &Value) -> Result<E, DomainError>;

    /// Deletes an entity by its key, returns true if deleted
    fn delete_by_key(&self, key: &EntityKey) -> bool;

    /// Removes every entity
    fn clear(&self);

    /// First entity, in insertion order, whose attribute equals `value`
    fn find_one(&self, attribute: &str, value: &Value) -> Result<Option<E>, DomainError>;

    /// Every entity, in insertion order, whose attribute equals `value`
    fn find_all(&self, attribute: &str, value: &Value) -> Result<Vec<E>, DomainError>;

    /// Returns the count of entities
    fn count(&self) -> usize {
        self.list_all().len()
    }
}

/// Identifier-normalizing conveniences over [`Repository`]
pub trait RepositoryExt<E: StorageEntity>: Repository<E> {
    /// Soft lookup: `None` for an absent or unknown id
    fn get(&self, id: impl IntoEntityKey) -> Option<E> {
        id.into_entity_key().and_then(|key| self.get_by_key(&key))
    }

    /// Hard lookup: not-found error for an absent or unknown id
    fn get_or_fail(&self, id: impl IntoEntityKey) -> Result<E, DomainError> {
        match id.into_entity_key() {
            Some(key) => self.get_by_key(&key).ok_or_else(|| not_found::<E>(&key)),
            None => Err(missing_id::<E>()),
        }
    }

    fn update(&self, id: impl IntoEntityKey, patch: &Value) -> Result<E, DomainError> {
        match id.into_entity_key() {
            Some(key) => self.update_by_key(&key, patch),
            None => {
                patch_fields(patch)?;
                Err(missing_id::<E>())
            }
        }
    }

    fn delete(&self, id: impl IntoEntityKey) -> bool {
        id.into_entity_key()
            .map(|key| self.delete_by_key(&key))
            .unwrap_or(false)
    }

    fn exists(&self, id: impl IntoEntityKey) -> bool {
        self.get(id).is_some()
    }
}

impl<E: StorageEntity, R: Repository<E> + ?Sized> RepositoryExt<E> for R {}

/// Validates the entity's identifier and returns it as a key
pub fn entity_key<E: StorageEntity>(entity: &E) -> Result<EntityKey, DomainError> {
    let id = entity.key();

    if id.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "{} must have a non-empty 'id'",
            E::KIND
        )));
    }

    Ok(EntityKey::new(id))
}

/// Rejects patches that are not JSON objects
pub fn patch_fields(patch: &Value) -> Result<&Map<String, Value>, DomainError> {
    patch
        .as_object()
        .ok_or_else(|| DomainError::validation("Update data must be a JSON object"))
}

/// Rejects empty attribute names in queries
pub fn ensure_attribute_name(attribute: &str) -> Result<(), DomainError> {
    if attribute.is_empty() {
        return Err(DomainError::validation("Attribute name cannot be empty"));
    }
    Ok(())
}

/// Attribute equality used by the finders
///
/// Numbers compare by value so that `4` matches a stored `4.0`.
pub fn attribute_matches<E: StorageEntity>(entity: &E, attribute: &str, value: &Value) -> bool {
    match entity.attribute(attribute) {
        Some(Value::Number(stored)) => match value {
            Value::Number(wanted) => numbers_equal(&stored, wanted),
            _ => false,
        },
        Some(stored) => &stored == value,
        None => false,
    }
}

/// Integers compare exactly; only a float on either side goes through `f64`.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if a.is_f64() || b.is_f64() {
        return a.as_f64() == b.as_f64();
    }
    // One side negative i64, the other u64 above i64::MAX
    false
}

pub fn not_found<E: StorageEntity>(key: &EntityKey) -> DomainError {
    DomainError::not_found(format!("{} with id '{}' not found", E::KIND, key))
}

fn missing_id<E: StorageEntity>() -> DomainError {
    DomainError::not_found(format!("{} not found: no id given", E::KIND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_fields_accepts_objects_only() {
        assert!(patch_fields(&json!({"a": 1})).is_ok());
        assert!(patch_fields(&json!({})).is_ok());

        for bad in [json!(null), json!([1, 2]), json!("x"), json!(3)] {
            let err = patch_fields(&bad).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_ensure_attribute_name() {
        assert!(ensure_attribute_name("email").is_ok());
        assert!(ensure_attribute_name("").unwrap_err().is_validation());
    }
}
