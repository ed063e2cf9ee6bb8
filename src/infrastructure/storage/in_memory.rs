//! In-memory repository implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::trace;

use crate::domain::storage::{
    attribute_matches, ensure_attribute_name, entity_key, not_found, patch_fields, EntityKey,
    Repository, StorageEntity,
};
use crate::domain::DomainError;

/// Entities in insertion order plus a key index into them
#[derive(Debug)]
struct Store<E> {
    entities: Vec<E>,
    index: HashMap<EntityKey, usize>,
}

impl<E> Store<E> {
    fn new() -> Self {
        Self {
            entities: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn position(&self, key: &EntityKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    fn insert(&mut self, key: EntityKey, entity: E) {
        self.index.insert(key, self.entities.len());
        self.entities.push(entity);
    }

    fn remove(&mut self, key: &EntityKey) -> Option<E> {
        let position = self.index.remove(key)?;
        let entity = self.entities.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        Some(entity)
    }

    fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
    }
}

/// Thread-safe in-memory repository
///
/// Iteration follows insertion order. Data is lost when the process terminates.
/// A poisoned lock is recovered: writers only ever store fully-built values.
#[derive(Debug)]
pub struct InMemoryRepository<E>
where
    E: StorageEntity,
{
    store: RwLock<Store<E>>,
}

impl<E> Default for InMemoryRepository<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryRepository<E>
where
    E: StorageEntity,
{
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::new()),
        }
    }

    /// Creates a repository pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Result<Self, DomainError> {
        let repository = Self::new();

        for entity in entities {
            repository.add(entity)?;
        }

        Ok(repository)
    }

    fn read(&self) -> RwLockReadGuard<'_, Store<E>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store<E>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> Repository<E> for InMemoryRepository<E>
where
    E: StorageEntity,
{
    fn add(&self, entity: E) -> Result<E, DomainError> {
        let key = entity_key(&entity)?;
        let mut store = self.write();

        if store.position(&key).is_some() {
            return Err(DomainError::conflict(format!(
                "{} with id '{}' already exists",
                E::KIND,
                key
            )));
        }

        trace!(kind = E::KIND, id = %key, "Adding entity");
        store.insert(key, entity.clone());
        Ok(entity)
    }

    fn get_by_key(&self, key: &EntityKey) -> Option<E> {
        let store = self.read();
        store
            .position(key)
            .map(|position| store.entities[position].clone())
    }

    fn list_all(&self) -> Vec<E> {
        self.read().entities.clone()
    }

    fn update_by_key(&self, key: &EntityKey, patch: &Value) -> Result<E, DomainError> {
        let fields = patch_fields(patch)?;
        let mut store = self.write();

        let position = store.position(key).ok_or_else(|| not_found::<E>(key))?;
        let mut updated = store.entities[position].clone();

        for (name, value) in fields {
            if name == "id" {
                continue;
            }

            if !updated.set_attribute(name, value.clone())? {
                trace!(kind = E::KIND, id = %key, attribute = %name, "Ignoring unknown attribute");
            }
        }

        store.entities[position] = updated.clone();
        Ok(updated)
    }

    fn delete_by_key(&self, key: &EntityKey) -> bool {
        let removed = self.write().remove(key).is_some();

        if removed {
            trace!(kind = E::KIND, id = %key, "Deleted entity");
        }

        removed
    }

    fn clear(&self) {
        self.write().clear();
    }

    fn find_one(&self, attribute: &str, value: &Value) -> Result<Option<E>, DomainError> {
        ensure_attribute_name(attribute)?;

        Ok(self
            .read()
            .entities
            .iter()
            .find(|entity| attribute_matches(*entity, attribute, value))
            .cloned())
    }

    fn find_all(&self, attribute: &str, value: &Value) -> Result<Vec<E>, DomainError> {
        ensure_attribute_name(attribute)?;

        Ok(self
            .read()
            .entities
            .iter()
            .filter(|entity| attribute_matches(*entity, attribute, value))
            .cloned()
            .collect())
    }

    fn count(&self) -> usize {
        self.read().entities.len()
    }
}
