//! Place entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::storage::{assign, to_attribute, EntityBase, StorageEntity};
use crate::domain::DomainError;

/// A rentable place listed by its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    base: EntityBase,
    title: String,
    #[serde(default)]
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    owner_id: String,
    #[serde(default)]
    amenity_ids: Vec<String>,
}

impl Place {
    pub fn new(
        title: impl Into<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            base: EntityBase::new(),
            title: title.into(),
            description: String::new(),
            price,
            latitude,
            longitude,
            owner_id: owner_id.into(),
            amenity_ids: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.base.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amenity_ids(mut self, amenity_ids: Vec<String>) -> Self {
        self.amenity_ids = amenity_ids;
        self
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn amenity_ids(&self) -> &[String] {
        &self.amenity_ids
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at
    }
}

impl StorageEntity for Place {
    const KIND: &'static str = "Place";

    fn key(&self) -> &str {
        &self.base.id
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "title" => to_attribute(&self.title),
            "description" => to_attribute(&self.description),
            "price" => to_attribute(&self.price),
            "latitude" => to_attribute(&self.latitude),
            "longitude" => to_attribute(&self.longitude),
            "owner_id" => to_attribute(&self.owner_id),
            "amenity_ids" => to_attribute(&self.amenity_ids),
            _ => self.base.attribute(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<bool, DomainError> {
        match name {
            "title" => assign(&mut self.title, name, value),
            "description" => assign(&mut self.description, name, value),
            "price" => assign(&mut self.price, name, value),
            "latitude" => assign(&mut self.latitude, name, value),
            "longitude" => assign(&mut self.longitude, name, value),
            "owner_id" => assign(&mut self.owner_id, name, value),
            "amenity_ids" => assign(&mut self.amenity_ids, name, value),
            _ => self.base.set_attribute(name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_place() -> Place {
        Place::new("Loft", 80.0, 48.85, 2.35, "owner-1").with_id("p1")
    }

    #[test]
    fn test_place_defaults() {
        let place = create_test_place();

        assert_eq!(place.description(), "");
        assert!(place.amenity_ids().is_empty());
        assert_eq!(place.owner_id(), "owner-1");
    }

    #[test]
    fn test_numeric_attribute_accepts_integers() {
        let mut place = create_test_place();

        assert!(place.set_attribute("price", json!(100)).unwrap());
        assert_eq!(place.price(), 100.0);
    }

    #[test]
    fn test_amenity_ids_attribute() {
        let mut place = create_test_place();

        assert!(place.set_attribute("amenity_ids", json!(["a1", "a2"])).unwrap());
        assert_eq!(place.attribute("amenity_ids"), Some(json!(["a1", "a2"])));

        let result = place.set_attribute("amenity_ids", json!("a1"));
        assert!(result.is_err());
    }
}
