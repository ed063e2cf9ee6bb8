//! Amenity domain

mod entity;

pub use entity::{validate_amenity_name, Amenity, AmenityValidationError, MAX_AMENITY_NAME_LENGTH};
