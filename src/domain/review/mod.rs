//! Review domain

mod entity;

pub use entity::{
    validate_rating, validate_text, Review, ReviewValidationError, MAX_RATING, MIN_RATING,
};
