//! Place domain
//!
//! A place is a listing owned by a user, located by coordinates and linked
//! to the amenities it offers.

mod entity;
mod validation;

pub use entity::Place;
pub use validation::{
    validate_latitude, validate_longitude, validate_price, validate_title,
    PlaceValidationError, MAX_TITLE_LENGTH,
};
