//! User domain
//!
//! This module provides the user entity and its field validation rules.

mod entity;
mod validation;

pub use entity::User;
pub use validation::{
    validate_email, validate_first_name, validate_last_name, UserValidationError,
    MAX_NAME_LENGTH,
};
