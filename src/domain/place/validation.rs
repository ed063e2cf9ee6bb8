//! Place validation utilities

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title exceeds maximum length of {0} characters")]
    TitleTooLong(usize),

    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("Latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),
}

pub const MAX_TITLE_LENGTH: usize = 100;

pub fn validate_title(title: &str) -> Result<(), PlaceValidationError> {
    if title.trim().is_empty() {
        return Err(PlaceValidationError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(PlaceValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }

    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), PlaceValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(PlaceValidationError::InvalidPrice(price));
    }
    Ok(())
}

pub fn validate_latitude(latitude: f64) -> Result<(), PlaceValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(PlaceValidationError::LatitudeOutOfRange(latitude));
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64) -> Result<(), PlaceValidationError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(PlaceValidationError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Cozy loft").is_ok());
        assert_eq!(validate_title(""), Err(PlaceValidationError::EmptyTitle));
        assert_eq!(
            validate_title(&"t".repeat(101)),
            Err(PlaceValidationError::TitleTooLong(MAX_TITLE_LENGTH))
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(120.5).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(f64::NAN).is_err());

        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.5).is_err());
    }
}
