//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("First name exceeds maximum length of {0} characters")]
    FirstNameTooLong(usize),

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Last name exceeds maximum length of {0} characters")]
    LastNameTooLong(usize),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
}

pub const MAX_NAME_LENGTH: usize = 50;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Validate a first name
///
/// Rules:
/// - Cannot be empty or whitespace
/// - Maximum 50 characters
pub fn validate_first_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyFirstName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::FirstNameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a last name, same rules as the first name
pub fn validate_last_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyLastName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::LastNameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_first_name("Ada").is_ok());
        assert!(validate_last_name("Lovelace").is_ok());
    }

    #[test]
    fn test_empty_names() {
        assert_eq!(validate_first_name(""), Err(UserValidationError::EmptyFirstName));
        assert_eq!(validate_last_name("   "), Err(UserValidationError::EmptyLastName));
    }

    #[test]
    fn test_name_too_long() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            validate_first_name(&long),
            Err(UserValidationError::FirstNameTooLong(MAX_NAME_LENGTH))
        );
        assert!(validate_first_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
        assert!(matches!(
            validate_email("not-an-email"),
            Err(UserValidationError::InvalidEmail(_))
        ));
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.com").is_err());
    }
}
