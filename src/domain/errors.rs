//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is not at least three ASCII letters.
    InvalidName(String),

    /// The provided phone number matches neither accepted shape.
    InvalidPhone(String),

    /// The provided birthday is not a `DD/MM/YYYY` calendar date.
    InvalidBirthdayFormat(String),

    /// The birthday parsed but falls outside the accepted age window.
    BirthdayOutOfRange {
        value: String,
        earliest: String,
        latest: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name: {} (use at least 3 latin letters, nothing else)",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {} (expected 10 digits or +12 digits)",
                phone
            ),
            Self::InvalidBirthdayFormat(value) => {
                write!(f, "Invalid birthday: {} (expected DD/MM/YYYY)", value)
            }
            Self::BirthdayOutOfRange {
                value,
                earliest,
                latest,
            } => write!(
                f,
                "Birthday {} is out of range (must be from {} and before {})",
                value, earliest, latest
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert!(err.to_string().starts_with("Invalid phone number: 123"));

        let err = ValidationError::BirthdayOutOfRange {
            value: "01/01/2020".to_string(),
            earliest: "17/10/1926".to_string(),
            latest: "17/10/2018".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Birthday 01/01/2020 is out of range (must be from 17/10/1926 and before 17/10/2018)"
        );
    }
}
