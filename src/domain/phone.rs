//! Phone value object.

use super::errors::ValidationError;
use super::rules::validate_phone;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated phone number.
///
/// Accepted shapes are exactly 10 digits (`0501234567`) or an optional
/// `+` followed by exactly 12 digits (`+380501234567`).
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value has any other shape.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        validate_phone(&phone)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Replace the stored number, validating it first.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and keeps the old number if
    /// `raw` has any other shape.
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        validate_phone(raw)?;
        self.0 = raw.to_string();
        Ok(())
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
