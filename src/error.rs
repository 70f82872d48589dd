//! Error types for the contact book.
//!
//! Field-level failures live in [`crate::domain::ValidationError`]; this module
//! wraps them together with lookup and input errors using `thiserror`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced by contact book operations and the command layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no phone with the given value
    #[error("Phone number {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// Command arguments are structurally wrong
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The contact already has a birthday
    #[error("Birthday of {0} is already set")]
    BirthdayAlreadySet(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
