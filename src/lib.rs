//! Contact Book - an in-memory personal contact manager.
//!
//! Contacts hold a validated name, an ordered list of validated phone
//! numbers and an optional birthday. A numbered command menu drives the
//! book from the console.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects, validation rules and clocks
//! - **models**: The contact record
//! - **book**: The name-keyed contact store
//! - **commands**: Menu commands, argument parsing and execution
//! - **error**: Error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{ContactBook, Contacts};
pub use commands::{Command, CommandProcessor, Outcome};
pub use config::Config;
pub use domain::{Birthday, Clock, FixedClock, Name, Phone, SystemClock, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{Contact, ContactSummary};
