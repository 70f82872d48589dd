//! Configuration management for the contact book.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Nothing is printed while loading so stdout stays reserved for the
//! command conversation.

use crate::domain::{Clock, FixedClock, SystemClock};
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Number of contacts shown by "show contacts" when no count is given (default: 10)
    pub page_size: usize,

    /// Pinned date for birthday checks; `None` means the system date
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_PAGE_SIZE`: Default listing size, greater than 0 (default: 10)
    /// - `CONTACT_BOOK_TODAY`: Fixed date in `YYYY-MM-DD` form
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("CONTACT_BOOK_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", 10)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let today = Self::parse_env_date("CONTACT_BOOK_TODAY")?;

        Ok(Config {
            log_level,
            page_size,
            today,
        })
    }

    /// Build the clock described by this configuration.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional `YYYY-MM-DD` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(&val, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in YYYY-MM-DD form, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            page_size: 10,
            today: None,
        }
    }
}
