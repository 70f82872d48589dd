//! Birthday value object.

use super::clock::{Clock, SystemClock};
use super::errors::ValidationError;
use super::rules::validate_birthday;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated birthday in `DD/MM/YYYY` form.
///
/// The date must fall in `[today - 100 years, today - 8 years)`. Validation
/// depends on the current date, so every constructor and setter has a
/// variant taking an explicit [`Clock`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::{Birthday, FixedClock};
///
/// let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// let birthday = Birthday::with_clock("15/06/1990", &clock).unwrap();
/// assert_eq!(birthday.as_str(), "15/06/1990");
/// assert!(Birthday::with_clock("15/06/2020", &clock).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validated against the system date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` for anything that is
    /// not a `DD/MM/YYYY` calendar date, and
    /// `ValidationError::BirthdayOutOfRange` for dates outside the age window.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_clock(raw, &SystemClock)
    }

    /// Create a new Birthday, validated against `clock`.
    pub fn with_clock(raw: impl Into<String>, clock: &dyn Clock) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let date = validate_birthday(&raw, clock.today())?;
        Ok(Self { raw, date })
    }

    /// Replace the stored value, validated against the system date.
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.set_value_with_clock(raw, &SystemClock)
    }

    /// Replace the stored value, validating against `clock`.
    pub fn set_value_with_clock(
        &mut self,
        raw: &str,
        clock: &dyn Clock,
    ) -> Result<(), ValidationError> {
        self.date = validate_birthday(raw, clock.today())?;
        self.raw = raw.to_string();
        Ok(())
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The next anniversary on or after `today`.
    ///
    /// A Feb 29 birthday is celebrated on Feb 28 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.date)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
