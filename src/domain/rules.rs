//! Validation rules shared by the field value objects.

use super::errors::ValidationError;
use chrono::{Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Youngest accepted age, in whole years.
pub const MIN_AGE_YEARS: u32 = 8;

/// Oldest accepted age, in whole years.
pub const MAX_AGE_YEARS: u32 = 100;

/// Format used to read and print birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d/%m/%Y";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{3,}$").expect("name pattern is valid"));

// Fully anchored and ASCII-only: a 10-digit run inside a longer number is
// rejected, and so are non-latin digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]{10}|\+?[0-9]{12})$").expect("phone pattern is valid"));

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("birthday pattern is valid")
});

/// Check a name: latin letters only, at least three of them.
pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    if NAME_REGEX.is_match(raw) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName(raw.to_string()))
    }
}

/// Check a phone: exactly 10 digits, or an optional `+` and exactly 12 digits.
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(raw) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(raw.to_string()))
    }
}

/// Parse a `DD/MM/YYYY` birthday and check it against the age window
/// relative to `today`.
pub fn validate_birthday(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if !BIRTHDAY_REGEX.is_match(raw) {
        return Err(ValidationError::InvalidBirthdayFormat(raw.to_string()));
    }

    let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthdayFormat(raw.to_string()))?;

    let (earliest, latest) = birthday_window(today);
    if date < earliest || date >= latest {
        return Err(ValidationError::BirthdayOutOfRange {
            value: raw.to_string(),
            earliest: earliest.format(BIRTHDAY_FORMAT).to_string(),
            latest: latest.format(BIRTHDAY_FORMAT).to_string(),
        });
    }

    Ok(date)
}

/// The accepted birthday window `[today - 100y, today - 8y)`.
///
/// Years are subtracted as whole months with chrono's `checked_sub_months`,
/// which clamps to the last day of the target month: from Feb 29 the bound
/// lands on Feb 28 of a non-leap year.
pub fn birthday_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        years_before(today, MAX_AGE_YEARS),
        years_before(today, MIN_AGE_YEARS),
    )
}

fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}
