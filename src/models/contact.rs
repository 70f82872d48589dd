//! Contact record: a name, an ordered list of phones and an optional birthday.

use crate::domain::{Birthday, Clock, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One person's record in the contact book.
///
/// The name is the identity key and never changes after construction.
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Snapshot of a contact used when listing the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    pub name: String,
    pub phones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl Contact {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builder-style helper appending an initial phone.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Builder-style helper setting the initial birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Phone at a 1-based position, as shown in listings.
    pub fn phone(&self, position: usize) -> Option<&Phone> {
        position.checked_sub(1).and_then(|idx| self.phones.get(idx))
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: Phone) {
        debug!(name = %self.name, phone = %phone, "phone added");
        self.phones.push(phone);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The new value goes through the phone validator; on failure nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// `BookError::PhoneNotFound` if no phone equals `old`,
    /// `BookError::Validation` if `new` is not a valid phone.
    pub fn swap_number(&mut self, old: &str, new: &str) -> BookResult<&Phone> {
        let name = &self.name;
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: name.to_string(),
                phone: old.to_string(),
            })?;

        phone.set_value(new)?;
        debug!(name = %name, old, new, "phone swapped");
        Ok(phone)
    }

    /// Remove the first phone equal to `value` and return it.
    ///
    /// # Errors
    ///
    /// `BookError::PhoneNotFound` if no phone equals `value`.
    pub fn delete_number(&mut self, value: &str) -> BookResult<Phone> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: value.to_string(),
            })?;

        let removed = self.phones.remove(idx);
        debug!(name = %self.name, phone = %removed, "phone deleted");
        Ok(removed)
    }

    /// Set the birthday if none is set yet.
    ///
    /// # Errors
    ///
    /// `BookError::BirthdayAlreadySet` if the contact already has one; the
    /// stored birthday is kept.
    pub fn add_birthday(&mut self, birthday: Birthday) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name.to_string()));
        }
        debug!(name = %self.name, birthday = %birthday, "birthday set");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days from `today` until the next birthday, or `None` if unset.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|b| (b.next_occurrence(today) - today).num_days())
    }

    /// Human-readable countdown to the next birthday.
    pub fn days_to_next_birthday(&self, clock: &dyn Clock) -> String {
        match self.days_until_birthday(clock.today()) {
            Some(0) => format!("{}'s birthday is today!", self.name),
            Some(days) => format!("{} days left until {}'s birthday.", days, self.name),
            None => format!("Birthday of {} is not set.", self.name),
        }
    }

    /// Snapshot of this contact for listings.
    pub fn summary(&self) -> ContactSummary {
        ContactSummary {
            name: self.name.to_string(),
            phones: self.phones.iter().map(|p| p.to_string()).collect(),
            birthday: self.birthday.as_ref().map(|b| b.to_string()),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}

impl fmt::Display for ContactSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}, phones: {}", self.name, self.phones.join(", "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedClock, ValidationError};

    fn today() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn contact_with(phones: &[&str]) -> Contact {
        let mut contact = Contact::new(Name::new("Alice").unwrap());
        for p in phones {
            contact.add_phone(Phone::new(*p).unwrap());
        }
        contact
    }

    fn phone_values(contact: &Contact) -> Vec<&str> {
        contact.phones().iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn test_new_contact_is_empty() {
        let contact = Contact::new(Name::new("Alice").unwrap());
        assert_eq!(contact.name().as_str(), "Alice");
        assert!(contact.phones().is_empty());
        assert!(contact.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let contact = contact_with(&["0501234567", "+380501234567", "0501234567"]);
        assert_eq!(
            phone_values(&contact),
            vec!["0501234567", "+380501234567", "0501234567"]
        );
        assert_eq!(contact.phone(2).unwrap().as_str(), "+380501234567");
        assert!(contact.phone(0).is_none());
        assert!(contact.phone(4).is_none());
    }

    #[test]
    fn test_swap_number_keeps_position() {
        let mut contact = contact_with(&["0501234567", "0671234567", "0501234567"]);
        let swapped = contact.swap_number("0501234567", "0991234567").unwrap();
        assert_eq!(swapped.as_str(), "0991234567");
        assert_eq!(
            phone_values(&contact),
            vec!["0991234567", "0671234567", "0501234567"]
        );
    }

    #[test]
    fn test_swap_number_not_found() {
        let mut contact = contact_with(&["0501234567"]);
        let result = contact.swap_number("0000000000", "0991234567");
        assert_eq!(
            result,
            Err(BookError::PhoneNotFound {
                name: "Alice".to_string(),
                phone: "0000000000".to_string(),
            })
        );
        assert_eq!(phone_values(&contact), vec!["0501234567"]);
    }

    #[test]
    fn test_swap_number_invalid_new_value() {
        let mut contact = contact_with(&["0501234567"]);
        let result = contact.swap_number("0501234567", "12");
        assert_eq!(
            result,
            Err(BookError::Validation(ValidationError::InvalidPhone(
                "12".to_string()
            )))
        );
        assert_eq!(phone_values(&contact), vec!["0501234567"]);
    }

    #[test]
    fn test_delete_number_removes_first_match() {
        let mut contact = contact_with(&["0501234567", "0671234567", "0501234567"]);
        let removed = contact.delete_number("0501234567").unwrap();
        assert_eq!(removed.as_str(), "0501234567");
        assert_eq!(phone_values(&contact), vec!["0671234567", "0501234567"]);
    }

    #[test]
    fn test_delete_number_not_found() {
        let mut empty = contact_with(&[]);
        assert!(matches!(
            empty.delete_number("0501234567"),
            Err(BookError::PhoneNotFound { .. })
        ));

        let mut contact = contact_with(&["0671234567"]);
        assert!(contact.delete_number("0501234567").is_err());
        assert_eq!(phone_values(&contact), vec!["0671234567"]);
    }

    #[test]
    fn test_add_birthday_only_once() {
        let mut contact = contact_with(&[]);
        let first = Birthday::with_clock("15/06/1990", &today()).unwrap();
        let second = Birthday::with_clock("01/01/1980", &today()).unwrap();

        contact.add_birthday(first).unwrap();
        assert_eq!(
            contact.add_birthday(second),
            Err(BookError::BirthdayAlreadySet("Alice".to_string()))
        );
        assert_eq!(contact.birthday().unwrap().as_str(), "15/06/1990");
    }

    #[test]
    fn test_days_to_next_birthday() {
        let contact = contact_with(&[])
            .with_birthday(Birthday::with_clock("15/06/1990", &today()).unwrap());

        assert_eq!(contact.days_until_birthday(today().0), Some(166));
        assert_eq!(
            contact.days_to_next_birthday(&today()),
            "166 days left until Alice's birthday."
        );
    }

    #[test]
    fn test_days_to_next_birthday_rolls_over_and_today() {
        let contact = contact_with(&[])
            .with_birthday(Birthday::with_clock("15/06/1990", &today()).unwrap());

        let on_day = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(contact.days_to_next_birthday(&on_day), "Alice's birthday is today!");

        let after = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        assert_eq!(contact.days_until_birthday(after), Some(364));
    }

    #[test]
    fn test_leap_day_birthday_in_non_leap_year() {
        let contact = contact_with(&[])
            .with_birthday(Birthday::with_clock("29/02/2000", &today()).unwrap());
        let feb_28 = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(contact.days_until_birthday(feb_28), Some(0));
    }

    #[test]
    fn test_days_to_next_birthday_unset() {
        let contact = contact_with(&["0501234567"]);
        assert_eq!(contact.days_until_birthday(today().0), None);
        assert_eq!(
            contact.days_to_next_birthday(&today()),
            "Birthday of Alice is not set."
        );
    }

    #[test]
    fn test_display() {
        let contact = contact_with(&["0501234567", "+380501234567"]);
        assert_eq!(
            contact.to_string(),
            "name: Alice, phones: 0501234567, +380501234567"
        );

        let contact =
            contact.with_birthday(Birthday::with_clock("15/06/1990", &today()).unwrap());
        assert_eq!(
            contact.to_string(),
            "name: Alice, phones: 0501234567, +380501234567, birthday: 15/06/1990"
        );
    }

    #[test]
    fn test_serialization() {
        let contact = contact_with(&["0501234567"]);
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Alice", "phones": ["0501234567"] })
        );

        let back: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(back, contact);

        let bad = serde_json::json!({ "name": "Alice", "phones": ["123"] });
        assert!(serde_json::from_value::<Contact>(bad).is_err());
    }
}
