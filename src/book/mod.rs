//! In-memory contact store keyed by name.
//!
//! [`ContactBook`] owns its contacts and only exposes vetted operations, so
//! callers cannot slip an unvalidated value in through the underlying map.

use crate::error::{BookError, BookResult};
use crate::models::{Contact, ContactSummary};
use std::collections::HashMap;
use tracing::debug;

/// The keyed collection of all contacts for a session.
///
/// Enumeration follows insertion order. Re-adding a name replaces the stored
/// contact but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: HashMap<String, Contact>,
    order: Vec<String>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book seeded with one contact.
    pub fn with_contact(contact: Contact) -> Self {
        let mut book = Self::new();
        book.add_contact(contact);
        book
    }

    /// Insert a contact under its name, replacing any previous one.
    pub fn add_contact(&mut self, contact: Contact) {
        let key = contact.name().to_string();
        if self.contacts.insert(key.clone(), contact).is_some() {
            debug!(name = %key, "contact overwritten");
        } else {
            debug!(name = %key, "contact added");
            self.order.push(key);
        }
    }

    /// Look up a contact by exact name.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound` if no contact has this name.
    pub fn get(&self, name: &str) -> BookResult<&Contact> {
        self.contacts
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Mutable lookup by exact name.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound` if no contact has this name.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut Contact> {
        self.contacts
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Lazily yield up to `limit` `(name, summary)` pairs in insertion order.
    pub fn enumerate(&self, limit: usize) -> Contacts<'_> {
        Contacts {
            book: self,
            keys: self.order.iter(),
            remaining: limit,
        }
    }
}

/// Iterator returned by [`ContactBook::enumerate`].
#[derive(Debug)]
pub struct Contacts<'a> {
    book: &'a ContactBook,
    keys: std::slice::Iter<'a, String>,
    remaining: usize,
}

impl<'a> Iterator for Contacts<'a> {
    type Item = (&'a str, ContactSummary);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.keys.next()?;
        let contact = self.book.contacts.get(key)?;
        self.remaining -= 1;
        Some((key.as_str(), contact.summary()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.keys.len().min(self.remaining);
        (upper, Some(upper))
    }
}
