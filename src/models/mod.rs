//! Contact records.

pub mod contact;

pub use contact::{Contact, ContactSummary};
