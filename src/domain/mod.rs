//! Domain value objects and validation rules.
//!
//! Every contact field is a validated value object: it can only be built
//! from, or reset to, a raw string that passes the rule for its kind. A
//! rejected write leaves the stored value untouched. Names have no setter
//! since they are the contact's identity key.

pub mod birthday;
pub mod clock;
pub mod errors;
pub mod name;
pub mod phone;
pub mod rules;

pub use birthday::Birthday;
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
