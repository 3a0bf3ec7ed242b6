//! Domain Layer
//!
//! Drafts, parsed field values and committed contacts.

mod contact;
mod draft;

pub use contact::{Contact, PersonName, PhoneNumber, ValidContact};
pub use draft::{normalize_phone, ContactDraft, Field};
