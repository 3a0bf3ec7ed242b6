//! Contact Book Core
//!
//! State, validation and ordering behind the contact form. Has no UI
//! dependencies so it can be tested natively.

pub mod book;
pub mod domain;
pub mod error;
pub mod form;
pub mod validation;

mod tests;

pub use book::ContactBook;
pub use domain::{normalize_phone, Contact, ContactDraft, Field, ValidContact};
pub use error::{DuplicateError, FieldError, FieldErrors, SubmitError};
pub use form::ContactForm;
pub use validation::{FieldValidator, FormVariant, ValidationRules, Validator};
