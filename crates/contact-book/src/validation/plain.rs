//! Hand-written Field Checks
//!
//! Validation by parsing each field into its typed value.

use super::{FieldValidator, ValidationRules};
use crate::domain::{ContactDraft, Field, PersonName, PhoneNumber, ValidContact};
use crate::error::{FieldError, FieldErrors};

/// Validator backed by the `PersonName` / `PhoneNumber` parsers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainValidator {
    rules: ValidationRules,
}

impl PlainValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }
}

impl FieldValidator for PlainValidator {
    fn check(&self, field: Field, value: &str) -> Result<(), FieldError> {
        match field {
            Field::FirstName | Field::LastName => PersonName::parse(field, value, &self.rules).map(|_| ()),
            Field::PhoneNumber => PhoneNumber::parse(value, &self.rules).map(|_| ()),
        }
    }

    fn accept(&self, draft: &ContactDraft) -> Result<ValidContact, FieldErrors> {
        ValidContact::parse(draft, &self.rules)
    }
}
