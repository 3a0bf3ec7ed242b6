//! Form Errors
//!
//! Field-scoped validation failures and the form-level duplicate rejection.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::domain::Field;

/// A single field failing one of its rules
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldError {
    #[error("{} is required", .field.label())]
    Required { field: Field },
    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },
    #[error("{} can only contain letters and spaces", .field.label())]
    NotAlphabetic { field: Field },
    #[error("{} can only contain digits", .field.label())]
    NotDigits { field: Field },
    #[error("{} must be exactly {expected} digits", .field.label())]
    WrongLength { field: Field, expected: usize, actual: usize },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required { field }
            | FieldError::TooShort { field, .. }
            | FieldError::NotAlphabetic { field }
            | FieldError::NotDigits { field }
            | FieldError::WrongLength { field, .. } => *field,
        }
    }
}

/// First failing rule per field. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first one recorded for a field wins
    pub fn insert(&mut self, error: FieldError) {
        self.0.entry(error.field()).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.values()
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// Form-level rejection: the draft matches a committed contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("This contact already exists!")]
#[serde(rename_all = "camelCase")]
pub struct DuplicateError {
    /// ID of the committed contact the draft collides with
    pub existing_id: u32,
}

/// Why a submit attempt did not commit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) are invalid", .0.len())]
    Invalid(FieldErrors),
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),
}
