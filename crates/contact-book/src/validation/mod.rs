//! Field Validation
//!
//! Two interchangeable ways of enforcing the same rule set: hand-written
//! parsers and a declarative schema.

mod plain;
mod rules;
mod schema;

use serde::{Deserialize, Serialize};

use crate::domain::{ContactDraft, Field, ValidContact};
use crate::error::{FieldError, FieldErrors};

pub use plain::PlainValidator;
pub use rules::ValidationRules;
pub use schema::{FieldSchema, PatternKind, Rule, Schema};

/// Per-field validation contract
pub trait FieldValidator {
    /// Check one field value, returning its first failing rule
    fn check(&self, field: Field, value: &str) -> Result<(), FieldError>;

    /// Check every field of the draft
    fn validate(&self, draft: &ContactDraft) -> FieldErrors {
        Field::ALL
            .iter()
            .filter_map(|field| self.check(*field, draft.get(*field)).err())
            .collect()
    }

    /// Turn a draft into typed values, or report every invalid field
    fn accept(&self, draft: &ContactDraft) -> Result<ValidContact, FieldErrors> {
        let errors = self.validate(draft);
        if errors.is_empty() {
            Ok(ValidContact::trusted(draft))
        } else {
            Err(errors)
        }
    }
}

/// How a form instance wires its validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Controlled inputs with hand-written checks
    #[default]
    Plain,
    /// Inputs registered against a declarative schema
    Schema,
}

impl FormVariant {
    pub const ALL: [FormVariant; 2] = [FormVariant::Plain, FormVariant::Schema];

    pub fn label(&self) -> &'static str {
        match self {
            FormVariant::Plain => "Contact Form",
            FormVariant::Schema => "Contact Form (Schema)",
        }
    }
}

/// Validator selected by a [`FormVariant`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    Plain(PlainValidator),
    Schema(Schema),
}

impl Validator {
    pub fn for_variant(variant: FormVariant, rules: ValidationRules) -> Self {
        match variant {
            FormVariant::Plain => Validator::Plain(PlainValidator::new(rules)),
            FormVariant::Schema => Validator::Schema(Schema::contact(&rules)),
        }
    }
}

impl FieldValidator for Validator {
    fn check(&self, field: Field, value: &str) -> Result<(), FieldError> {
        match self {
            Validator::Plain(v) => v.check(field, value),
            Validator::Schema(v) => v.check(field, value),
        }
    }

    fn accept(&self, draft: &ContactDraft) -> Result<ValidContact, FieldErrors> {
        match self {
            Validator::Plain(v) => v.accept(draft),
            Validator::Schema(v) => v.accept(draft),
        }
    }
}
