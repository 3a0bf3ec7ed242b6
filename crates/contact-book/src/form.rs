//! Form State Holder
//!
//! One `ContactForm` per rendered form. All state changes go through
//! `input` and `submit`; the UI only reads projections.

use std::collections::BTreeSet;

use crate::book::ContactBook;
use crate::domain::{Contact, ContactDraft, Field};
use crate::error::{DuplicateError, FieldError, FieldErrors, SubmitError};
use crate::validation::{FieldValidator, FormVariant, ValidationRules, Validator};

#[derive(Debug, Clone)]
pub struct ContactForm {
    variant: FormVariant,
    validator: Validator,
    draft: ContactDraft,
    /// Validity of the current draft, recomputed on every change
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    notice: Option<DuplicateError>,
    book: ContactBook,
}

impl ContactForm {
    pub fn new(variant: FormVariant, rules: ValidationRules) -> Self {
        let validator = Validator::for_variant(variant, rules);
        let draft = ContactDraft::default();
        let errors = validator.validate(&draft);
        Self {
            variant,
            validator,
            draft,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
            notice: None,
            book: ContactBook::new(),
        }
    }

    /// Apply a keystroke to one field and revalidate
    pub fn input(&mut self, field: Field, value: &str) {
        self.draft.set(field, value);
        self.touched.insert(field);
        self.notice = None;
        self.errors = self.validator.validate(&self.draft);
    }

    /// Validate, check for duplicates and commit. On success the draft is reset.
    pub fn submit(&mut self) -> Result<Contact, SubmitError> {
        self.submit_attempted = true;

        let valid = match self.validator.accept(&self.draft) {
            Ok(valid) => valid,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };

        let contact = match self.book.commit(valid) {
            Ok(contact) => contact.clone(),
            Err(duplicate) => {
                self.notice = Some(duplicate);
                return Err(duplicate.into());
            }
        };

        log::debug!(
            "Form submitted: {}",
            serde_json::to_string(&contact).unwrap_or_else(|_| contact.full_name())
        );
        self.reset();
        Ok(contact)
    }

    /// Clear the draft and everything shown about it
    pub fn reset(&mut self) {
        self.draft.clear();
        self.touched.clear();
        self.submit_attempted = false;
        self.notice = None;
        self.errors = self.validator.validate(&self.draft);
    }

    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error to show under a field: only once it was edited or a submit was tried
    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn visible_errors(&self) -> FieldErrors {
        Field::ALL
            .iter()
            .filter_map(|field| self.visible_error(*field).cloned())
            .collect()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&DuplicateError> {
        self.notice.as_ref()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Display rows, sorted
    pub fn sorted_contacts(&self) -> Vec<Contact> {
        self.book.sorted().into_iter().cloned().collect()
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }
}
