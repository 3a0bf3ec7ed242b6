//! Form State Store
//!
//! Each form owns a `ContactForm` plus a reactive_stores `Store` holding
//! what the view renders. Handlers mutate the form, then push the changed
//! projections into the store so only the affected parts re-render.

use leptos::prelude::*;
use reactive_stores::Store;

use contact_book::{Contact, ContactDraft, ContactForm, Field, FieldErrors, FormVariant, ValidationRules};

/// Render state of one form, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormView {
    /// Current input values
    pub draft: ContactDraft,
    /// Inline errors for touched fields
    pub errors: FieldErrors,
    /// Form-level banner (duplicate rejection)
    pub notice: Option<String>,
    /// Committed contacts, sorted for display
    pub rows: Vec<Contact>,
    /// Whether the submit button is enabled
    pub can_submit: bool,
}

/// Handle to one form instance; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct FormHandle {
    form: StoredValue<ContactForm>,
    pub view: Store<FormView>,
}

impl FormHandle {
    pub fn new(variant: FormVariant, rules: ValidationRules) -> Self {
        let form = ContactForm::new(variant, rules);
        let view = Store::new(FormView::default());
        store_sync(&form, &view);
        Self {
            form: StoredValue::new(form),
            view,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.form.with_value(|form| form.variant())
    }

    /// Feed a raw input value into the form
    pub fn input(&self, field: Field, value: &str) {
        self.form.update_value(|form| form.input(field, value));
        self.sync();
    }

    /// Attempt a submit; returns true when a contact was committed
    pub fn submit(&self) -> bool {
        let mut committed = false;
        self.form.update_value(|form| committed = form.submit().is_ok());
        self.sync();
        committed
    }

    fn sync(&self) {
        let view = self.view;
        self.form.with_value(|form| store_sync(form, &view));
    }
}

// ========================
// Store Helper Functions
// ========================

/// Write every projection that changed since the last sync
fn store_sync(form: &ContactForm, view: &Store<FormView>) {
    let draft = form.draft();
    if *view.draft().read_untracked() != *draft {
        *view.draft().write() = draft.clone();
    }

    let errors = form.visible_errors();
    if *view.errors().read_untracked() != errors {
        *view.errors().write() = errors;
    }

    let notice = form.notice().map(|n| n.to_string());
    if *view.notice().read_untracked() != notice {
        *view.notice().write() = notice;
    }

    let rows = form.sorted_contacts();
    if *view.rows().read_untracked() != rows {
        *view.rows().write() = rows;
    }

    let can_submit = form.can_submit();
    if *view.can_submit().read_untracked() != can_submit {
        *view.can_submit().write() = can_submit;
    }
}
