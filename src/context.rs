//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use contact_book::{FormVariant, ValidationRules};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    /// Limits both form variants validate against
    pub rules: ValidationRules,
    /// Variant currently shown - read
    pub active_variant: ReadSignal<FormVariant>,
    /// Variant currently shown - write
    set_active_variant: WriteSignal<FormVariant>,
}

impl FormContext {
    pub fn new(
        rules: ValidationRules,
        active_variant: (ReadSignal<FormVariant>, WriteSignal<FormVariant>),
    ) -> Self {
        Self {
            rules,
            active_variant: active_variant.0,
            set_active_variant: active_variant.1,
        }
    }

    /// Switch the visible form
    pub fn show(&self, variant: FormVariant) {
        if self.active_variant.get_untracked() != variant {
            self.set_active_variant.set(variant);
        }
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
