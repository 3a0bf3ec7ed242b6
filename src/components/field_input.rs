//! Field Input Component
//!
//! Labeled controlled input with its inline error.

use leptos::prelude::*;

use contact_book::Field;

use crate::models::input_class;
use crate::store::{FormHandle, FormViewStoreFields};

/// Controlled input bound to one draft field
#[component]
pub fn FieldInput(
    handle: FormHandle,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let view_store = handle.view;
    let error = move || view_store.errors().read().get(field).map(|e| e.to_string());

    view! {
        <div class="input-group">
            <label class="form-label" for=field.as_str()>{field.label()} ":"</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                class=move || input_class(error().is_some())
                required=true
                prop:value=move || view_store.draft().read().get(field).to_string()
                on:input=move |ev| handle.input(field, &event_target_value(&ev))
            />
            {move || error().map(|msg| view! { <span class="error-message">{msg}</span> })}
        </div>
    }
}
