//! Plain Contact Form Component
//!
//! Controlled inputs, one explicit handler per field. Validation runs in
//! the form state on every keystroke.

use leptos::prelude::*;

use contact_book::Field;

use crate::components::{ContactTable, FieldInput, FormNotice};
use crate::models::submit_class;
use crate::store::{FormHandle, FormViewStoreFields};

#[component]
pub fn PlainContactForm(handle: FormHandle) -> impl IntoView {
    let view_store = handle.view;
    let can_submit = move || view_store.can_submit().get();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        handle.submit();
    };

    view! {
        <div class="form-container">
            <h2 class="form-title">{handle.variant().label()}</h2>

            <form class="contact-form" on:submit=on_submit novalidate=true>
                <div class="input-row">
                    <FieldInput handle=handle field=Field::FirstName />
                    <FieldInput handle=handle field=Field::LastName />
                </div>

                <div class="input-row">
                    <FieldInput handle=handle field=Field::PhoneNumber input_type="tel" />
                    <div class="input-group"></div>
                </div>

                <FormNotice handle=handle />

                <button
                    type="submit"
                    class=move || submit_class(can_submit())
                    disabled=move || !can_submit()
                >
                    "Submit"
                </button>
            </form>

            <ContactTable handle=handle />
        </div>
    }
}
