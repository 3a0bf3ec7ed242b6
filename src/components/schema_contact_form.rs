//! Schema Contact Form Component
//!
//! Inputs are registered against the declarative schema: the markup of
//! each field (type, constraint attributes) is derived from its rules.

use leptos::prelude::*;

use contact_book::validation::{FieldSchema, PatternKind, Rule, Schema};

use crate::components::{ContactTable, FormNotice};
use crate::context::use_form_context;
use crate::models::{input_class, submit_class};
use crate::store::{FormHandle, FormViewStoreFields};

/// HTML attributes a field's rules translate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAttrs {
    pub input_type: &'static str,
    pub input_mode: Option<&'static str>,
    pub required: bool,
    pub min_length: Option<String>,
}

pub fn input_attrs(schema: &FieldSchema) -> InputAttrs {
    let mut attrs = InputAttrs {
        input_type: "text",
        input_mode: None,
        required: false,
        min_length: None,
    };
    for rule in &schema.rules {
        match rule {
            Rule::Required => attrs.required = true,
            Rule::MinChars(n) => attrs.min_length = Some(n.to_string()),
            // Only a lower bound: the raw text may hold separators that are stripped later
            Rule::ExactLen(n) => attrs.min_length = Some(n.to_string()),
            Rule::Matches(PatternKind::Digits) => {
                attrs.input_type = "tel";
                attrs.input_mode = Some("numeric");
            }
            Rule::Matches(PatternKind::LettersAndSpaces) => {}
        }
    }
    attrs
}

/// One registered input
#[component]
fn SchemaField(handle: FormHandle, schema: FieldSchema) -> impl IntoView {
    let view_store = handle.view;
    let field = schema.field;
    let attrs = input_attrs(&schema);
    let error = move || view_store.errors().read().get(field).map(|e| e.to_string());

    view! {
        <div class="input-group">
            <label class="form-label" for=format!("schema-{}", field.as_str())>{field.label()} ":"</label>
            <input
                id=format!("schema-{}", field.as_str())
                name=field.as_str()
                type=attrs.input_type
                inputmode=attrs.input_mode
                required=attrs.required
                minlength=attrs.min_length
                aria-invalid=move || if error().is_some() { "true" } else { "false" }
                class=move || input_class(error().is_some())
                prop:value=move || view_store.draft().read().get(field).to_string()
                on:input=move |ev| handle.input(field, &event_target_value(&ev))
            />
            {move || error().map(|msg| view! { <span class="error-message">{msg}</span> })}
        </div>
    }
}

#[component]
pub fn SchemaContactForm(handle: FormHandle) -> impl IntoView {
    let ctx = use_form_context();
    let schema = Schema::contact(&ctx.rules);
    let view_store = handle.view;
    let can_submit = move || view_store.can_submit().get();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Submit always runs so a blocked attempt reveals every field's error
        handle.submit();
    };

    view! {
        <div class="form-container">
            <h2 class="form-title">{handle.variant().label()}</h2>

            <form class="contact-form" on:submit=on_submit novalidate=true>
                <div class="input-row">
                    {schema.fields().iter().cloned().map(|field_schema| view! {
                        <SchemaField handle=handle schema=field_schema />
                    }).collect_view()}
                </div>

                <FormNotice handle=handle />

                <button type="submit" class=move || submit_class(can_submit())>
                    "Submit"
                </button>
            </form>

            <ContactTable handle=handle />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_book::{Field, FieldValidator, ValidationRules};

    #[test]
    fn test_attrs_follow_rules() {
        let schema = Schema::contact(&ValidationRules::default());

        let name = input_attrs(schema.field(Field::FirstName).unwrap());
        assert_eq!(name.input_type, "text");
        assert!(name.required);
        assert_eq!(name.min_length.as_deref(), Some("2"));

        let phone = input_attrs(schema.field(Field::PhoneNumber).unwrap());
        assert_eq!(phone.input_type, "tel");
        assert_eq!(phone.input_mode, Some("numeric"));
        assert_eq!(phone.min_length.as_deref(), Some("10"));
    }

    #[test]
    fn test_phone_input_accepts_formatted_paste() {
        let schema = Schema::contact(&ValidationRules::default());
        let attrs = input_attrs(schema.field(Field::PhoneNumber).unwrap());
        let pasted = "(555) 123-4567";

        // Nothing caps the raw text, so every digit reaches the draft
        assert_eq!(
            attrs,
            InputAttrs {
                input_type: "tel",
                input_mode: Some("numeric"),
                required: true,
                min_length: Some("10".to_string()),
            }
        );
        let digits = contact_book::normalize_phone(pasted);
        assert_eq!(digits, "5551234567");
        assert_eq!(schema.check(Field::PhoneNumber, &digits), Ok(()));
    }

    #[test]
    fn test_unconstrained_field() {
        let attrs = input_attrs(&FieldSchema::new(Field::LastName));
        assert!(!attrs.required);
        assert_eq!(attrs.min_length, None);
    }
}
