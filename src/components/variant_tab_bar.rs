//! Variant Tab Bar Component
//!
//! Tab bar for switching between the two form variants.

use leptos::prelude::*;

use contact_book::FormVariant;

use crate::context::use_form_context;

#[component]
pub fn VariantTabBar() -> impl IntoView {
    let ctx = use_form_context();

    view! {
        <div class="variant-tab-bar">
            {FormVariant::ALL.iter().map(|variant| {
                let variant = *variant;
                let tab_class = move || {
                    if ctx.active_variant.get() == variant {
                        "variant-tab active"
                    } else {
                        "variant-tab"
                    }
                };

                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| ctx.show(variant)
                    >
                        {variant.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
