//! Contact Form App
//!
//! Tab bar over the two form variants. Both form states are created here so
//! switching tabs keeps what each form holds.

use leptos::prelude::*;

use contact_book::FormVariant;

use crate::components::{LogPanel, PlainContactForm, SchemaContactForm, VariantTabBar};
use crate::config;
use crate::context::FormContext;
use crate::store::FormHandle;

#[component]
pub fn App() -> impl IntoView {
    let rules = config::load_rules();
    log::info!("Validation rules: {:?}", rules);

    let active_variant = signal(FormVariant::default());
    let ctx = FormContext::new(rules, active_variant);
    provide_context(ctx);

    let plain = FormHandle::new(FormVariant::Plain, rules);
    let schema = FormHandle::new(FormVariant::Schema, rules);

    view! {
        <main class="app-layout">
            <VariantTabBar />

            {move || match ctx.active_variant.get() {
                FormVariant::Plain => view! { <PlainContactForm handle=plain /> }.into_any(),
                FormVariant::Schema => view! { <SchemaContactForm handle=schema /> }.into_any(),
            }}

            {cfg!(debug_assertions).then(|| view! { <LogPanel /> })}
        </main>
    }
}
