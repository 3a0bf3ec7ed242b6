//! Form Notice Component
//!
//! Form-level banner for rejections that are not tied to a field.

use leptos::prelude::*;

use crate::store::{FormHandle, FormViewStoreFields};

#[component]
pub fn FormNotice(handle: FormHandle) -> impl IntoView {
    let view_store = handle.view;

    view! {
        {move || view_store.notice().get().map(|msg| view! {
            <div class="form-notice" role="alert">{msg}</div>
        })}
    }
}
