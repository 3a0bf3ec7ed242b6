//! Contact Table Component
//!
//! Read-only table of committed contacts, already sorted by the form.

use leptos::prelude::*;

use crate::models::{table_rows, TableRow, EMPTY_TABLE_TEXT, TABLE_COLUMNS};
use crate::store::{FormHandle, FormViewStoreFields};

#[component]
pub fn ContactTable(handle: FormHandle) -> impl IntoView {
    let view_store = handle.view;
    let rows = move || table_rows(&view_store.rows().read());

    view! {
        <table class="contact-table">
            <thead>
                <tr>
                    {TABLE_COLUMNS.iter().map(|field| view! {
                        <th class="table-header">{field.label()}</th>
                    }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|row| row.key()
                    children=move |row| match row {
                        TableRow::Contact(contact) => view! {
                            <tr>
                                <td class="table-cell">{contact.first_name}</td>
                                <td class="table-cell">{contact.last_name}</td>
                                <td class="table-cell">{contact.phone_number}</td>
                            </tr>
                        }.into_any(),
                        TableRow::Placeholder => view! {
                            <tr>
                                <td class="table-cell empty-state" colspan="3">
                                    {EMPTY_TABLE_TEXT}
                                </td>
                            </tr>
                        }.into_any(),
                    }
                />
            </tbody>
        </table>
        <p class="contact-count">
            {move || match view_store.rows().read().len() {
                1 => "1 contact".to_string(),
                n => format!("{} contacts", n),
            }}
        </p>
    }
}
