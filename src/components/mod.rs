//! UI Components
//!
//! Reusable Leptos components.

mod contact_form;
mod contact_table;
mod field_input;
mod form_notice;
mod log_panel;
mod schema_contact_form;
mod variant_tab_bar;

pub use contact_form::PlainContactForm;
pub use contact_table::ContactTable;
pub use field_input::FieldInput;
pub use form_notice::FormNotice;
pub use log_panel::LogPanel;
pub use schema_contact_form::SchemaContactForm;
pub use variant_tab_bar::VariantTabBar;
