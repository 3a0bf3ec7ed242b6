//! View Models
//!
//! Presentation-side shapes derived from committed contacts.

use contact_book::{Contact, Field};

/// Placeholder text when no contacts exist
pub const EMPTY_TABLE_TEXT: &str = "No contacts added yet";

/// Column headers, in display order
pub const TABLE_COLUMNS: [Field; 3] = Field::ALL;

/// A rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Contact(Contact),
    /// Single row shown for an empty list
    Placeholder,
}

impl TableRow {
    /// Stable key for keyed rendering
    pub fn key(&self) -> u32 {
        match self {
            TableRow::Contact(contact) => contact.id,
            TableRow::Placeholder => 0,
        }
    }
}

/// Rows for an already-sorted contact list
pub fn table_rows(contacts: &[Contact]) -> Vec<TableRow> {
    if contacts.is_empty() {
        return vec![TableRow::Placeholder];
    }
    contacts.iter().cloned().map(TableRow::Contact).collect()
}

/// Class for an input, flagged when its field has an error
pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input has-error"
    } else {
        "form-input"
    }
}

/// Class for the submit button
pub fn submit_class(enabled: bool) -> &'static str {
    if enabled {
        "submit-btn"
    } else {
        "submit-btn disabled"
    }
}
