//! Draft Record
//!
//! The in-progress contact the user is typing into the form.

use serde::{Deserialize, Serialize};

/// Input fields of the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::PhoneNumber];

    /// Input `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PhoneNumber => "phoneNumber",
        }
    }

    /// Human-readable label used in messages and table headers
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::PhoneNumber => "Phone Number",
        }
    }
}

/// Keep ASCII digits only
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Not-yet-committed contact record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl ContactDraft {
    pub fn new(first_name: &str, last_name: &str, phone_number: &str) -> Self {
        let mut draft = Self::default();
        draft.set(Field::FirstName, first_name);
        draft.set(Field::LastName, last_name);
        draft.set(Field::PhoneNumber, phone_number);
        draft
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
        }
    }

    /// Store a raw input value. Phone input is normalized to digits on the way in.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::FirstName => self.first_name = value.to_string(),
            Field::LastName => self.last_name = value.to_string(),
            Field::PhoneNumber => self.phone_number = normalize_phone(value),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
