//! Contact Book
//!
//! The committed list: append-only storage, duplicate detection and the
//! sorted display projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactDraft, ValidContact};
use crate::error::DuplicateError;

/// Committed contacts in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    next_id: u32,
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    /// First committed contact the draft collides with
    pub fn find_duplicate(&self, draft: &ContactDraft) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.matches(draft))
    }

    /// Append a contact unless it duplicates an existing one
    pub fn commit(&mut self, valid: ValidContact) -> Result<&Contact, DuplicateError> {
        self.commit_at(valid, Utc::now())
    }

    pub fn commit_at(
        &mut self,
        valid: ValidContact,
        created_at: DateTime<Utc>,
    ) -> Result<&Contact, DuplicateError> {
        let candidate = ContactDraft {
            first_name: valid.first_name.as_str().to_string(),
            last_name: valid.last_name.as_str().to_string(),
            phone_number: valid.phone_number.as_str().to_string(),
        };
        if let Some(existing) = self.find_duplicate(&candidate) {
            return Err(DuplicateError { existing_id: existing.id });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.contacts.push(Contact::new(id, valid, created_at));
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// Contacts ordered by last name, then first name, case-insensitively.
    /// Storage order is left untouched.
    pub fn sorted(&self) -> Vec<&Contact> {
        let mut view: Vec<&Contact> = self.contacts.iter().collect();
        view.sort_by_cached_key(|c| (c.last_name.to_lowercase(), c.first_name.to_lowercase(), c.id));
        view
    }

    /// Contacts in the order they were committed
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
