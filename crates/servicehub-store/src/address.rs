//! # Saved Addresses
//!
//! The user's labeled address shortcuts (home, work, other).

use serde::{Deserialize, Serialize};
use servicehub_core::{AddressLabel, SavedAddress};
use ts_rs::TS;
use uuid::Uuid;

/// Ordered list of saved addresses.
///
/// ## Invariants
/// - Ids are unique (generated here, UUID v4)
/// - Insertion order is preserved for display
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddressBook {
    /// Saved addresses in insertion order.
    pub entries: Vec<SavedAddress>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        AddressBook::default()
    }

    /// Appends a new address with a generated id and returns it.
    pub fn add(&mut self, label: AddressLabel, full_address: impl Into<String>) -> SavedAddress {
        let entry = SavedAddress {
            id: Uuid::new_v4().to_string(),
            label,
            full_address: full_address.into(),
        };
        self.entries.push(entry.clone());
        entry
    }

    /// Looks up an address by id.
    pub fn get(&self, id: &str) -> Option<&SavedAddress> {
        self.entries.iter().find(|a| a.id == id)
    }

    /// Number of saved addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
