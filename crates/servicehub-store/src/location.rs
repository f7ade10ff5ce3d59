//! # Location State
//!
//! The current service location plus the short list of recently used
//! addresses surfaced on the location picker.

use serde::{Deserialize, Serialize};
use servicehub_core::Location;
use ts_rs::TS;

/// How many recent locations the picker keeps.
pub const MAX_RECENT_LOCATIONS: usize = 5;

/// Current location and recents.
///
/// ## Behavior
/// Setting the current location is a wholesale replace: no field merging, so
/// picking a saved address (no coordinates) after a GPS detection (with
/// coordinates) leaves no stale coordinates behind.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LocationState {
    /// Where services will be delivered; `None` until the user picks.
    pub current: Option<Location>,

    /// Recently used addresses, most recent first, deduplicated.
    pub recents: Vec<String>,
}

impl LocationState {
    /// Creates the initial state: no current location, canned recents.
    pub fn new() -> Self {
        LocationState {
            current: None,
            recents: servicehub_core::catalog::DEFAULT_RECENT_LOCATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replaces the current location and records its address as a recent.
    pub fn set_current(&mut self, location: Location) {
        self.push_recent(location.address.clone());
        self.current = Some(location);
    }

    /// Pushes an address to the front of the recents, dropping duplicates
    /// and trimming to [`MAX_RECENT_LOCATIONS`].
    fn push_recent(&mut self, address: String) {
        self.recents.retain(|a| a != &address);
        self.recents.insert(0, address);
        self.recents.truncate(MAX_RECENT_LOCATIONS);
    }
}

impl Default for LocationState {
    fn default() -> Self {
        LocationState::new()
    }
}
