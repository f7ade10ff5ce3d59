//! # State Snapshots
//!
//! Writes and reads the whole [`AppState`] as a JSON file, so the app can
//! resume where the user left off.
//!
//! ## Path Resolution (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Explicit path argument                                             │
//! │                                                                         │
//! │  2. SERVICEHUB_STATE_PATH environment variable                          │
//! │                                                                         │
//! │  3. Platform data directory                                            │
//! │     ~/.local/share/servicehub/state.json            (Linux)            │
//! │     ~/Library/Application Support/com.servicehub.app/state.json (macOS)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing snapshot is not an error; the caller gets `Ok(None)` and starts
//! from [`AppState::new`]. A snapshot that exists but fails to parse is an
//! error, so a corrupt file is surfaced instead of silently discarded.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::store::AppState;

/// Saves the state snapshot to `path`, or to the default location.
pub fn save_state(state: &AppState, path: Option<PathBuf>) -> StoreResult<()> {
    let path = path
        .or_else(default_state_path)
        .ok_or(StoreError::SnapshotPathUnavailable)?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| StoreError::SnapshotWriteFailed(e.to_string()))?;
    }

    let contents = serde_json::to_string_pretty(state)?;
    std::fs::write(&path, contents).map_err(|e| StoreError::SnapshotWriteFailed(e.to_string()))?;

    info!(?path, "State snapshot saved");
    Ok(())
}

/// Loads the state snapshot from `path`, or from the default location.
///
/// Returns `Ok(None)` when no snapshot exists yet.
pub fn load_state(path: Option<PathBuf>) -> StoreResult<Option<AppState>> {
    let path = match path.or_else(default_state_path) {
        Some(path) => path,
        None => {
            debug!("No snapshot path available, starting fresh");
            return Ok(None);
        }
    };

    if !path.exists() {
        debug!(?path, "Snapshot not found, starting fresh");
        return Ok(None);
    }

    info!(?path, "Loading state snapshot");
    let contents = std::fs::read_to_string(&path)?;
    let state = serde_json::from_str(&contents)
        .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;

    Ok(Some(state))
}

/// Returns the default snapshot path.
fn default_state_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SERVICEHUB_STATE_PATH") {
        return Some(PathBuf::from(path));
    }

    directories::ProjectDirs::from("com", "servicehub", "app")
        .map(|dirs| dirs.data_dir().join("state.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppStore;
    use servicehub_core::UserProfile;

    #[test]
    fn test_save_then_load_restores_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let store = AppStore::new();
        store.login(UserProfile {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "9876543210".to_string(),
        });
        store.add_saved_address(servicehub_core::AddressLabel::Home, "12, HSR Layout");

        save_state(&store.snapshot(), Some(path.clone())).unwrap();

        let loaded = load_state(Some(path)).unwrap().unwrap();
        assert!(loaded.session.is_authenticated);
        assert_eq!(loaded.session.user.unwrap().email, "jane@example.com");
        assert_eq!(loaded.addresses.entries.len(), 1);
    }

    #[test]
    fn test_load_missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        assert!(load_state(Some(path)).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_state(Some(path)).unwrap_err();
        assert!(matches!(err, StoreError::DeserializationFailed(_)));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("state.json");

        save_state(&AppState::new(), Some(path.clone())).unwrap();
        assert!(path.exists());
    }
}
