//! # Store Error Types
//!
//! Error types for state persistence.
//!
//! Actions on the store itself are infallible; errors arise only when a
//! snapshot is written to or read from disk.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Error Categories                             │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────────────────┐ │
//! │  │       Snapshot I/O       │  │           Encoding                   │ │
//! │  │                          │  │                                      │ │
//! │  │  SnapshotPathUnavailable │  │  SerializationFailed                 │ │
//! │  │  SnapshotReadFailed      │  │  DeserializationFailed               │ │
//! │  │  SnapshotWriteFailed     │  │                                      │ │
//! │  └──────────────────────────┘  └──────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for store persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error type covering snapshot persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    // =========================================================================
    // Snapshot I/O Errors
    // =========================================================================
    /// No snapshot path could be resolved on this platform.
    #[error("No snapshot path available. Pass a path or set SERVICEHUB_STATE_PATH.")]
    SnapshotPathUnavailable,

    /// Failed to read the snapshot file.
    #[error("Failed to read snapshot: {0}")]
    SnapshotReadFailed(String),

    /// Failed to write the snapshot file.
    #[error("Failed to write snapshot: {0}")]
    SnapshotWriteFailed(String),

    // =========================================================================
    // Encoding Errors
    // =========================================================================
    /// Failed to serialize state to JSON.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The snapshot file exists but is not valid state JSON.
    #[error("Snapshot is corrupt: {0}")]
    DeserializationFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::SnapshotReadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerializationFailed(err.to_string())
    }
}
