//! # API Error Types
//!
//! Error types for backend communication.
//!
//! Every variant's `Display` text is written for the signup screen, which
//! shows it to the user directly.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌──────────────┐ ┌─────────────┐  │
//! │  │    Input      │ │ Configuration │ │  Transport   │ │   Server    │  │
//! │  │               │ │               │ │              │ │             │  │
//! │  │  Validation   │ │  Config       │ │  Network     │ │  Server     │  │
//! │  │  (pre-flight, │ │  (bad or      │ │  (DNS, TCP,  │ │  (non-2xx   │  │
//! │  │  no request   │ │  missing      │ │  TLS, time-  │ │  with the   │  │
//! │  │  is sent)     │ │  base URL)    │ │  out)        │ │  body msg)  │  │
//! │  └───────────────┘ └───────────────┘ └──────────────┘ └─────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use servicehub_core::ValidationError;
use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type covering everything a backend call can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Client-side validation rejected the input before any request was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configured base URL is missing or malformed.
    #[error("Invalid API configuration: {0}")]
    Config(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced an HTTP response.
    #[error("Could not reach the server: {0}")]
    Network(String),

    // =========================================================================
    // Server Errors
    // =========================================================================
    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the backend's own `msg` field when the body had one, so
    /// responses like "Email already registered" reach the user verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// The HTTP status code, for server errors only.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the input never left the device.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
