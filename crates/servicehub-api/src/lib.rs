//! # servicehub-api: Backend Client for ServiceHub
//!
//! This crate is the app's only HTTP boundary. It validates input locally,
//! sends the signup request, and turns every failure mode into a message the
//! signup screen can show as-is.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          API Boundary                                   │
//! │                                                                         │
//! │  Signup screen                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                        AuthClient                                │  │
//! │  │                                                                  │  │
//! │  │  validate (servicehub-core) ──► POST /api/auth/signup ──► 2xx?  │  │
//! │  │        │ no                             │ no response       │no  │  │
//! │  │        ▼                                ▼                   ▼    │  │
//! │  │   Validation                         Network              Server │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  All three error paths Display as user-facing text.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`auth`] - `AuthClient` signup call and the local login stub
//! - [`config`] - Base URL resolution and validation
//! - [`error`] - `ApiError` with user-facing `Display` text
//!
//! ## Usage
//!
//! ```rust,ignore
//! use servicehub_api::{ApiConfig, AuthClient, SignupInput};
//! use servicehub_core::UserRole;
//!
//! let client = AuthClient::new(ApiConfig::from_env_or(None)?)?;
//!
//! client
//!     .signup(&SignupInput {
//!         name: "Jane".into(),
//!         email: "jane@x.com".into(),
//!         password: "hunter2".into(),
//!         role: UserRole::Client,
//!     })
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{local_login, AuthClient, SignupInput};
pub use config::{ApiConfig, API_URL_ENV};
pub use error::{ApiError, ApiResult};
