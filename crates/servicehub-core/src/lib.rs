//! # servicehub-core: Pure Domain Logic for ServiceHub
//!
//! This crate is the **heart** of ServiceHub. It contains the domain types,
//! the static service catalog and its queries, and input validation, all as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ServiceHub Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Mobile Frontend (screens)                      │   │
//! │  │    Home ──► Search ──► Cart ──► Job Bids ──► Bookings          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        servicehub-store            servicehub-api               │   │
//! │  │    session, cart, jobs, ...     signup client (REST)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ servicehub-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ validation│  │   │
//! │  │   │  Service  │  │   Money   │  │   seeds   │  │   rules   │  │   │
//! │  │   │  Booking  │  │ discounts │  │  queries  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO FILE SYSTEM • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Service, Booking, Worker, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Static service catalog and its filter queries
//! - [`error`] - Domain error types
//! - [`validation`] - Signup input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and device access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use servicehub_core::catalog;
//!
//! // Case-insensitive substring search over the static catalog
//! let hits = catalog::search_services("clean");
//! assert!(hits.iter().any(|s| s.name == "Home Deep Cleaning"));
//!
//! // An empty query returns nothing, not everything
//! assert!(catalog::search_services("   ").is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use servicehub_core::Money` instead of
// `use servicehub_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ServiceHub";

/// Tagline shown on the welcome screen.
pub const APP_TAGLINE: &str = "Your trusted home services partner";

/// Rating floor for the "popular" home-screen rail.
///
/// ## Business Reason
/// Popular means well-reviewed, not merely well-sold. Services at or above
/// this rating qualify, ordered by review volume.
pub const POPULAR_RATING_FLOOR: f64 = 4.5;
