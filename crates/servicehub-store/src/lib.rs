//! # servicehub-store: Application State for ServiceHub
//!
//! This crate holds the client-side application state: who is signed in,
//! where they are, what is in their cart, which job is collecting bids, and
//! what they have booked. One store instance lives for the whole app session.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Store                                │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                   AppStore (store module)                        │  │
//! │  │                                                                  │  │
//! │  │  Named actions in, revision bumps out                            │  │
//! │  │  Arc<Mutex<AppState>> + watch channel                            │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │      ┌──────────┬─────────────┼────────────┬─────────────┐             │
//! │      ▼          ▼             ▼            ▼             ▼             │
//! │  ┌────────┐ ┌────────┐ ┌───────────┐ ┌─────────┐ ┌──────────────┐     │
//! │  │Session │ │  Cart  │ │ Location  │ │JobBoard │ │  BookingLog  │     │
//! │  │        │ │        │ │  State    │ │         │ │              │     │
//! │  │ auth + │ │ items, │ │ current + │ │singleton│ │ history with │     │
//! │  │profile │ │ badge  │ │  recents  │ │ job slot│ │ status tabs  │     │
//! │  └────────┘ └────────┘ └───────────┘ └─────────┘ └──────────────┘     │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                   snapshot module (JSON on disk)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`store`] - `AppStore` with all named actions, plus `AppState`
//! - [`session`] - Authentication flag and cached profile
//! - [`cart`] - Service cart with price-frozen entries
//! - [`location`] - Current location and recent addresses
//! - [`address`] - Saved address book
//! - [`jobs`] - Singleton active-job slot and bid confirmation
//! - [`bookings`] - Booking history and cancellation
//! - [`snapshot`] - JSON persistence of the whole state
//! - [`error`] - Persistence error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use servicehub_store::{snapshot, AppStore};
//!
//! let store = match snapshot::load_state(None)? {
//!     Some(state) => AppStore::from_state(state),
//!     None => AppStore::new(),
//! };
//!
//! store.add_to_cart(&service);
//! println!("Cart badge: {}", store.cart_count());
//!
//! snapshot::save_state(&store.snapshot(), None)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod address;
pub mod bookings;
pub mod cart;
pub mod error;
pub mod jobs;
pub mod location;
pub mod session;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use address::AddressBook;
pub use bookings::BookingLog;
pub use cart::{Cart, CartItem};
pub use error::{StoreError, StoreResult};
pub use jobs::JobBoard;
pub use location::{LocationState, MAX_RECENT_LOCATIONS};
pub use session::Session;
pub use store::{AppState, AppStore};
