//! # Domain Types
//!
//! Core type definitions for ServiceHub.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Domain Model                                     │
//! │                                                                         │
//! │  Category ◄──── Service ────► (cart snapshot in servicehub-store)      │
//! │                    │                                                    │
//! │                    └── featured/popular derivations (catalog)          │
//! │                                                                         │
//! │  UserProfile ──► Session (servicehub-store)                            │
//! │  Location ◄──── GeoCoordinates                                         │
//! │  SavedAddress ◄─ AddressLabel                                          │
//! │                                                                         │
//! │  ActiveJob ──► Worker bids ──► BookingSchedule ──► Booking             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All app-facing types derive `TS` so the TypeScript frontend gets generated
//! bindings instead of hand-maintained interfaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// User & Session
// =============================================================================

/// Profile of the signed-in user.
///
/// Stored in the session after login/signup. `phone` may be empty until the
/// OTP flow fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    /// Display name.
    pub name: String,

    /// Email address (lowercased at the signup boundary).
    pub email: String,

    /// Phone number; empty string when not yet captured.
    pub phone: String,
}

/// Role selected at signup.
///
/// Serialized lowercase on the wire (`"client"` / `"worker"`), matching the
/// auth backend's enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Books services and posts jobs.
    Client,
    /// Bids on posted jobs.
    Worker,
}

/// New accounts default to client; worker is an explicit choice.
impl Default for UserRole {
    fn default() -> Self {
        UserRole::Client
    }
}

// =============================================================================
// Location
// =============================================================================

/// A latitude/longitude pair from the device or a geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeoCoordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,

    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// The user's current service location.
///
/// Coordinates are only present when the location came from detection;
/// picking a saved address yields an address-only location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Location {
    /// Human-readable address line.
    pub address: String,

    /// Optional device fix backing the address.
    pub coordinates: Option<GeoCoordinates>,
}

impl Location {
    /// Builds an address-only location (no coordinates).
    pub fn from_address(address: impl Into<String>) -> Self {
        Location {
            address: address.into(),
            coordinates: None,
        }
    }
}

/// Label attached to a saved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AddressLabel {
    /// Primary residence.
    Home,
    /// Workplace.
    Work,
    /// Anything else.
    Other,
}

/// A saved address shortcut shown on the location screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedAddress {
    /// Unique identifier (UUID v4, generated by the store).
    pub id: String,

    /// Home/work/other label driving the list icon.
    pub label: AddressLabel,

    /// Full address line.
    pub full_address: String,
}

// =============================================================================
// Catalog: Category & Service
// =============================================================================

/// A service category shown on the home-screen grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    /// Stable identifier (slug).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Icon name understood by the frontend icon set.
    pub icon: String,

    /// Tile background color (hex).
    pub color: String,
}

/// A bookable service from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Service {
    /// Stable identifier (slug).
    pub id: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Id of the category this service belongs to.
    pub category: String,

    /// One-line description, also matched by search.
    pub description: String,

    /// Current price in paise.
    pub price_cents: i64,

    /// Pre-discount price in paise; present only when discounted.
    pub original_price_cents: Option<i64>,

    /// Average rating (display data, 0.0-5.0).
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub reviews: u32,

    /// Typical duration shown on the card (e.g. "45-60 mins").
    pub duration: String,

    /// Card image URL.
    pub image: String,
}

impl Service {
    /// Returns the current price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-discount price, if any.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// Whether the service carries a strike-through price.
    pub fn is_discounted(&self) -> bool {
        match self.original_price_cents {
            Some(original) => original > self.price_cents,
            None => false,
        }
    }

    /// Rounded "% OFF" badge value; `None` when not discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        if !self.is_discounted() {
            return None;
        }
        // is_discounted guarantees original is present and above price
        self.original_price().map(|op| op.percent_off(self.price()))
    }
}

// =============================================================================
// Jobs & Worker Bids
// =============================================================================

/// A posted job awaiting worker bids.
///
/// There is at most one per session; posting a new one replaces it. Status is
/// implicit: an ActiveJob exists iff the user is seeking bids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActiveJob {
    /// Free-text problem description.
    pub description: String,

    /// Client's budget in paise.
    pub budget_cents: i64,

    /// When the job was posted.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl ActiveJob {
    /// Creates a job posted now.
    pub fn new(description: impl Into<String>, budget_cents: i64) -> Self {
        ActiveJob {
            description: description.into(),
            budget_cents,
            created_at: Utc::now(),
        }
    }

    /// Returns the budget as a Money type.
    #[inline]
    pub fn budget(&self) -> Money {
        Money::from_cents(self.budget_cents)
    }
}

/// A nearby worker bidding on the active job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Worker {
    /// Stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Average rating (display data, 0.0-5.0).
    pub rating: f64,

    /// Completed jobs count.
    pub jobs_done: u32,

    /// Offered bid in paise.
    pub bid_cents: i64,

    /// Advertised skills shown on the profile card.
    pub skills: Vec<String>,
}

impl Worker {
    /// Returns the bid as a Money type.
    #[inline]
    pub fn bid(&self) -> Money {
        Money::from_cents(self.bid_cents)
    }
}

/// How the user pays when confirming a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay the worker in cash on completion.
    Cash,
    /// UPI transfer.
    Upi,
    /// Card payment.
    Card,
}

/// Schedule details collected on the finalize screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingSchedule {
    /// Service address line.
    pub address: String,

    /// Date as entered (DD-MM-YYYY).
    pub date: String,

    /// Time as entered (e.g. "09:00 AM").
    pub time: String,

    /// Chosen payment method.
    pub payment_method: PaymentMethod,
}

// =============================================================================
// Bookings
// =============================================================================

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Scheduled, not yet done.
    Upcoming,
    /// Service was delivered.
    Completed,
    /// Called off before delivery.
    Cancelled,
}

/// New bookings start out upcoming.
impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Upcoming
    }
}

/// A scheduled or past service engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Booking {
    /// Unique identifier (UUID v4, generated by the store).
    pub id: String,

    /// Name of the booked service or job.
    pub service_name: String,

    /// Provider delivering the service.
    pub provider_name: String,

    /// Display date (e.g. "Dec 5, 2024").
    pub date: String,

    /// Display time (e.g. "10:00 AM").
    pub time: String,

    /// Current lifecycle status.
    pub status: BookingStatus,

    /// Agreed price in paise.
    pub price_cents: i64,

    /// Thumbnail image URL.
    pub image: String,
}

impl Booking {
    /// Returns the agreed price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
