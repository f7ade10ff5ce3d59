//! # Cart State
//!
//! The service cart section of the application state.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Store Action            Cart Change           │
//! │  ───────────────          ────────────            ───────────           │
//! │                                                                         │
//! │  Tap "Add" on card ──────► add_to_cart() ───────► qty += 1 or push     │
//! │                                                                         │
//! │  Change quantity ────────► update_cart_quantity ► qty = n (≤0 removes) │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_from_cart() ──► items.retain(...)    │
//! │                                                                         │
//! │  Badge on cart icon ─────► cart_count() ────────► Σ quantities         │
//! │                                                                         │
//! │  NOTE: The cart is a pure state container. Operations never fail;      │
//! │        unknown ids are ignored and quantities are taken as given.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use servicehub_core::{Money, Service};
use ts_rs::TS;

/// An entry in the service cart.
///
/// ## Design Notes
/// - `service_id`: Reference back to the catalog entry
/// - The remaining service fields are a frozen copy taken when the entry was
///   added, so the cart displays consistent data even if the catalog changes
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Service id (catalog slug)
    pub service_id: String,

    /// Service name at time of adding (frozen)
    pub name: String,

    /// Price in paise at time of adding (frozen)
    pub price_cents: i64,

    /// Card image URL at time of adding (frozen)
    pub image: String,

    /// Quantity in cart, always >= 1 while the entry exists
    pub quantity: i64,

    /// When this entry was first added
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart entry from a catalog service with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. A later catalog price change
    /// does not reprice entries already in the cart.
    pub fn from_service(service: &Service) -> Self {
        CartItem {
            service_id: service.id.clone(),
            name: service.name.clone(),
            price_cents: service.price_cents,
            image: service.image.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }
}

/// The service cart.
///
/// ## Invariants
/// - Entries are unique by `service_id` (adding the same service again
///   increases its quantity)
/// - Quantity is >= 1 for every entry; setting it to zero or below removes
///   the entry instead
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Entries in insertion order
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a service to the cart, or bumps its quantity if already present.
    pub fn add_service(&mut self, service: &Service) {
        if let Some(item) = self.items.iter_mut().find(|i| i.service_id == service.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_service(service));
    }

    /// Sets the quantity of an entry exactly.
    ///
    /// ## Behavior
    /// - Quantity <= 0 removes the entry
    /// - Unknown service id is a no-op
    pub fn update_quantity(&mut self, service_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_service(service_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.service_id == service_id) {
            item.quantity = quantity;
        }
    }

    /// Removes an entry by service id.
    ///
    /// ## Returns
    /// Whether an entry was actually removed (for logging; absence is not
    /// an error).
    pub fn remove_service(&mut self, service_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.service_id != service_id);
        self.items.len() != initial_len
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct entries.
    pub fn entry_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all entries (the cart badge).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal in paise.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Returns the subtotal as Money for display.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
