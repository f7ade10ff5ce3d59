//! # Application Store
//!
//! The single source of truth for client-side state, and the only place it
//! can be mutated.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         AppStore                                        │
//! │                                                                         │
//! │   Screens ──── named actions ────► Arc<Mutex<AppState>>                │
//! │      ▲                                   │                              │
//! │      │                                   ▼                              │
//! │      └──── watch::Receiver<u64> ◄── revision bump after every mutation │
//! │                                                                         │
//! │   • No direct field writes: mutations go through named actions         │
//! │   • Actions are infallible: the store validates nothing, it holds      │
//! │     whatever the screens hand it                                       │
//! │   • Every mutation bumps the revision; consumers recompute derived     │
//! │     views (cart badge, booking tabs) when it changes                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Mutex, not RwLock?
//! Actions come from UI event handlers one at a time and finish fast. The
//! Mutex makes that discipline safe rather than assumed; a RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use servicehub_core::{
    ActiveJob, AddressLabel, Booking, BookingSchedule, BookingStatus, Location, SavedAddress,
    Service, UserProfile, Worker,
};
use tokio::sync::watch;
use tracing::debug;
use ts_rs::TS;

use crate::address::AddressBook;
use crate::bookings::BookingLog;
use crate::cart::{Cart, CartItem};
use crate::jobs::JobBoard;
use crate::location::LocationState;
use crate::session::Session;

// =============================================================================
// AppState
// =============================================================================

/// Everything the app remembers, in one serializable value.
///
/// This is also the snapshot format: [`crate::snapshot`] writes and reads
/// this struct as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Authentication flag and cached profile.
    pub session: Session,

    /// Current location and recent addresses.
    pub location: LocationState,

    /// Saved address shortcuts.
    pub addresses: AddressBook,

    /// The service cart.
    pub cart: Cart,

    /// The singleton active-job slot.
    pub jobs: JobBoard,

    /// Booking history.
    pub bookings: BookingLog,
}

impl AppState {
    /// Creates the initial state for a fresh install.
    pub fn new() -> Self {
        AppState {
            session: Session::new(),
            location: LocationState::new(),
            addresses: AddressBook::new(),
            cart: Cart::new(),
            jobs: JobBoard::new(),
            bookings: BookingLog::new(),
        }
    }
}

// =============================================================================
// AppStore
// =============================================================================

/// Handle to the application state.
///
/// Owned by the top-level application context; screens borrow it to invoke
/// actions and to subscribe to revisions.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<AppState>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one action mutates the state at a time
#[derive(Debug)]
pub struct AppStore {
    state: Arc<Mutex<AppState>>,
    revision_tx: watch::Sender<u64>,
}

impl AppStore {
    /// Creates a store with fresh-install state.
    pub fn new() -> Self {
        AppStore::from_state(AppState::new())
    }

    /// Creates a store from existing state (e.g. a loaded snapshot).
    pub fn from_state(state: AppState) -> Self {
        let (revision_tx, _) = watch::channel(0);
        AppStore {
            state: Arc::new(Mutex::new(state)),
            revision_tx,
        }
    }

    // =========================================================================
    // Change Notification
    // =========================================================================

    /// Subscribes to revision bumps.
    ///
    /// The received value is a counter, not a diff; on change, re-read
    /// whatever views the consumer derives.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    /// The current revision (bumps by one per mutating action).
    pub fn revision(&self) -> u64 {
        *self.revision_tx.borrow()
    }

    fn bump_revision(&self) {
        let next = *self.revision_tx.borrow() + 1;
        let _ = self.revision_tx.send(next);
    }

    // =========================================================================
    // Closure Access
    // =========================================================================

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = store.with_state(|s| s.cart.total_quantity());
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.lock().expect("App state mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access, then bumps the revision.
    ///
    /// Private on purpose: mutations enter through the named actions below.
    fn mutate<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let result = {
            let mut state = self.state.lock().expect("App state mutex poisoned");
            f(&mut state)
        };
        self.bump_revision();
        result
    }

    /// Returns a full cloned view of the state (for snapshots).
    pub fn snapshot(&self) -> AppState {
        self.with_state(|state| state.clone())
    }

    // =========================================================================
    // Session Actions
    // =========================================================================

    /// Sets the authentication flag only.
    pub fn set_authenticated(&self, flag: bool) {
        debug!(flag = %flag, "set_authenticated");
        self.mutate(|state| state.session.set_authenticated(flag));
    }

    /// Replaces the stored profile wholesale.
    pub fn set_user(&self, profile: UserProfile) {
        debug!(email = %profile.email, "set_user");
        self.mutate(|state| state.session.set_user(profile));
    }

    /// Signs in: flag and profile together.
    pub fn login(&self, profile: UserProfile) {
        debug!(email = %profile.email, "login");
        self.mutate(|state| state.session.login(profile));
    }

    /// Signs out: session back to unauthenticated defaults.
    pub fn sign_out(&self) {
        debug!("sign_out");
        self.mutate(|state| state.session.sign_out());
    }

    /// Whether the user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.with_state(|state| state.session.is_authenticated)
    }

    /// The signed-in user's profile, if any.
    pub fn user(&self) -> Option<UserProfile> {
        self.with_state(|state| state.session.user.clone())
    }

    // =========================================================================
    // Location Actions
    // =========================================================================

    /// Replaces the current location wholesale (no field merge).
    pub fn set_current_location(&self, location: Location) {
        debug!(address = %location.address, "set_current_location");
        self.mutate(|state| state.location.set_current(location));
    }

    /// The current location, if the user has picked one.
    pub fn current_location(&self) -> Option<Location> {
        self.with_state(|state| state.location.current.clone())
    }

    /// Recently used addresses, most recent first.
    pub fn recent_locations(&self) -> Vec<String> {
        self.with_state(|state| state.location.recents.clone())
    }

    // =========================================================================
    // Saved Address Actions
    // =========================================================================

    /// Appends a saved address with a generated id and returns it.
    pub fn add_saved_address(
        &self,
        label: AddressLabel,
        full_address: impl Into<String>,
    ) -> SavedAddress {
        let full_address = full_address.into();
        debug!(label = ?label, "add_saved_address");
        self.mutate(|state| state.addresses.add(label, full_address))
    }

    /// All saved addresses in insertion order.
    pub fn saved_addresses(&self) -> Vec<SavedAddress> {
        self.with_state(|state| state.addresses.entries.clone())
    }

    // =========================================================================
    // Cart Actions
    // =========================================================================

    /// Adds a service to the cart, or bumps its quantity if already there.
    pub fn add_to_cart(&self, service: &Service) {
        debug!(service_id = %service.id, "add_to_cart");
        self.mutate(|state| state.cart.add_service(service));
    }

    /// Sets an entry's quantity exactly; zero or below removes it.
    pub fn update_cart_quantity(&self, service_id: &str, quantity: i64) {
        debug!(service_id = %service_id, quantity = %quantity, "update_cart_quantity");
        self.mutate(|state| state.cart.update_quantity(service_id, quantity));
    }

    /// Removes an entry by service id; unknown ids are ignored.
    pub fn remove_from_cart(&self, service_id: &str) {
        debug!(service_id = %service_id, "remove_from_cart");
        let removed = self.mutate(|state| state.cart.remove_service(service_id));
        if !removed {
            debug!(service_id = %service_id, "remove_from_cart: not in cart");
        }
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        debug!("clear_cart");
        self.mutate(|state| state.cart.clear());
    }

    /// Total quantity across entries (the cart badge).
    pub fn cart_count(&self) -> i64 {
        self.with_state(|state| state.cart.total_quantity())
    }

    /// Cart entries in insertion order.
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.with_state(|state| state.cart.items.clone())
    }

    // =========================================================================
    // Job Actions
    // =========================================================================

    /// Posts a job into the singleton slot, replacing any previous one.
    pub fn set_active_job(&self, job: ActiveJob) {
        debug!(budget_cents = %job.budget_cents, "set_active_job");
        self.mutate(|state| state.jobs.set_active(job));
    }

    /// Clears the job slot.
    pub fn clear_active_job(&self) {
        debug!("clear_active_job");
        self.mutate(|state| state.jobs.clear_active());
    }

    /// The job currently collecting bids, if any.
    pub fn active_job(&self) -> Option<ActiveJob> {
        self.with_state(|state| state.jobs.active.clone())
    }

    /// Whether a job is currently collecting bids.
    pub fn has_active_job(&self) -> bool {
        self.with_state(|state| state.jobs.has_active())
    }

    /// Confirms a worker's bid: books them for the active job.
    ///
    /// ## Behavior
    /// Appends an upcoming booking priced at the worker's bid, clears the job
    /// slot, and returns the booking. Returns `None` (no state change) when
    /// no job is active.
    pub fn confirm_worker_booking(
        &self,
        worker: &Worker,
        schedule: &BookingSchedule,
    ) -> Option<Booking> {
        debug!(worker_id = %worker.id, "confirm_worker_booking");
        self.mutate(|state| {
            let booking = state.jobs.confirm_booking(worker, schedule)?;
            state.bookings.add(booking.clone());
            Some(booking)
        })
    }

    // =========================================================================
    // Booking Actions
    // =========================================================================

    /// Appends a booking to the history.
    pub fn add_booking(&self, booking: Booking) {
        debug!(booking_id = %booking.id, "add_booking");
        self.mutate(|state| state.bookings.add(booking));
    }

    /// Cancels an upcoming booking; returns whether anything changed.
    pub fn cancel_booking(&self, booking_id: &str) -> bool {
        debug!(booking_id = %booking_id, "cancel_booking");
        self.mutate(|state| state.bookings.cancel(booking_id))
    }

    /// All bookings, oldest first.
    pub fn bookings(&self) -> Vec<Booking> {
        self.with_state(|state| state.bookings.entries.clone())
    }

    /// Bookings with the given status, oldest first.
    pub fn bookings_with_status(&self, status: BookingStatus) -> Vec<Booking> {
        self.with_state(|state| {
            state
                .bookings
                .with_status(status)
                .into_iter()
                .cloned()
                .collect()
        })
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use servicehub_core::{GeoCoordinates, PaymentMethod};

    fn test_service(id: &str, price_cents: i64) -> Service {
        Service {
            id: id.to_string(),
            name: format!("Service {}", id),
            category: "cleaning".to_string(),
            description: "A service for tests".to_string(),
            price_cents,
            original_price_cents: None,
            rating: 4.5,
            reviews: 100,
            duration: "1 hour".to_string(),
            image: format!("https://example.com/{}.jpg", id),
        }
    }

    fn test_profile() -> UserProfile {
        UserProfile {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "".to_string(),
        }
    }

    #[test]
    fn test_add_to_cart_increments_and_appends() {
        let store = AppStore::new();
        let a = test_service("a", 49900);
        let b = test_service("b", 29900);

        store.add_to_cart(&a);
        store.add_to_cart(&a);
        store.add_to_cart(&b);

        assert_eq!(store.cart_count(), 3);

        let items = store.cart_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].service_id, "a");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].service_id, "b");
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn test_sign_out_resets_session() {
        let store = AppStore::new();

        store.set_authenticated(true);
        store.set_user(test_profile());
        assert!(store.is_authenticated());

        store.sign_out();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_login_is_atomic_pair() {
        let store = AppStore::new();
        store.login(test_profile());

        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().email, "test@example.com");
    }

    #[test]
    fn test_set_current_location_replaces_wholesale() {
        let store = AppStore::new();

        store.set_current_location(Location {
            address: "HSR Layout, Sector 2, Bangalore, Karnataka 560102".to_string(),
            coordinates: Some(GeoCoordinates {
                lat: 12.9141,
                lng: 77.6411,
            }),
        });
        store.set_current_location(Location::from_address("Home, 4th Block"));

        let current = store.current_location().unwrap();
        assert_eq!(current.address, "Home, 4th Block");
        assert!(current.coordinates.is_none());
    }

    #[test]
    fn test_active_job_is_singleton() {
        let store = AppStore::new();

        store.set_active_job(ActiveJob::new("Fix leaking pipe", 50000));
        store.set_active_job(ActiveJob::new("Unclog kitchen drain", 30000));

        let job = store.active_job().unwrap();
        assert_eq!(job.description, "Unclog kitchen drain");

        store.clear_active_job();
        assert!(!store.has_active_job());
    }

    #[test]
    fn test_add_saved_address_generates_ids() {
        let store = AppStore::new();

        let home = store.add_saved_address(AddressLabel::Home, "12, HSR Layout");
        let work = store.add_saved_address(AddressLabel::Work, "Tech Park, Whitefield");

        assert_ne!(home.id, work.id);

        let all = store.saved_addresses();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].full_address, "12, HSR Layout");
    }

    #[test]
    fn test_confirm_worker_booking_flow() {
        let store = AppStore::new();
        store.set_active_job(ActiveJob::new("Plumbing Leak Repair", 50000));

        let worker = Worker {
            id: "1".to_string(),
            name: "Rahul Sharma".to_string(),
            rating: 4.8,
            jobs_done: 124,
            bid_cents: 45000,
            skills: vec!["Pipe Leakage Repair".to_string()],
        };
        let schedule = BookingSchedule {
            address: "12, HSR Layout, Bangalore".to_string(),
            date: "05-12-2024".to_string(),
            time: "09:00 AM".to_string(),
            payment_method: PaymentMethod::Cash,
        };

        let booking = store.confirm_worker_booking(&worker, &schedule).unwrap();

        assert_eq!(booking.provider_name, "Rahul Sharma");
        assert_eq!(booking.price_cents, 45000);
        assert!(!store.has_active_job());
        assert_eq!(store.bookings_with_status(BookingStatus::Upcoming).len(), 1);

        // Without an active job the confirmation is a no-op
        assert!(store.confirm_worker_booking(&worker, &schedule).is_none());
    }

    #[test]
    fn test_cancel_booking() {
        let store = AppStore::new();
        store.set_active_job(ActiveJob::new("Plumbing Leak Repair", 50000));

        let worker = Worker {
            id: "2".to_string(),
            name: "Amit Verma".to_string(),
            rating: 4.5,
            jobs_done: 89,
            bid_cents: 40000,
            skills: vec!["Tap Repair".to_string()],
        };
        let schedule = BookingSchedule {
            address: "12, HSR Layout, Bangalore".to_string(),
            date: "05-12-2024".to_string(),
            time: "09:00 AM".to_string(),
            payment_method: PaymentMethod::Upi,
        };
        let booking = store.confirm_worker_booking(&worker, &schedule).unwrap();

        assert!(store.cancel_booking(&booking.id));
        assert_eq!(
            store.bookings_with_status(BookingStatus::Cancelled).len(),
            1
        );
        assert!(store.bookings_with_status(BookingStatus::Upcoming).is_empty());
    }

    #[test]
    fn test_every_action_bumps_the_revision() {
        let store = AppStore::new();
        let mut rx = store.subscribe();
        assert_eq!(store.revision(), 0);

        store.add_to_cart(&test_service("a", 49900));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);

        store.sign_out();
        store.clear_cart();
        assert_eq!(store.revision(), 3);
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_snapshot_is_a_full_copy() {
        let store = AppStore::new();
        store.login(test_profile());
        store.add_to_cart(&test_service("a", 49900));

        let snapshot = store.snapshot();
        assert!(snapshot.session.is_authenticated);
        assert_eq!(snapshot.cart.total_quantity(), 1);

        // Mutating the store afterwards does not touch the snapshot
        store.clear_cart();
        assert_eq!(snapshot.cart.total_quantity(), 1);
    }
}
