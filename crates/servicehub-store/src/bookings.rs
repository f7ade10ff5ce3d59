//! # Bookings State
//!
//! The list of scheduled and past service engagements behind the bookings
//! tab, with its All/Upcoming/Completed filters.

use serde::{Deserialize, Serialize};
use servicehub_core::{Booking, BookingStatus};
use tracing::debug;
use ts_rs::TS;

/// Append-only booking history with status transitions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingLog {
    /// Bookings, oldest first.
    pub entries: Vec<Booking>,
}

impl BookingLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        BookingLog::default()
    }

    /// Appends a booking.
    pub fn add(&mut self, booking: Booking) {
        self.entries.push(booking);
    }

    /// Cancels an upcoming booking.
    ///
    /// ## Behavior
    /// Only `Upcoming` can transition to `Cancelled`; completed or already
    /// cancelled bookings are left untouched, as is an unknown id.
    ///
    /// ## Returns
    /// Whether a booking actually changed status.
    pub fn cancel(&mut self, booking_id: &str) -> bool {
        match self.entries.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) if booking.status == BookingStatus::Upcoming => {
                booking.status = BookingStatus::Cancelled;
                true
            }
            Some(booking) => {
                debug!(
                    booking_id = %booking_id,
                    status = ?booking.status,
                    "cancel ignored: booking is not upcoming"
                );
                false
            }
            None => false,
        }
    }

    /// All bookings with the given status, oldest first.
    pub fn with_status(&self, status: BookingStatus) -> Vec<&Booking> {
        self.entries.iter().filter(|b| b.status == status).collect()
    }

    /// Number of bookings in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
