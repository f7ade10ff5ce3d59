//! # Active Job State
//!
//! The singleton job slot: a posted problem waiting for worker bids, and the
//! confirmation step that turns a chosen bid into a booking.
//!
//! ## Job Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Active Job Lifecycle                               │
//! │                                                                         │
//! │  Post job ────────► set_active(job) ─────► slot = Some(job)            │
//! │                        (posting again replaces the slot)               │
//! │                                                                         │
//! │  Give up ─────────► clear_active() ──────► slot = None                 │
//! │                                                                         │
//! │  Pick a bid ──────► confirm_booking() ───► Booking (upcoming)          │
//! │                        consumes the slot; priced at the worker's bid   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use servicehub_core::{ActiveJob, Booking, BookingSchedule, BookingStatus, Worker};
use ts_rs::TS;
use uuid::Uuid;

/// The singleton active-job slot.
///
/// Zero or one job; status is implicit (a job in the slot is seeking bids).
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobBoard {
    /// The job currently collecting bids, if any.
    pub active: Option<ActiveJob>,
}

impl JobBoard {
    /// Creates an empty job board.
    pub fn new() -> Self {
        JobBoard::default()
    }

    /// Posts a job. Overwrites any previous one; this is a singleton slot,
    /// not a queue.
    pub fn set_active(&mut self, job: ActiveJob) {
        self.active = Some(job);
    }

    /// Clears the slot without booking anyone.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Whether a job is currently collecting bids.
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Confirms a worker's bid for the active job.
    ///
    /// ## Behavior
    /// Consumes the slot and builds an upcoming [`Booking`] priced at the
    /// worker's bid, scheduled per the finalize-screen details. Returns
    /// `None` (and changes nothing) when no job is active.
    pub fn confirm_booking(
        &mut self,
        worker: &Worker,
        schedule: &BookingSchedule,
    ) -> Option<Booking> {
        let job = self.active.take()?;

        Some(Booking {
            id: Uuid::new_v4().to_string(),
            service_name: job.description,
            provider_name: worker.name.clone(),
            date: schedule.date.clone(),
            time: schedule.time.clone(),
            status: BookingStatus::Upcoming,
            price_cents: worker.bid_cents,
            // Same placeholder avatars the bid list renders
            image: format!("https://i.pravatar.cc/150?u={}", worker.id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicehub_core::PaymentMethod;

    fn test_worker() -> Worker {
        Worker {
            id: "1".to_string(),
            name: "Rahul Sharma".to_string(),
            rating: 4.8,
            jobs_done: 124,
            bid_cents: 45000,
            skills: vec!["Pipe Leakage Repair".to_string()],
        }
    }

    fn test_schedule() -> BookingSchedule {
        BookingSchedule {
            address: "12, HSR Layout, Bangalore".to_string(),
            date: "05-12-2024".to_string(),
            time: "09:00 AM".to_string(),
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_posting_replaces_the_slot() {
        let mut board = JobBoard::new();
        board.set_active(ActiveJob::new("Fix leaking pipe", 50000));
        board.set_active(ActiveJob::new("Unclog kitchen drain", 30000));

        // Exactly one job, the latest
        let active = board.active.as_ref().unwrap();
        assert_eq!(active.description, "Unclog kitchen drain");
        assert_eq!(active.budget_cents, 30000);
    }

    #[test]
    fn test_clear_active() {
        let mut board = JobBoard::new();
        board.set_active(ActiveJob::new("Fix leaking pipe", 50000));

        board.clear_active();
        assert!(!board.has_active());
    }

    #[test]
    fn test_confirm_booking_consumes_the_job() {
        let mut board = JobBoard::new();
        board.set_active(ActiveJob::new("Plumbing Leak Repair", 50000));

        let booking = board
            .confirm_booking(&test_worker(), &test_schedule())
            .unwrap();

        assert_eq!(booking.service_name, "Plumbing Leak Repair");
        assert_eq!(booking.provider_name, "Rahul Sharma");
        assert_eq!(booking.price_cents, 45000); // the bid, not the budget
        assert_eq!(booking.status, BookingStatus::Upcoming);
        assert_eq!(booking.time, "09:00 AM");

        // The slot is spent
        assert!(!board.has_active());
    }

    #[test]
    fn test_confirm_without_active_job_does_nothing() {
        let mut board = JobBoard::new();
        let result = board.confirm_booking(&test_worker(), &test_schedule());

        assert!(result.is_none());
        assert!(!board.has_active());
    }
}
