//! Collaborator contracts the booking service reads from and writes to.
//!
//! The engine never owns persistent state. A deployment plugs its own storage
//! behind these traits; [`memory`] provides reference implementations used by
//! the CLI and the tests.

pub mod memory;

use chrono::{NaiveDate, Weekday};

use crate::error::{Result, StoreError};
use crate::model::{Reservation, ReservationStatus, Service, WorkingWindow};

/// Source of a barber's weekly working hours.
pub trait ScheduleStore: Send + Sync {
    /// Working windows of `barber_id` on `weekday`. Unknown barbers are
    /// [`crate::SlotError::NotFound`]; a known barber with no hours that day
    /// yields an empty list.
    fn working_windows(&self, barber_id: &str, weekday: Weekday) -> Result<Vec<WorkingWindow>>;
}

/// Persistent reservations.
pub trait ReservationStore: Send + Sync {
    /// All reservations of `barber_id` on `date`, in any status.
    fn reservations(&self, barber_id: &str, date: NaiveDate) -> Result<Vec<Reservation>>;

    /// Persist a new reservation.
    ///
    /// Must be atomic with respect to other inserts for the same barber and
    /// date: if an occupying reservation overlapping `reservation` already
    /// exists, the write is refused with [`StoreError::Conflict`]. A
    /// serializable transaction, an exclusion constraint or a single writer
    /// per barber all satisfy this. A reservation that fails
    /// [`Reservation::validate`] is refused with [`StoreError::Invalid`].
    fn insert_reservation(
        &self,
        reservation: Reservation,
    ) -> std::result::Result<Reservation, StoreError>;

    /// Move reservation `id` to `status`, enforcing the lifecycle rules.
    fn set_status(&self, id: &str, status: ReservationStatus) -> Result<Reservation>;
}

/// Service durations.
pub trait ServiceCatalog: Send + Sync {
    fn service(&self, service_id: &str) -> Result<Service>;
}
