//! # slot-engine
//!
//! Appointment slot computation and conflict-free reservation admission for a
//! barbershop booking service.
//!
//! The engine is pure: callers fetch a barber's working windows and existing
//! reservations, and the engine lists bookable start times or decides whether
//! a requested start can be admitted. [`booking::BookingService`] wires it to
//! storage, catalog and notification collaborators.
//!
//! ## Modules
//!
//! - [`clock`] — `"HH:mm"` ↔ minute-of-day arithmetic
//! - [`model`] — Working windows, services, reservations, slot requests
//! - [`availability`] — Bookable start minutes for a barber and day
//! - [`admission`] — Re-check and admit a single slot request
//! - [`conflict`] — Half-open overlap test and double-booking audit
//! - [`freebusy`] — Free intervals inside working hours
//! - [`store`] — Collaborator traits and in-memory implementations
//! - [`notify`] — Best-effort confirmation notices
//! - [`booking`] — Admission service with bounded retry
//! - [`config`] — Engine settings
//! - [`error`] — Error types

pub mod admission;
pub mod availability;
pub mod booking;
pub mod clock;
pub mod config;
pub mod conflict;
pub mod error;
pub mod freebusy;
pub mod model;
pub mod notify;
pub mod store;

pub use admission::admit_reservation;
pub use availability::{compute_available_slots, first_available_slot, format_slots};
pub use booking::BookingService;
pub use clock::{add_minutes, minutes_to_time, time_to_minutes};
pub use config::EngineConfig;
pub use conflict::{find_conflicts, overlaps, Conflict};
pub use error::{SlotError, StoreError};
pub use freebusy::{free_intervals, FreeInterval};
pub use model::{Reservation, ReservationStatus, Service, SlotRequest, WorkingWindow};
