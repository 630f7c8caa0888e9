//! Error types for slot-engine operations.

use thiserror::Error;

use crate::model::ReservationStatus;

/// Failures reported by a reservation store.
///
/// A `Conflict` means the store refused the write because another occupying
/// reservation already covers part of the interval. Callers treat it as a
/// signal to re-read and re-check, not as a crash.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("write conflict: {0}")]
    Conflict(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid reservation: {0}")]
    Invalid(String),
}

impl StoreError {
    /// Conflicts and outages may clear on a fresh read; invalid data will not.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, StoreError::Invalid(_))
    }
}

/// Every way a slot listing, admission or store operation can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid time '{input}': {reason}")]
    Format { input: String, reason: String },

    #[error("Negative minute total: {0}")]
    NegativeMinutes(i64),

    #[error("Adding {delta} minutes to '{time}' overflows")]
    MinuteOverflow { time: String, delta: i64 },

    #[error("Invalid working window: {0}")]
    InvalidWindow(String),

    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),

    #[error("Invalid service duration: {0} minutes")]
    InvalidDuration(u32),

    #[error("Invalid slot granularity: {0} minutes")]
    InvalidGranularity(u32),

    #[error("Requested interval {start}-{end} is outside working hours")]
    OutOfWindow { start: String, end: String },

    #[error("Requested interval {start}-{end} overlaps reservation {conflicting_id}")]
    Overlap {
        start: String,
        end: String,
        conflicting_id: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Cannot move reservation {id} from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: ReservationStatus,
        to: ReservationStatus,
    },
}

impl SlotError {
    /// True for rejections caused by other bookings, as opposed to bad input.
    pub fn is_conflict(&self) -> bool {
        match self {
            SlotError::Overlap { .. } => true,
            SlotError::Store(err) => err.is_retryable(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
