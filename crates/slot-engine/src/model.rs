//! Booking data model: working windows, services, reservations and requests.
//!
//! Times of day are stored as minutes since midnight and serialized as
//! `"HH:mm"` strings.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::{minutes_to_time, MINUTES_PER_DAY};
use crate::error::{Result, SlotError};

pub type BarberId = String;
pub type ServiceId = String;
pub type ReservationId = String;

/// A contiguous range of the day during which a barber accepts appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    pub weekday: Weekday,
    #[serde(rename = "start", with = "hhmm")]
    pub start_minute: u32,
    #[serde(rename = "end", with = "hhmm")]
    pub end_minute: u32,
}

impl WorkingWindow {
    pub fn new(weekday: Weekday, start_minute: u32, end_minute: u32) -> Result<Self> {
        let window = Self {
            weekday,
            start_minute,
            end_minute,
        };
        window.validate()?;
        Ok(window)
    }

    /// Check `start < end` with both inside the day.
    pub fn validate(&self) -> Result<()> {
        if self.end_minute >= MINUTES_PER_DAY {
            return Err(SlotError::InvalidWindow(format!(
                "{:?} window ends at minute {}, past the end of the day",
                self.weekday, self.end_minute
            )));
        }
        if self.start_minute >= self.end_minute {
            return Err(SlotError::InvalidWindow(format!(
                "{:?} window {}-{} does not start before it ends",
                self.weekday,
                minutes_to_time(self.start_minute),
                minutes_to_time(self.end_minute)
            )));
        }
        Ok(())
    }

    pub fn len_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

/// A bookable service and how long it takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub duration_minutes: u32,
}

impl Service {
    pub fn new(id: impl Into<ServiceId>, duration_minutes: u32) -> Result<Self> {
        if duration_minutes == 0 {
            return Err(SlotError::InvalidDuration(duration_minutes));
        }
        Ok(Self {
            id: id.into(),
            duration_minutes,
        })
    }
}

/// Reservation lifecycle. Reservations are never deleted, only moved to a
/// terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "RESERVADA")]
    Booked,
    #[serde(rename = "CANCELADA")]
    Cancelled,
    #[serde(rename = "COMPLETADA")]
    Completed,
}

impl ReservationStatus {
    /// Booked and completed reservations hold their time; cancelled ones free it.
    pub fn occupies_time(self) -> bool {
        matches!(self, ReservationStatus::Booked | ReservationStatus::Completed)
    }

    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (ReservationStatus::Booked, ReservationStatus::Cancelled)
                | (ReservationStatus::Booked, ReservationStatus::Completed)
        )
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReservationStatus::Booked => "RESERVADA",
            ReservationStatus::Cancelled => "CANCELADA",
            ReservationStatus::Completed => "COMPLETADA",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub barber_id: BarberId,
    pub service_id: ServiceId,
    pub date: NaiveDate,
    #[serde(rename = "start", with = "hhmm")]
    pub start_minute: u32,
    #[serde(rename = "end", with = "hhmm")]
    pub end_minute: u32,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Check `start < end` with both inside the day.
    pub fn validate(&self) -> Result<()> {
        if self.end_minute >= MINUTES_PER_DAY || self.start_minute >= self.end_minute {
            return Err(SlotError::InvalidReservation(format!(
                "reservation '{}' spans minutes {}-{}",
                self.id, self.start_minute, self.end_minute
            )));
        }
        Ok(())
    }

    pub fn occupies_time(&self) -> bool {
        self.status.occupies_time()
    }

    /// Whether this reservation blocks `[start, end)` for `barber_id` on `date`.
    pub fn blocks(&self, barber_id: &str, date: NaiveDate) -> bool {
        self.occupies_time() && self.barber_id == barber_id && self.date == date
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

/// A client's request to book `service_id` with a barber at a given start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    pub barber_id: BarberId,
    pub date: NaiveDate,
    pub service_id: ServiceId,
    #[serde(rename = "start", with = "hhmm")]
    pub desired_start_minute: u32,
}

/// Serde adapter storing minute-of-day values as `"HH:mm"`.
pub mod hhmm {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::clock::{minutes_to_time, time_to_minutes};

    pub fn serialize<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&minutes_to_time(*minutes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        time_to_minutes(&raw).map_err(serde::de::Error::custom)
    }
}
