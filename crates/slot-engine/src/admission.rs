//! Reservation admission: turn a [`SlotRequest`] into a booked [`Reservation`].
//!
//! Admission re-checks window containment and overlap against the reservations
//! passed in, independently of any earlier slot listing. It does not make the
//! check-then-insert sequence atomic; that is the reservation store's job (see
//! [`crate::store::ReservationStore::insert_reservation`]).

use uuid::Uuid;

use crate::availability::{occupied_intervals, working_spans};
use crate::clock::minutes_to_time;
use crate::conflict::overlaps;
use crate::error::{Result, SlotError};
use crate::model::{Reservation, ReservationStatus, Service, SlotRequest, WorkingWindow};

/// Admit `request` for `service` against the barber's windows and current bookings.
///
/// # Errors
///
/// - [`SlotError::InvalidDuration`] if the service has a zero duration.
/// - [`SlotError::InvalidWindow`] if an applicable window breaks its invariant.
/// - [`SlotError::OutOfWindow`] if `[start, start + duration)` is not fully
///   inside working hours for the request's weekday. Windows that overlap or
///   touch count as one continuous span.
/// - [`SlotError::InvalidReservation`] if a blocking reservation has
///   `start >= end` or runs past the end of the day.
/// - [`SlotError::Overlap`] if the interval intersects an occupying
///   reservation of the same barber on the same date.
pub fn admit_reservation(
    request: &SlotRequest,
    service: &Service,
    windows: &[WorkingWindow],
    reservations: &[Reservation],
) -> Result<Reservation> {
    check_admissible(request, service, windows, reservations)?;

    let start = request.desired_start_minute;
    Ok(Reservation {
        id: Uuid::new_v4().to_string(),
        barber_id: request.barber_id.clone(),
        service_id: service.id.clone(),
        date: request.date,
        start_minute: start,
        end_minute: start + service.duration_minutes,
        status: ReservationStatus::Booked,
    })
}

/// Run the admission predicates without building a reservation.
pub fn check_admissible(
    request: &SlotRequest,
    service: &Service,
    windows: &[WorkingWindow],
    reservations: &[Reservation],
) -> Result<()> {
    if service.duration_minutes == 0 {
        return Err(SlotError::InvalidDuration(service.duration_minutes));
    }

    let start = request.desired_start_minute;
    let end = start.saturating_add(service.duration_minutes);

    let spans = working_spans(request.date, windows)?;
    if !spans.iter().any(|&(s, e)| start >= s && end <= e) {
        return Err(SlotError::OutOfWindow {
            start: minutes_to_time(start),
            end: minutes_to_time(end),
        });
    }

    // Validates every blocking reservation before looking for the clash.
    occupied_intervals(&request.barber_id, request.date, reservations)?;
    let conflicting = reservations.iter().find(|r| {
        r.blocks(&request.barber_id, request.date)
            && overlaps(start, end, r.start_minute, r.end_minute)
    });
    if let Some(existing) = conflicting {
        return Err(SlotError::Overlap {
            start: minutes_to_time(start),
            end: minutes_to_time(end),
            conflicting_id: existing.id.clone(),
        });
    }

    Ok(())
}
