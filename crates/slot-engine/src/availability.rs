//! Bookable slot computation for one barber on one day.
//!
//! The day's working windows are merged into continuous spans (overlapping or
//! touching windows become one), candidates are generated at a fixed
//! granularity inside each span, and a candidate survives only if
//! `[candidate, candidate + duration)` overlaps no occupying reservation.
//! The computation is pure: callers fetch windows and reservations themselves.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::clock::minutes_to_time;
use crate::conflict::overlaps;
use crate::error::{Result, SlotError};
use crate::freebusy::merge_intervals;
use crate::model::{Reservation, WorkingWindow};

/// Default spacing between candidate start times.
pub const DEFAULT_GRANULARITY_MINUTES: u32 = 15;

/// Continuous working spans for `date`: applicable windows, validated, then
/// merged when they overlap or touch. Sorted by start.
pub(crate) fn working_spans(
    date: NaiveDate,
    windows: &[WorkingWindow],
) -> Result<Vec<(u32, u32)>> {
    let weekday = date.weekday();
    let spans = windows
        .iter()
        .filter(|w| w.weekday == weekday)
        .map(|w| w.validate().map(|()| (w.start_minute, w.end_minute)))
        .collect::<Result<Vec<_>>>()?;
    Ok(merge_intervals(&spans, 0, u32::MAX))
}

/// `(start, end)` of every reservation that blocks `barber_id` on `date`.
///
/// A blocking reservation that breaks its own invariant is an error rather
/// than silently blocking nothing.
pub(crate) fn occupied_intervals(
    barber_id: &str,
    date: NaiveDate,
    reservations: &[Reservation],
) -> Result<Vec<(u32, u32)>> {
    reservations
        .iter()
        .filter(|r| r.blocks(barber_id, date))
        .map(|r| r.validate().map(|()| (r.start_minute, r.end_minute)))
        .collect()
}

/// Compute the ascending list of start minutes at which a service of
/// `duration_minutes` can be booked with `barber_id` on `date`.
///
/// Windows for other weekdays and reservations for other barbers, other dates,
/// or with status CANCELADA are ignored. Windows that overlap or touch are
/// treated as one span, so a booking may run across the seam. A span shorter
/// than the duration simply yields nothing.
///
/// # Errors
///
/// - [`SlotError::InvalidDuration`] if `duration_minutes` is zero.
/// - [`SlotError::InvalidGranularity`] if `granularity_minutes` is zero.
/// - [`SlotError::InvalidWindow`] if an applicable window breaks its invariant.
/// - [`SlotError::InvalidReservation`] if a blocking reservation does.
pub fn compute_available_slots(
    barber_id: &str,
    date: NaiveDate,
    duration_minutes: u32,
    windows: &[WorkingWindow],
    reservations: &[Reservation],
    granularity_minutes: u32,
) -> Result<Vec<u32>> {
    if duration_minutes == 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }
    if granularity_minutes == 0 {
        return Err(SlotError::InvalidGranularity(granularity_minutes));
    }

    let spans = working_spans(date, windows)?;
    let busy = occupied_intervals(barber_id, date, reservations)?;

    let mut slots = Vec::new();
    for &(span_start, span_end) in &spans {
        if duration_minutes > span_end - span_start {
            continue;
        }
        let last_start = span_end - duration_minutes;
        let mut candidate = span_start;
        while candidate <= last_start {
            let end = candidate + duration_minutes;
            if !busy.iter().any(|&(s, e)| overlaps(candidate, end, s, e)) {
                slots.push(candidate);
            }
            match candidate.checked_add(granularity_minutes) {
                Some(next) => candidate = next,
                None => break,
            }
        }
    }

    debug!(
        barber_id,
        %date,
        duration_minutes,
        spans = spans.len(),
        occupied = busy.len(),
        slots = slots.len(),
        "computed available slots"
    );

    Ok(slots)
}

/// The earliest bookable start, if any.
pub fn first_available_slot(
    barber_id: &str,
    date: NaiveDate,
    duration_minutes: u32,
    windows: &[WorkingWindow],
    reservations: &[Reservation],
    granularity_minutes: u32,
) -> Result<Option<u32>> {
    compute_available_slots(
        barber_id,
        date,
        duration_minutes,
        windows,
        reservations,
        granularity_minutes,
    )
    .map(|slots| slots.first().copied())
}

/// Render start minutes as `"HH:mm"` labels.
pub fn format_slots(slots: &[u32]) -> Vec<String> {
    slots.iter().map(|&m| minutes_to_time(m)).collect()
}
