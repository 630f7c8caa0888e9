//! Free intervals inside a barber's working windows.
//!
//! Busy periods are clipped to each working span, merged, and the gaps between them
//! are returned. This is the day view the frontend draws; slot listing lives in
//! [`crate::availability`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::{occupied_intervals, working_spans};
use crate::error::Result;
use crate::model::{Reservation, WorkingWindow};

/// A gap in a barber's day with no occupying reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeInterval {
    #[serde(rename = "start", with = "crate::model::hhmm")]
    pub start_minute: u32,
    #[serde(rename = "end", with = "crate::model::hhmm")]
    pub end_minute: u32,
    pub duration_minutes: u32,
}

/// Merge overlapping or adjacent intervals, clipped to `[window_start, window_end)`.
///
/// Returns a sorted, non-overlapping list of `(start, end)` pairs.
pub(crate) fn merge_intervals(
    intervals: &[(u32, u32)],
    window_start: u32,
    window_end: u32,
) -> Vec<(u32, u32)> {
    let mut intervals: Vec<(u32, u32)> = intervals
        .iter()
        .filter(|&&(start, end)| start < window_end && end > window_start)
        .map(|&(start, end)| (start.max(window_start), end.min(window_end)))
        .collect();

    intervals.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Free intervals for `barber_id` on `date`, sorted by start.
///
/// Working windows are merged into the same continuous spans that slot
/// listing and admission use, so a gap shown here is bookable end to end. A
/// lunch break between two windows never shows up as free time.
pub fn free_intervals(
    barber_id: &str,
    date: NaiveDate,
    windows: &[WorkingWindow],
    reservations: &[Reservation],
) -> Result<Vec<FreeInterval>> {
    let spans = working_spans(date, windows)?;
    let busy = occupied_intervals(barber_id, date, reservations)?;

    let mut free = Vec::new();
    for (span_start, span_end) in spans {
        let mut cursor = span_start;
        for (busy_start, busy_end) in merge_intervals(&busy, span_start, span_end) {
            if cursor < busy_start {
                free.push(FreeInterval {
                    start_minute: cursor,
                    end_minute: busy_start,
                    duration_minutes: busy_start - cursor,
                });
            }
            cursor = cursor.max(busy_end);
        }
        if cursor < span_end {
            free.push(FreeInterval {
                start_minute: cursor,
                end_minute: span_end,
                duration_minutes: span_end - cursor,
            });
        }
    }

    Ok(free)
}
