//! Overlap detection between reservations.
//!
//! Intervals are half-open: `[start, end)`. A reservation that ends exactly
//! when another starts is NOT a conflict.

use crate::model::Reservation;

/// A pair of occupying reservations that double-book a barber.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub first: Reservation,
    pub second: Reservation,
    pub overlap_minutes: u32,
}

/// Half-open overlap test: `max(s1, s2) < min(e1, e2)`.
pub fn overlaps(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    start_a.max(start_b) < end_a.min(end_b)
}

/// Minutes shared by two intervals, zero when they do not overlap.
pub fn overlap_minutes(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> u32 {
    end_a.min(end_b).saturating_sub(start_a.max(start_b))
}

/// Find every pair of occupying reservations for the same barber and date whose
/// intervals overlap.
///
/// Cancelled reservations are ignored. Pairs are reported in input order
/// (`first` appears before `second` in `reservations`).
pub fn find_conflicts(reservations: &[Reservation]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in reservations.iter().enumerate() {
        if !a.occupies_time() {
            continue;
        }
        for b in &reservations[i + 1..] {
            if !b.blocks(&a.barber_id, a.date) {
                continue;
            }
            if overlaps(a.start_minute, a.end_minute, b.start_minute, b.end_minute) {
                conflicts.push(Conflict {
                    first: a.clone(),
                    second: b.clone(),
                    overlap_minutes: overlap_minutes(
                        a.start_minute,
                        a.end_minute,
                        b.start_minute,
                        b.end_minute,
                    ),
                });
            }
        }
    }

    conflicts
}
