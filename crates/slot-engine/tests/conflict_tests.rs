//! Tests for the overlap predicate and double-booking audit.

use chrono::NaiveDate;
use slot_engine::{find_conflicts, overlaps, Reservation, ReservationStatus};

/// Helper to create a booked reservation from minute offsets on a given day.
fn reservation(id: &str, barber: &str, day: u32, start: u32, end: u32) -> Reservation {
    Reservation {
        id: id.to_string(),
        barber_id: barber.to_string(),
        service_id: "corte".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
        start_minute: start,
        end_minute: end,
        status: ReservationStatus::Booked,
    }
}

#[test]
fn half_open_overlap_predicate() {
    assert!(overlaps(600, 630, 615, 645));
    assert!(overlaps(600, 720, 630, 660));
    assert!(!overlaps(600, 630, 630, 660), "touching intervals do not overlap");
    assert!(!overlaps(600, 630, 700, 730));
}

#[test]
fn two_overlapping_bookings_detected() {
    let list = vec![
        reservation("r1", "ana", 16, 540, 600),
        reservation("r2", "ana", 16, 570, 630),
    ];

    let conflicts = find_conflicts(&list);

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].first.id, "r1");
    assert_eq!(conflicts[0].second.id, "r2");
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn adjacent_bookings_not_a_conflict() {
    let list = vec![
        reservation("r1", "ana", 16, 540, 600),
        reservation("r2", "ana", 16, 600, 660),
    ];
    assert!(find_conflicts(&list).is_empty());
}

#[test]
fn different_barbers_or_days_not_a_conflict() {
    let list = vec![
        reservation("r1", "ana", 16, 540, 600),
        reservation("r2", "luis", 16, 540, 600),
        reservation("r3", "ana", 17, 540, 600),
    ];
    assert!(find_conflicts(&list).is_empty());
}

#[test]
fn cancelled_bookings_are_ignored() {
    let mut cancelled = reservation("r2", "ana", 16, 540, 600);
    cancelled.status = ReservationStatus::Cancelled;
    let list = vec![reservation("r1", "ana", 16, 540, 600), cancelled];
    assert!(find_conflicts(&list).is_empty());
}

#[test]
fn contained_booking_reports_its_length() {
    let list = vec![
        reservation("r1", "ana", 16, 540, 720),
        reservation("r2", "ana", 16, 600, 660),
    ];
    let conflicts = find_conflicts(&list);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}

#[test]
fn every_pair_is_reported() {
    let list = vec![
        reservation("r1", "ana", 16, 540, 660),
        reservation("r2", "ana", 16, 570, 600),
        reservation("r3", "ana", 16, 590, 620),
    ];
    let pairs: Vec<(String, String)> = find_conflicts(&list)
        .into_iter()
        .map(|c| (c.first.id, c.second.id))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("r1".to_string(), "r2".to_string()),
            ("r1".to_string(), "r3".to_string()),
            ("r2".to_string(), "r3".to_string()),
        ]
    );
}

#[test]
fn empty_list_no_conflicts() {
    assert!(find_conflicts(&[]).is_empty());
}
