//! Tests for "HH:mm" ↔ minute-of-day arithmetic.

use slot_engine::error::SlotError;
use slot_engine::{add_minutes, minutes_to_time, time_to_minutes};

#[test]
fn parses_hours_and_minutes() {
    assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    assert_eq!(time_to_minutes("09:30").unwrap(), 570);
    assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn rejects_out_of_range_parts() {
    for input in ["24:00", "12:60", "99:99"] {
        assert!(
            matches!(time_to_minutes(input), Err(SlotError::Format { .. })),
            "{} should be rejected",
            input
        );
    }
}

#[test]
fn rejects_malformed_input() {
    for input in ["", "0930", "ab:cd", "09:3x", "-1:00", "09:", ":30", "09:30:00", " 09:30", "+9:30", "009:30"] {
        assert!(
            matches!(time_to_minutes(input), Err(SlotError::Format { .. })),
            "{:?} should be rejected",
            input
        );
    }
}

#[test]
fn formats_zero_padded() {
    assert_eq!(minutes_to_time(0), "00:00");
    assert_eq!(minutes_to_time(5), "00:05");
    assert_eq!(minutes_to_time(570), "09:30");
    assert_eq!(minutes_to_time(1439), "23:59");
}

#[test]
fn formatting_wraps_past_midnight() {
    assert_eq!(minutes_to_time(1440), "00:00");
    assert_eq!(minutes_to_time(1440 + 75), "01:15");
}

#[test]
fn add_minutes_within_day() {
    assert_eq!(add_minutes("09:00", 30).unwrap(), "09:30");
    assert_eq!(add_minutes("09:45", 30).unwrap(), "10:15");
    assert_eq!(add_minutes("10:30", -30).unwrap(), "10:00");
}

#[test]
fn add_minutes_wraps_without_tracking_the_day() {
    assert_eq!(add_minutes("23:30", 45).unwrap(), "00:15");
    assert_eq!(add_minutes("12:00", 24 * 60).unwrap(), "12:00");
}

#[test]
fn add_minutes_rejects_negative_total() {
    assert_eq!(
        add_minutes("00:10", -20),
        Err(SlotError::NegativeMinutes(-10))
    );
}

#[test]
fn add_minutes_propagates_format_errors() {
    assert!(matches!(
        add_minutes("7pm", 10),
        Err(SlotError::Format { .. })
    ));
}
