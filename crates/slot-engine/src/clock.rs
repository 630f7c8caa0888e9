//! Minute-of-day arithmetic on "HH:mm" strings.
//!
//! All values are minutes since local midnight. Formatting wraps modulo 24h and
//! does not track day rollover, so `add_minutes("23:30", 45)` is `"00:15"` with
//! no indication that the date changed.

use crate::error::{Result, SlotError};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse `"HH:mm"` into minutes since midnight.
///
/// Hours and minutes may be one or two digits (`"9:05"` is accepted), but
/// anything else (signs, whitespace, seconds, hour > 23, minute > 59) is a
/// [`SlotError::Format`].
pub fn time_to_minutes(time: &str) -> Result<u32> {
    let (hour, minute) = time
        .split_once(':')
        .ok_or_else(|| format_error(time, "expected HH:mm"))?;

    let hour = parse_part(time, hour, "hour")?;
    let minute = parse_part(time, minute, "minute")?;

    if hour > 23 {
        return Err(format_error(time, "hour must be 0-23"));
    }
    if minute > 59 {
        return Err(format_error(time, "minute must be 0-59"));
    }

    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as zero-padded `"HH:mm"`, wrapping past 24h.
pub fn minutes_to_time(total: u32) -> String {
    let hour = (total / 60) % 24;
    let minute = total % 60;
    format!("{:02}:{:02}", hour, minute)
}

/// Add `delta` minutes (possibly negative) to an `"HH:mm"` time.
///
/// The result wraps past midnight. A delta that would take the total below
/// zero is rejected with [`SlotError::NegativeMinutes`] instead of wrapping
/// backwards into the previous day, and one too large for `i64` with
/// [`SlotError::MinuteOverflow`].
pub fn add_minutes(time: &str, delta: i64) -> Result<String> {
    let base = i64::from(time_to_minutes(time)?);
    let total = base
        .checked_add(delta)
        .ok_or_else(|| SlotError::MinuteOverflow {
            time: time.to_string(),
            delta,
        })?;
    if total < 0 {
        return Err(SlotError::NegativeMinutes(total));
    }
    let wrapped = total % i64::from(MINUTES_PER_DAY);
    // `wrapped` is in [0, 1440), so the conversion cannot fail.
    Ok(minutes_to_time(wrapped as u32))
}

fn parse_part(input: &str, part: &str, what: &str) -> Result<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error(input, &format!("{} must be 1-2 digits", what)));
    }
    part.parse::<u32>()
        .map_err(|e| format_error(input, &e.to_string()))
}

fn format_error(input: &str, reason: &str) -> SlotError {
    SlotError::Format {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
