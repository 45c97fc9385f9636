//! Timestamp conversion for ping logs
//!
//! `ping -D` prefixes each reply with the Unix time in seconds, with a
//! fractional part (usually microseconds).

use chrono::{DateTime, Utc};

const NANOS_DIGITS: usize = 9;

/// Parse `<seconds>[.<fraction>]` since the Unix epoch
///
/// Fractions longer than nanosecond precision are truncated. Returns `None`
/// for anything that is not a plain non-negative decimal or that falls
/// outside the representable date range.
pub fn parse_epoch_seconds(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    let (secs, fraction) = match text.split_once('.') {
        Some((secs, fraction)) => (secs, fraction),
        None => (text, ""),
    };

    if secs.is_empty() || !secs.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let secs: i64 = secs.parse().ok()?;
    let nanos = fraction_to_nanos(fraction);
    DateTime::from_timestamp(secs, nanos)
}

fn fraction_to_nanos(fraction: &str) -> u32 {
    fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(NANOS_DIGITS)
        .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'))
}
