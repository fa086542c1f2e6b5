//! Worked-hours calculation from start/finish wall-clock times

use regex::Regex;
use std::sync::OnceLock;

/// Regex for strict 24-hour HH:MM times (e.g., "07:00", "23:45")
fn time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").unwrap())
}

/// Parse a strict HH:MM string into minutes since midnight.
/// Returns None for anything that does not match the pattern exactly.
fn minutes_since_midnight(time: &str) -> Option<i64> {
    let caps = time_regex().captures(time)?;
    let hours: i64 = caps[1].parse().ok()?;
    let minutes: i64 = caps[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Compute decimal worked hours from a start/finish time pair, minus a
/// lunch deduction, rounded to the nearest quarter-hour.
///
/// Malformed or missing times yield 0.0 rather than an error. Timesheet
/// rows are filled in incrementally on site, so a half-entered row must
/// not break the running total.
///
/// A finish time earlier than the start time means the shift crossed
/// midnight, so a full day is added to the finish before subtracting.
pub fn compute_hours(start: &str, finish: &str, lunch_minutes: i64) -> f64 {
    let (Some(start), Some(mut finish)) =
        (minutes_since_midnight(start), minutes_since_midnight(finish))
    else {
        return 0.0;
    };

    if finish < start {
        finish += 24 * 60;
    }

    let lunch = lunch_minutes.max(0);
    let raw = (finish - start - lunch).max(0);

    // Nearest 15-minute increment; the 8..=14 remainder range rounds up
    let rounded = (raw + 7) / 15 * 15;

    rounded as f64 / 60.0
}
