use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::error::SubmissionError;

/// Day the clock times are anchored to when computing a duration.
/// Only the clock difference matters, so an end before the start stays negative.
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parses `HH:MM`; entries have minute granularity.
pub fn parse_clock_time(input: &str) -> Result<NaiveTime, SubmissionError> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| SubmissionError::InvalidTime(input.to_string()))
}

/// Parses `YYYY-MM-DD`, or the keywords `today`/`yesterday` relative to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, SubmissionError> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| SubmissionError::InvalidDate(input.to_string()))
}

/// Hours between two clock times on the reference date, rounded to 2 decimals.
pub fn elapsed_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let start = REFERENCE_DATE.and_time(start);
    let end = REFERENCE_DATE.and_time(end);
    let seconds = end.signed_duration_since(start).num_seconds();
    round_hours(seconds as f64 / 3600.0)
}

/// Rounds to 2 fractional digits, half away from zero.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Day-of-week slot with Sunday as 0.
pub fn day_slot(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}
