//! Time utilities: stamping records with the date and HH:MM strings.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Pads a clock component to two digits.
fn pad(c: u32) -> String {
    if c >= 10 {
        c.to_string()
    } else {
        format!("0{}", c)
    }
}

/// `HH:MM`, both components zero-padded.
pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{}:{}", pad(hour), pad(minute))
}

/// `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Split a moment into the (date, time) strings stored in the log.
pub fn stamp(at: NaiveDateTime) -> (String, String) {
    (
        format_date(at.date()),
        format_time(at.hour(), at.minute()),
    )
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse `--at` values: `YYYY-MM-DD HH:MM`.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}
