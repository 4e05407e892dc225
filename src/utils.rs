//! Shared date utilities
//!
//! Kept as a single file: every function here is pure and anything that
//! needs "today" receives it as an argument.

use chrono::{Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical calendar date format used for input and output
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Absolute date format rendered by review sites, e.g. `Mar 05, 2024`
pub const REVIEW_DATE_TEXT_FORMAT: &str = "%b %d, %Y";

static ISO_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex"));

static RELATIVE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+(\w+)\s+ago").expect("static regex"));

/// Unit of a relative date phrase such as `3 months ago`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Day,
    Week,
    Month,
    Year,
}

impl RelativeUnit {
    /// Substring match so that plurals ("days", "months") resolve too
    pub fn from_word(word: &str) -> Option<Self> {
        if word.contains("month") {
            Some(Self::Month)
        } else if word.contains("year") {
            Some(Self::Year)
        } else if word.contains("day") {
            Some(Self::Day)
        } else if word.contains("week") {
            Some(Self::Week)
        } else {
            None
        }
    }
}

/// Parse a strict `YYYY-MM-DD` string into a real calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE_SHAPE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

pub fn validate_date_format(value: &str) -> bool {
    parse_date(value).is_some()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Calendar-aware subtraction. Month arithmetic clamps to the last valid
/// day of the target month (2024-03-31 minus one month is 2024-02-29).
pub fn subtract_relative(today: NaiveDate, amount: u32, unit: RelativeUnit) -> Option<NaiveDate> {
    match unit {
        RelativeUnit::Day => today.checked_sub_days(Days::new(u64::from(amount))),
        RelativeUnit::Week => today.checked_sub_days(Days::new(u64::from(amount) * 7)),
        RelativeUnit::Month => today.checked_sub_months(Months::new(amount)),
        RelativeUnit::Year => amount
            .checked_mul(12)
            .and_then(|months| today.checked_sub_months(Months::new(months))),
    }
}

/// Resolve free review-date text into a calendar date.
///
/// Handles relative phrases (`2 weeks ago`) and the absolute `%b %d, %Y`
/// form. Anything unrecognized resolves to `today`; this never fails.
pub fn resolve_date_text(text: &str, today: NaiveDate) -> NaiveDate {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();

    if lowered.contains("ago") {
        return resolve_relative_phrase(&lowered, today).unwrap_or(today);
    }

    NaiveDate::parse_from_str(trimmed, REVIEW_DATE_TEXT_FORMAT).unwrap_or(today)
}

fn resolve_relative_phrase(lowered: &str, today: NaiveDate) -> Option<NaiveDate> {
    let captures = RELATIVE_DATE.captures(lowered)?;
    let amount: u32 = captures[1].parse().ok()?;

    match RelativeUnit::from_word(&captures[2]) {
        Some(unit) => subtract_relative(today, amount, unit),
        // "5 hours ago" and friends
        None => Some(today),
    }
}

/// Take the date portion of a machine-readable timestamp attribute
/// (`2023-10-15T08:30:00Z` -> 2023-10-15).
pub fn truncate_timestamp(value: &str) -> Option<NaiveDate> {
    let day = value.trim().get(..10)?;
    NaiveDate::parse_from_str(day, ISO_DATE_FORMAT).ok()
}
