//! Inclusive date window used to filter reviews.
//!
//! Review sites list newest reviews first, so the position of a review
//! relative to the window also drives pagination: anything older than the
//! start means every later review is older too.

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPosition {
    Within,
    /// Strictly before `start`; collection for the source stops here
    OlderThanStart,
    /// Strictly after `end`; skipped, collection continues
    NewerThanEnd,
}

/// `[start, end]`, both ends inclusive.
///
/// An inverted window (start after end) is representable and simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.classify(date) == WindowPosition::Within
    }

    pub fn classify(&self, date: NaiveDate) -> WindowPosition {
        if date < self.start {
            WindowPosition::OlderThanStart
        } else if date > self.end {
            WindowPosition::NewerThanEnd
        } else {
            WindowPosition::Within
        }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
