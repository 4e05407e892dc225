//! Per-page parsing context

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy)]
pub struct ParseContext {
    /// 1-based review page number
    pub page: u32,

    /// Reference date for relative phrases and the unparseable-date fallback
    pub today: NaiveDate,
}

impl ParseContext {
    pub fn new(page: u32, today: NaiveDate) -> Self {
        Self { page, today }
    }
}
