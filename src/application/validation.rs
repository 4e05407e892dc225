//! Pre-flight validation of a scrape request
//!
//! Runs before any network activity; a failure here is the only thing that
//! aborts a run.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::date_window::DateWindow;
use crate::domain::review::{SourceSelector, UnknownSourceError};
use crate::utils::parse_date;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Company name cannot be empty")]
    EmptyCompanyName,

    #[error("{field} must be in YYYY-MM-DD format (got '{value}')")]
    MalformedDate { field: &'static str, value: String },

    #[error("Start date ({start}) must be before or equal to end date ({end})")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("{field} ({date}) cannot be in the future")]
    FutureDate { field: &'static str, date: NaiveDate },

    #[error(transparent)]
    UnknownSource(#[from] UnknownSourceError),
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub company_name: String,
    pub window: DateWindow,
    pub source: SourceSelector,
}

/// Check raw caller input against `today`.
///
/// Order: company name, date formats, range, future dates, source.
pub fn validate_request(
    company_name: &str,
    start_date: &str,
    end_date: &str,
    source: &str,
    today: NaiveDate,
) -> Result<ScrapeRequest, ValidationError> {
    let company_name = company_name.trim();
    if company_name.is_empty() {
        return Err(ValidationError::EmptyCompanyName);
    }

    let start = parse_date(start_date).ok_or_else(|| ValidationError::MalformedDate {
        field: "Start date",
        value: start_date.to_string(),
    })?;
    let end = parse_date(end_date).ok_or_else(|| ValidationError::MalformedDate {
        field: "End date",
        value: end_date.to_string(),
    })?;

    if start > end {
        return Err(ValidationError::InvertedRange { start, end });
    }
    if start > today {
        return Err(ValidationError::FutureDate {
            field: "Start date",
            date: start,
        });
    }
    if end > today {
        return Err(ValidationError::FutureDate {
            field: "End date",
            date: end,
        });
    }

    let source = source.parse::<SourceSelector>()?;

    Ok(ScrapeRequest {
        company_name: company_name.to_string(),
        window: DateWindow::new(start, end),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::ReviewSource;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let request = validate_request("  Slack ", "2023-01-01", "2024-01-15", "capterra", today()).unwrap();

        assert_eq!(request.company_name, "Slack");
        assert_eq!(request.source, SourceSelector::Single(ReviewSource::Capterra));
        assert_eq!(request.window.end(), today());
    }

    #[rstest]
    #[case("", "2023-01-01", "2023-06-01", "all")]
    #[case("   ", "2023-01-01", "2023-06-01", "all")]
    fn test_empty_company_name(
        #[case] company: &str,
        #[case] start: &str,
        #[case] end: &str,
        #[case] source: &str,
    ) {
        assert_eq!(
            validate_request(company, start, end, source, today()),
            Err(ValidationError::EmptyCompanyName)
        );
    }

    #[rstest]
    #[case("2023-02-30", "Start date")]
    #[case("2023/01/01", "Start date")]
    #[case("2023-01-01T00:00:00", "Start date")]
    #[case("01-15-2023", "Start date")]
    fn test_malformed_start_date(#[case] start: &str, #[case] field: &str) {
        let err = validate_request("Acme", start, "2023-06-01", "all", today()).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedDate { field: f, .. } if f == field));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = validate_request("Acme", "2023-06-02", "2023-06-01", "all", today()).unwrap_err();
        assert!(matches!(err, ValidationError::InvertedRange { .. }));
    }

    #[test]
    fn test_future_dates_rejected() {
        let err = validate_request("Acme", "2023-06-01", "2024-01-16", "all", today()).unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate { field: "End date", .. }));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let err = validate_request("Acme", "2023-06-01", "2023-07-01", "trustpilot", today()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSource(_)));
        assert!(err.to_string().starts_with("Source must be one of"));
    }
}
