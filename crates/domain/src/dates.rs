//! Date parsing for the interactive prompts.
//!
//! Two incompatible formats are in use: the registration and booking
//! flows read ISO dates (`YYYY-MM-DD`) while the reporting flows read
//! US-style dates (`mm-dd-yyyy`). The format of each prompt is fixed;
//! normalizing them would swap day and month for half the inputs.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Days added to the window start when listing a week of bookings.
/// The window is inclusive on both ends, so it covers eight calendar days.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// A date that could not be parsed in the format its prompt requires.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date {input:?}: expected {expected}")]
pub struct DateParseError {
    pub input: String,
    pub expected: &'static str,
}

/// Parses a date entered as `YYYY-MM-DD`.
pub fn parse_iso(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| DateParseError {
        input: input.to_string(),
        expected: "YYYY-MM-DD",
    })
}

/// Parses a date entered as `mm-dd-yyyy`.
pub fn parse_mdy(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), "%m-%d-%Y").map_err(|_| DateParseError {
        input: input.to_string(),
        expected: "mm-dd-yyyy",
    })
}

/// End of the inclusive week window starting at `start`.
pub fn week_window_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(WEEK_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso() {
        let date = parse_iso("2020-03-04").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 4).unwrap());
    }

    #[test]
    fn test_parse_mdy() {
        let date = parse_mdy("03-04-2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 4).unwrap());
    }

    #[test]
    fn test_formats_disagree() {
        // The same text means March 4th in one format and is not a
        // date at all in the other.
        assert!(parse_mdy("03-04-2020").is_ok());
        assert!(parse_iso("03-04-2020").is_err());
        assert!(parse_iso("2020-03-04").is_ok());
        assert!(parse_mdy("2020-03-04").is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_iso(" 2020-03-04 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_iso("not-a-date").unwrap_err();
        assert_eq!(err.expected, "YYYY-MM-DD");
        assert!(parse_mdy("13-40-2020").is_err());
    }

    #[test]
    fn test_week_window_end() {
        let start = NaiveDate::from_ymd_opt(2020, 3, 4).unwrap();
        assert_eq!(
            week_window_end(start),
            NaiveDate::from_ymd_opt(2020, 3, 11).unwrap()
        );
    }
}
