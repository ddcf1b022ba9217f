//! Calendar date validation for query start and end dates.
//!
//! Dates must be written exactly as `YYYY-MM-DD`. The shape is checked before
//! handing the text to chrono, whose `%m`/`%d` also accept single digits and
//! whose `%Y` accepts signs and extra digits.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::ValidationError;

/// chrono format string for query dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const FIELD: &str = "date";

/// Length of `YYYY-MM-DD`
const DATE_LEN: usize = 10;

fn check_shape(text: &str) -> Result<(), &'static str> {
    let bytes = text.as_bytes();
    if bytes.len() != DATE_LEN {
        return Err("expected exactly 10 characters");
    }

    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err("expected digits separated by '-'");
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date.
///
/// Month and day are checked against the calendar, including leap years.
/// Year `0000` is rejected.
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    check_shape(text).map_err(|reason| ValidationError::invalid_date(FIELD, text, reason))?;

    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| ValidationError::invalid_date(FIELD, text, e.to_string()))?;

    if date.year() < 1 {
        return Err(ValidationError::invalid_date(
            FIELD,
            text,
            "year must be 0001 or later",
        ));
    }

    Ok(date)
}

/// Returns true iff `text` is a real calendar date written as `YYYY-MM-DD`.
pub fn validate_date(text: &str) -> bool {
    match parse_date(text) {
        Ok(_) => true,
        Err(err) => {
            debug!(date = text, error = %err, "Rejected date");
            false
        }
    }
}

/// Parse a start/end pair. Both must be valid and `start <= end`.
pub fn parse_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let start_date = parse_date(start).map_err(|e| e.for_field("start_date"))?;
    let end_date = parse_date(end).map_err(|e| e.for_field("end_date"))?;

    if start_date > end_date {
        return Err(ValidationError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }

    Ok((start_date, end_date))
}

/// Returns true iff both dates are valid and `start` is not after `end`.
pub fn validate_date_range(start: &str, end: &str) -> bool {
    match parse_date_range(start, end) {
        Ok(_) => true,
        Err(err) => {
            debug!(start, end, error = %err, "Rejected date range");
            false
        }
    }
}
