//! Common error types shared across validators.

use chrono::NaiveDate;
use thiserror::Error;

use crate::validation::SymbolValidationError;

/// Validation errors for chart query inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Symbol failed validation
    #[error(transparent)]
    Symbol(#[from] SymbolValidationError),

    /// Value has no integer reading
    #[error("{field} value {value} is not an integer")]
    NotAnInteger { field: &'static str, value: String },

    /// Integer is not one of the accepted codes
    #[error("{field} value {value} is not one of {allowed}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        allowed: &'static str,
    },

    /// Text is not a calendar date in YYYY-MM-DD form
    #[error("{field} '{value}' is not a valid YYYY-MM-DD date: {reason}")]
    InvalidDate {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Start date comes after end date
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl ValidationError {
    /// Create a NotAnInteger validation error
    pub fn not_an_integer(field: &'static str, value: impl Into<String>) -> Self {
        ValidationError::NotAnInteger {
            field,
            value: value.into(),
        }
    }

    /// Create an OutOfRange validation error
    pub fn out_of_range(field: &'static str, value: i64, allowed: &'static str) -> Self {
        ValidationError::OutOfRange {
            field,
            value,
            allowed,
        }
    }

    /// Create an InvalidDate validation error
    pub fn invalid_date(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidDate {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Replace the field name carried by the error, where it has one.
    pub fn for_field(self, name: &'static str) -> Self {
        match self {
            ValidationError::NotAnInteger { value, .. } => {
                ValidationError::NotAnInteger { field: name, value }
            }
            ValidationError::OutOfRange { value, allowed, .. } => ValidationError::OutOfRange {
                field: name,
                value,
                allowed,
            },
            ValidationError::InvalidDate { value, reason, .. } => ValidationError::InvalidDate {
                field: name,
                value,
                reason,
            },
            other => other,
        }
    }
}

/// Errors from reading a chart query document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QueryError {
    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization failed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
