//! Whole-query validation.
//!
//! A [`ChartQuery`] bundles the five user inputs of a chart request. Validation
//! collects every field error instead of stopping at the first, so a caller can
//! report all problems at once.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chart::parse_chart_type;
use super::code::CodeValue;
use super::date::parse_date;
use super::series::parse_time_series;
use super::symbol::SymbolValidator;
use crate::error::{QueryError, ValidationError};

/// Result of query validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the query is valid
    pub valid: bool,
    /// List of field errors
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Create a successful validation report.
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Create a failed validation report with errors.
    pub fn failure(errors: Vec<FieldError>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    /// Add an error to the report.
    pub fn add_error(&mut self, error: FieldError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
    }

    /// Names of the fields that failed, in report order.
    pub fn failed_fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

/// A validation error attached to a query field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field that caused the error
    pub field: String,
    /// Error message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn from_error(field: &'static str, error: &ValidationError) -> Self {
        Self::new(field, error.to_string())
    }
}

/// User input for one chart request.
///
/// Codes are kept as [`CodeValue`] so documents may carry them as numbers or
/// numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartQuery {
    pub symbol: String,
    pub chart_type: CodeValue,
    pub time_series: CodeValue,
    pub start_date: String,
    pub end_date: String,
}

impl ChartQuery {
    /// Read a query from JSON.
    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a query from TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self, QueryError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Validate every field and report all failures.
    ///
    /// The start/end ordering is only checked when both dates parse.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::success();

        if let Err(err) = SymbolValidator::new().validate(&self.symbol) {
            report.add_error(FieldError::from_error("symbol", &ValidationError::from(err)));
        }

        if let Err(err) = parse_chart_type(&self.chart_type) {
            report.add_error(FieldError::from_error("chart_type", &err));
        }

        if let Err(err) = parse_time_series(&self.time_series) {
            report.add_error(FieldError::from_error("time_series", &err));
        }

        report.merge(self.validate_dates());

        if !report.valid {
            debug!(
                symbol = %self.symbol,
                failed = ?report.failed_fields(),
                "Chart query failed validation"
            );
        }

        report
    }

    /// Convenience check for [`ChartQuery::validate`].
    pub fn is_valid(&self) -> bool {
        self.validate().valid
    }

    fn validate_dates(&self) -> ValidationReport {
        let mut report = ValidationReport::success();
        let start = parse_date(&self.start_date).map_err(|e| e.for_field("start_date"));
        let end = parse_date(&self.end_date).map_err(|e| e.for_field("end_date"));

        match (start, end) {
            (Ok(start), Ok(end)) => {
                if start > end {
                    let err = ValidationError::InvalidRange { start, end };
                    report.add_error(FieldError::from_error("end_date", &err));
                }
            }
            (start, end) => {
                if let Err(err) = start {
                    report.add_error(FieldError::from_error("start_date", &err));
                }
                if let Err(err) = end {
                    report.add_error(FieldError::from_error("end_date", &err));
                }
            }
        }

        report
    }
}
