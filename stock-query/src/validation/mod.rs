//! Validation utilities for chart query inputs.
//!
//! Every `validate_*` function is a total predicate: malformed input yields
//! `false` and never an error or panic. The `parse_*` counterparts return the
//! typed value or a [`ValidationError`](crate::error::ValidationError) describing
//! the rejection.

mod chart;
mod code;
mod date;
mod request;
mod series;
mod symbol;

pub use chart::{parse_chart_type, validate_chart_type, ChartType};
pub use code::{CodeInput, CodeValue};
pub use date::{parse_date, parse_date_range, validate_date, validate_date_range, DATE_FORMAT};
pub use request::{ChartQuery, FieldError, ValidationReport};
pub use series::{parse_time_series, validate_time_series, TimeSeries};
pub use symbol::{
    validate_symbol, SymbolValidationError, SymbolValidator, SymbolValidatorConfig,
};
