// stock-query: Input validation for stock chart queries
// Checks ticker symbols, chart-type and time-series codes, and query dates

pub mod error;
pub mod logging;
pub mod validation;

pub use error::{QueryError, ValidationError};
pub use validation::{
    parse_chart_type, parse_date, parse_date_range, parse_time_series, validate_chart_type,
    validate_date, validate_date_range, validate_symbol, validate_time_series, ChartQuery,
    ChartType, CodeInput, CodeValue, FieldError, SymbolValidationError, SymbolValidator,
    SymbolValidatorConfig, TimeSeries, ValidationReport,
};
