//! Chart-type codes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::code::{read_code, CodeInput};
use crate::error::ValidationError;

const FIELD: &str = "chart_type";

/// Chart rendering selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Code 1
    Bar,
    /// Code 2
    Line,
}

impl ChartType {
    /// Accepted codes, for error messages
    pub const ALLOWED: &'static str = "1, 2";

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ChartType::Bar),
            2 => Some(ChartType::Line),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ChartType::Bar => 1,
            ChartType::Line => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpret `value` as a chart-type code.
///
/// Labels such as `"bar"` are not codes and are rejected.
pub fn parse_chart_type<T: CodeInput>(value: T) -> Result<ChartType, ValidationError> {
    let code = read_code(&value, FIELD)?;
    ChartType::from_code(code)
        .ok_or_else(|| ValidationError::out_of_range(FIELD, code, ChartType::ALLOWED))
}

/// Returns true iff `value` reads as the integer 1 or 2.
pub fn validate_chart_type<T: CodeInput>(value: T) -> bool {
    match parse_chart_type(&value) {
        Ok(chart_type) => {
            trace!(?value, %chart_type, "Accepted chart type");
            true
        }
        Err(err) => {
            debug!(?value, error = %err, "Rejected chart type");
            false
        }
    }
}
