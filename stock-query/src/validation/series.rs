//! Time-series codes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::code::{read_code, CodeInput};
use crate::error::ValidationError;

const FIELD: &str = "time_series";

/// Sampling interval of the requested price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSeries {
    Intraday,
    Daily,
    Weekly,
    Monthly,
}

impl TimeSeries {
    /// Accepted codes, for error messages
    pub const ALLOWED: &'static str = "1, 2, 3, 4";

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(TimeSeries::Intraday),
            2 => Some(TimeSeries::Daily),
            3 => Some(TimeSeries::Weekly),
            4 => Some(TimeSeries::Monthly),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            TimeSeries::Intraday => 1,
            TimeSeries::Daily => 2,
            TimeSeries::Weekly => 3,
            TimeSeries::Monthly => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSeries::Intraday => "intraday",
            TimeSeries::Daily => "daily",
            TimeSeries::Weekly => "weekly",
            TimeSeries::Monthly => "monthly",
        }
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpret `value` as a time-series code (1 through 4).
pub fn parse_time_series<T: CodeInput>(value: T) -> Result<TimeSeries, ValidationError> {
    let code = read_code(&value, FIELD)?;
    TimeSeries::from_code(code)
        .ok_or_else(|| ValidationError::out_of_range(FIELD, code, TimeSeries::ALLOWED))
}

/// Returns true iff `value` reads as an integer in 1..=4.
pub fn validate_time_series<T: CodeInput>(value: T) -> bool {
    match parse_time_series(&value) {
        Ok(series) => {
            trace!(?value, %series, "Accepted time series");
            true
        }
        Err(err) => {
            debug!(?value, error = %err, "Rejected time series");
            false
        }
    }
}
