//! Integer interpretation for numeric selector codes.
//!
//! Chart-type and time-series selections arrive either as numbers or as
//! numeric text (`2`, `"2"`, `" 2 "`). [`CodeInput`] turns any of those into an
//! `i64`, or `None` when the value has no integer reading.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A value that may be read as an integer code.
pub trait CodeInput: fmt::Debug {
    /// Interpret the value as an integer, or `None` if it is not numeric.
    fn to_code(&self) -> Option<i64>;
}

macro_rules! impl_code_input_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CodeInput for $ty {
                fn to_code(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_code_input_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CodeInput for f64 {
    /// Truncates toward zero. NaN, infinities and values outside `i64` have no code.
    fn to_code(&self) -> Option<i64> {
        if !self.is_finite() {
            return None;
        }
        let truncated = self.trunc();
        // i64::MAX is not representable as f64; the bound is exclusive
        if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return None;
        }
        Some(truncated as i64)
    }
}

impl CodeInput for f32 {
    fn to_code(&self) -> Option<i64> {
        f64::from(*self).to_code()
    }
}

impl CodeInput for str {
    fn to_code(&self) -> Option<i64> {
        parse_code_text(self)
    }
}

impl CodeInput for String {
    fn to_code(&self) -> Option<i64> {
        parse_code_text(self)
    }
}

impl<T: CodeInput + ?Sized> CodeInput for &T {
    fn to_code(&self) -> Option<i64> {
        (**self).to_code()
    }
}

/// Parse decimal integer text: optional surrounding whitespace, optional sign,
/// ASCII digits only.
fn parse_code_text(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    trimmed.parse().ok()
}

/// Read `value` as an integer code, reporting `field` when it has none.
pub(crate) fn read_code<T: CodeInput>(value: &T, field: &'static str) -> Result<i64, ValidationError> {
    value
        .to_code()
        .ok_or_else(|| ValidationError::not_an_integer(field, format!("{:?}", value)))
}

/// A selector code as it appears in JSON or TOML input.
///
/// Deserializes from an integer, a float or a string, so `1`, `1.0` and `"1"`
/// are all accepted at the serialization layer and interpreted later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CodeInput for CodeValue {
    fn to_code(&self) -> Option<i64> {
        match self {
            CodeValue::Int(n) => Some(*n),
            CodeValue::Float(f) => f.to_code(),
            CodeValue::Text(s) => parse_code_text(s),
        }
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeValue::Int(n) => write!(f, "{}", n),
            CodeValue::Float(x) => write!(f, "{}", x),
            CodeValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<i64> for CodeValue {
    fn from(n: i64) -> Self {
        CodeValue::Int(n)
    }
}

impl From<&str> for CodeValue {
    fn from(s: &str) -> Self {
        CodeValue::Text(s.to_string())
    }
}

impl From<String> for CodeValue {
    fn from(s: String) -> Self {
        CodeValue::Text(s)
    }
}
