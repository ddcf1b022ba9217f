//! Error types for chart query validation.
//!
//! Predicates never return these; they are produced by the `parse_*`
//! functions and by query deserialization.
//!
//! # Usage
//!
//! ```
//! use stock_query::{parse_chart_type, ValidationError};
//!
//! match parse_chart_type("3") {
//!     Err(ValidationError::OutOfRange { value, .. }) => assert_eq!(value, 3),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

mod common;

pub use common::*;
