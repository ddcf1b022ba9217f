//! Standardized logging setup for applications embedding the validators.
//!
//! Validators emit `tracing` events (`debug` on rejection, `trace` on
//! acceptance); this module installs a subscriber to print them.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Standard tracing filter (e.g., `info`, `stock_query=debug`)
//! - `LOG_FORMAT`: Output format - `pretty` (default) or `compact`
//! - `LOG_TIMESTAMPS`: Timestamp format - `local` (default), `utc`, or `none`
//!
//! # Usage
//!
//! ```rust,no_run
//! use stock_query::logging::{init_logging, LogConfig};
//!
//! init_logging(LogConfig::from_env().with_default_level("stock_query=debug")).unwrap();
//! ```

mod config;

pub use config::{init_logging, LogConfig, LogFormat, TimestampFormat};
