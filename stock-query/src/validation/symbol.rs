//! Ticker symbol validation.
//!
//! A stock symbol is 1 to 7 uppercase ASCII letters (`A`, `MSFT`, `GOOGL`).
//! Digits, punctuation, whitespace and lowercase letters are rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from symbol validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolValidationError {
    /// Symbol is empty
    #[error("symbol cannot be empty")]
    Empty,

    /// Symbol is too short
    #[error("symbol '{symbol}' is too short (min {min} characters)")]
    TooShort { symbol: String, min: usize },

    /// Symbol is too long
    #[error("symbol '{symbol}' exceeds maximum length of {max} characters")]
    TooLong { symbol: String, max: usize },

    /// Symbol contains something other than letters
    #[error("symbol '{symbol}' contains invalid characters (must be letters A-Z)")]
    InvalidCharacters { symbol: String },

    /// Symbol is not uppercase
    #[error("symbol '{symbol}' must be uppercase")]
    NotUppercase { symbol: String },
}

/// Configuration for symbol validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolValidatorConfig {
    /// Minimum symbol length in characters (default: 1)
    pub min_length: usize,
    /// Maximum symbol length in characters (default: 7)
    pub max_length: usize,
    /// Whether to reject lowercase letters (default: true)
    pub require_uppercase: bool,
    /// Whether to allow only ASCII letters (default: true)
    pub alphabetic_only: bool,
}

impl Default for SymbolValidatorConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 7,
            require_uppercase: true,
            alphabetic_only: true,
        }
    }
}

impl SymbolValidatorConfig {
    /// Set minimum length
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Set maximum length
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Set uppercase requirement
    pub fn with_require_uppercase(mut self, require: bool) -> Self {
        self.require_uppercase = require;
        self
    }

    /// Set letters-only requirement
    pub fn with_alphabetic_only(mut self, alphabetic_only: bool) -> Self {
        self.alphabetic_only = alphabetic_only;
        self
    }
}

/// Symbol validator with configurable rules.
///
/// Checks run in a fixed order: emptiness, characters, case, then length.
/// A lowercase symbol therefore reports [`SymbolValidationError::NotUppercase`]
/// even when it is also too long.
///
/// # Example
///
/// ```
/// use stock_query::{SymbolValidator, SymbolValidatorConfig};
///
/// let validator = SymbolValidator::new();
/// assert!(validator.validate("AAPL").is_ok());
/// assert!(validator.validate("aapl").is_err()); // Not uppercase
///
/// // Normalize input (converts to uppercase)
/// assert_eq!(validator.normalize("msft").unwrap(), "MSFT");
///
/// // Custom limits
/// let short = SymbolValidator::with_config(SymbolValidatorConfig::default().with_max_length(4));
/// assert!(short.validate("GOOGL").is_err()); // Too long
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolValidator {
    config: SymbolValidatorConfig,
}

impl SymbolValidator {
    /// Create a new validator with default config.
    pub fn new() -> Self {
        Self {
            config: SymbolValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom config.
    pub fn with_config(config: SymbolValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate a symbol without modifying it.
    ///
    /// Returns `Ok(())` if valid, `Err` with details if invalid.
    pub fn validate(&self, symbol: &str) -> Result<(), SymbolValidationError> {
        if symbol.is_empty() {
            return Err(SymbolValidationError::Empty);
        }

        self.check_characters(symbol)?;

        if self.config.require_uppercase && symbol.chars().any(char::is_lowercase) {
            return Err(SymbolValidationError::NotUppercase {
                symbol: symbol.to_string(),
            });
        }

        self.check_length(symbol)
    }

    /// Normalize and validate a symbol.
    ///
    /// Trims surrounding whitespace and converts to uppercase (if required),
    /// then validates. Returns the normalized symbol if valid.
    pub fn normalize(&self, symbol: &str) -> Result<String, SymbolValidationError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(SymbolValidationError::Empty);
        }

        let normalized = if self.config.require_uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        };

        self.validate(&normalized)?;
        Ok(normalized)
    }

    /// Check if a symbol is valid (convenience method).
    pub fn is_valid(&self, symbol: &str) -> bool {
        self.validate(symbol).is_ok()
    }

    /// Get the current config.
    pub fn config(&self) -> &SymbolValidatorConfig {
        &self.config
    }

    fn check_characters(&self, symbol: &str) -> Result<(), SymbolValidationError> {
        if self.config.alphabetic_only && !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SymbolValidationError::InvalidCharacters {
                symbol: symbol.to_string(),
            });
        }
        Ok(())
    }

    fn check_length(&self, symbol: &str) -> Result<(), SymbolValidationError> {
        let len = symbol.chars().count();

        if len < self.config.min_length {
            return Err(SymbolValidationError::TooShort {
                symbol: symbol.to_string(),
                min: self.config.min_length,
            });
        }

        if len > self.config.max_length {
            return Err(SymbolValidationError::TooLong {
                symbol: symbol.to_string(),
                max: self.config.max_length,
            });
        }

        Ok(())
    }
}

/// Returns true iff `symbol` is 1 to 7 uppercase letters `A`-`Z`.
pub fn validate_symbol(symbol: &str) -> bool {
    match SymbolValidator::new().validate(symbol) {
        Ok(()) => true,
        Err(err) => {
            debug!(symbol, error = %err, "Rejected symbol");
            false
        }
    }
}
