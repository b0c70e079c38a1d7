//! Error types for the payroll breakdown engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables,
//! constructing them, and validating salary input. The calculator itself has
//! no error path: every failure is surfaced before calculation starts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll breakdown engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/table.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/table.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate table was effective for the given jurisdiction and date.
    #[error("No rate table found for jurisdiction '{jurisdiction}' on date {date}")]
    RateTableNotFound {
        /// The jurisdiction code.
        jurisdiction: String,
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// A rate field was outside the valid `[0, 1]` range.
    #[error("Rate field '{field}' is out of range: {value} (must be a fraction between 0 and 1)")]
    InvalidRate {
        /// The name of the offending rate field.
        field: String,
        /// The out-of-range value.
        value: Decimal,
    },

    /// A rate table was structurally invalid.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// The name of the offending field.
        field: String,
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// The gross salary input was out of domain.
    #[error("Invalid gross salary: {message}")]
    InvalidSalary {
        /// A description of what made the salary invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
