//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the persistence layer and for malformed caller input. Data-quality
//! problems inside attendance or directory rows are deliberately not errors:
//! the readers drop such rows and the pipeline degrades gracefully.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidMonth {
///     value: "June 2024".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid month 'June 2024': expected yyyy-MM");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A filesystem operation on one of the payroll data files failed.
    #[error("I/O failure on '{path}': {source}")]
    Io {
        /// The file the operation was touching.
        path: String,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer failed while reading or writing a data file.
    #[error("CSV failure on '{path}': {source}")]
    Csv {
        /// The file being read or written.
        path: String,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A month string did not match the `yyyy-MM` form.
    #[error("Invalid month '{value}': expected yyyy-MM")]
    InvalidMonth {
        /// The rejected input.
        value: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
