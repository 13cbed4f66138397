//! Error types for the GTB vacation calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating, storing or
//! exchanging vacations.

use thiserror::Error;

/// The main error type for the vacation calculator.
///
/// Every fallible operation in the crate returns this error type. Most
/// variants are caller-correctable input errors; see
/// [`EngineError::is_invalid_input`].
///
/// # Example
///
/// ```
/// use gtb_vacations::error::EngineError;
///
/// let error = EngineError::UnknownShiftType {
///     code: "nocturne".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown shift type: nocturne");
/// assert!(error.is_invalid_input());
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

    /// A time of day was not a valid "HH:MM" value.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// The shift type key is not one of the known types.
    #[error("Unknown shift type: {code}")]
    UnknownShiftType {
        /// The key that was not recognised.
        code: String,
    },

    /// The rate table has no entry for the shift type.
    #[error("No rate configured for shift type '{shift_type}'")]
    RateNotFound {
        /// The shift type key without a rate.
        shift_type: String,
    },

    /// A rate was negative or otherwise unusable.
    #[error("Invalid rate for shift type '{shift_type}': {message}")]
    InvalidRate {
        /// The shift type key the rate belongs to.
        shift_type: String,
        /// A description of the problem.
        message: String,
    },

    /// No vacation exists at the given position.
    #[error("No vacation at index {index} (list has {len})")]
    VacationNotFound {
        /// The requested index.
        index: usize,
        /// The number of vacations in the list.
        len: usize,
    },

    /// An import document could not be read.
    #[error("Invalid vacation document: {message}")]
    InvalidDocument {
        /// A description of the problem.
        message: String,
    },

    /// A report was requested for an empty vacation list.
    #[error("No vacations to export")]
    EmptyReport,

    /// The key-value store failed to read or write.
    #[error("Storage error for key '{key}': {message}")]
    StorageError {
        /// The storage key involved.
        key: String,
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors the caller can fix by correcting its input.
    ///
    /// Configuration and storage failures are environmental and return false.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidTime { .. }
                | EngineError::UnknownShiftType { .. }
                | EngineError::RateNotFound { .. }
                | EngineError::InvalidRate { .. }
                | EngineError::VacationNotFound { .. }
                | EngineError::InvalidDocument { .. }
                | EngineError::EmptyReport
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
