//! Error types for the Table-Rate Shipping Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during quote resolution.

use thiserror::Error;

/// The main error type for the Table-Rate Shipping Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tablerate_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/carrier.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/carrier.yaml");
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

    /// The requested code type does not exist in the condition catalog.
    #[error("The \"{code_type}\" code type for table rate is incorrect. Verify the type and try again.")]
    UnknownCodeType {
        /// The code type that was not recognized.
        code_type: String,
    },

    /// The requested code does not exist within a known code type.
    #[error("The \"{code_type}: {code}\" code type for table rate is incorrect. Verify the type and try again.")]
    UnknownConditionCode {
        /// The code type that was queried.
        code_type: String,
        /// The code that was not recognized.
        code: String,
    },

    /// A table-rate row could not be imported.
    #[error("Failed to import table rate from '{path}': {message}")]
    RateImportError {
        /// The path to the file that failed to import.
        path: String,
        /// A description of the import error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
