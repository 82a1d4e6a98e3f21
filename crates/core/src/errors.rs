//! Core error types for the valuation engine.
//!
//! This module defines transport-agnostic error types. Collaborator-specific
//! failures (HTTP, file, database) are converted to these types at the
//! collaborator boundary.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
///
/// Every failure that reaches the top-level caller is one of these variants.
/// The engine never returns a partial result alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Master data resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Valuation calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether the caller may retry the same request and expect a different outcome.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Resolution(ResolutionError::LookupFailed { .. })
                | Error::Resolution(ResolutionError::Timeout { .. })
                | Error::Repository(_)
        )
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Unsupported form draft version {found} (expected {expected})")]
    UnsupportedDraftVersion { found: u32, expected: u32 },
}

/// Failures while resolving master data through an external collaborator.
///
/// All variants are recoverable: the caller may fix the selection or retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("Lookup of {what} failed: {cause}")]
    LookupFailed { what: String, cause: String },

    #[error("Lookup of {what} timed out after {after_ms} ms")]
    Timeout { what: String, after_ms: u64 },

    #[error("{what} '{code}' was not found")]
    NotFound { what: String, code: String },

    #[error("Parameter catalog is invalid: {0}")]
    InvalidCatalog(String),
}

/// Errors raised by the formula engine itself.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Errors raised by the calculation history store.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History entry '{0}' not found")]
    EntryNotFound(String),

    #[error("History store lock poisoned: {0}")]
    LockPoisoned(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
