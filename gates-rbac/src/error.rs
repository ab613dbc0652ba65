//! Error types for gate operations
//!
//! Predicates never return errors. These types cover configuration,
//! binding evaluation, and persistence failures around them.

use thiserror::Error;

use crate::store::StoreError;

/// Gate error types.
#[derive(Debug, Error)]
pub enum GateError {
    /// A binding or configuration value cannot be resolved.
    ///
    /// Indicates a typo in the consuming application and must be surfaced.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Binding kind is not one of the registered binding names
    #[error("Unknown binding: {0}")]
    UnknownBinding(String),

    /// Binding was evaluated without a value
    #[error("Binding '{binding}' requires a value")]
    MissingValue {
        /// Name of the binding that had no value.
        binding: String,
    },

    /// A persisted list could not be parsed
    #[error("Malformed persisted data for '{key}': {message}")]
    MalformedPersistedData {
        /// Store key that held the data.
        key: String,
        /// Parser error message.
        message: String,
    },

    /// Persistence backend failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

impl GateError {
    /// Check if the caller can recover locally by skipping or falling back.
    ///
    /// Missing binding values leave the element untouched, and malformed
    /// persisted data falls back to an empty list. Everything else should
    /// be reported to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GateError::MissingValue { .. } | GateError::MalformedPersistedData { .. }
        )
    }

    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            GateError::Configuration(_) => "CONFIGURATION_ERROR",
            GateError::UnknownBinding(_) => "UNKNOWN_BINDING",
            GateError::MissingValue { .. } => "MISSING_VALUE",
            GateError::MalformedPersistedData { .. } => "MALFORMED_PERSISTED_DATA",
            GateError::Store(_) => "STORE_ERROR",
        }
    }
}
