//! Custom error types for trackfunds
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type TrackResult<T> = Result<T, TrackError>;

/// The main error type for trackfunds operations
#[derive(Error, Debug)]
pub enum TrackError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Preference store read/write failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted transaction record that cannot be decoded
    #[error("Malformed record '{record}': {reason}")]
    MalformedRecord { record: String, reason: String },

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Credential or session failures
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl TrackError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a malformed-record error, keeping the raw record around so
    /// callers can still display the unparsed value
    pub fn malformed(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: record.into(),
            reason: reason.into(),
        }
    }
}
