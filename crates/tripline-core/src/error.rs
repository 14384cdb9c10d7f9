//! Core error types for tripline-core.
//!
//! This module defines the error hierarchy using thiserror. Most of the
//! engine is pure and infallible by construction; the fallible surfaces are
//! timezone parsing, entry validation, and the travel-time provider.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Core error type for tripline-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timezone-related errors
    #[error("Timezone error: {0}")]
    Timezone(#[from] TimezoneError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Travel-time provider errors
    #[error("Travel provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Timezone-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimezoneError {
    /// The zone string is not a known IANA identifier. Callers are expected
    /// to validate with [`crate::timezone::is_valid_zone`] before converting.
    #[error("Invalid timezone identifier: '{zone}'")]
    InvalidTimezone { zone: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must not be earlier than start ({start})")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Travel-time provider errors.
///
/// The conflict engine swallows these fail-open; they are surfaced only to
/// provider implementors and callers that invoke the provider directly.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The lookup ran but produced no usable answer
    #[error("Travel-time lookup failed: {0}")]
    LookupFailed(String),

    /// The provider could not be reached at all
    #[error("Travel-time provider unavailable: {0}")]
    Unavailable(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
