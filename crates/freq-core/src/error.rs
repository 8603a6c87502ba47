//! Core error type.
//!
//! The simulation tick loop is infallible; errors only arise while building
//! or loading a configuration.  Sub-crates wrap `FreqError` as one variant of
//! their own enums.

use thiserror::Error;

/// The error type for `freq-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FreqError {
    #[error("configuration error: {field}: {reason}")]
    Config {
        field:  &'static str,
        reason: String,
    },

    #[error("parse error: {0}")]
    Parse(String),
}

impl FreqError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        FreqError::Config { field, reason: reason.into() }
    }
}

/// Shorthand result type for all `freq-*` crates.
pub type FreqResult<T> = Result<T, FreqError>;
