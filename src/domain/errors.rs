//! # Domain Errors
//!
//! Errors raised while interpreting upstream data.

use thiserror::Error;

/// A quality record that does not carry a usable proposal reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualityDecodeError {
    /// The record is not a JSON object.
    #[error("quality record is not an object")]
    NotAnObject,

    /// The `proposalId` member is not an object of string fields.
    #[error("invalid proposal reference: {0}")]
    InvalidReference(String),
}

impl QualityDecodeError {
    /// Creates an invalid reference error.
    #[must_use]
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::InvalidReference(message.into())
    }
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, QualityDecodeError>;
