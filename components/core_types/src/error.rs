//! Error types shared across the runtime.

use thiserror::Error;

/// Failure to parse a decimal literal into a [`Number`](crate::Number).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    /// The text is not of the form `[-]digits[.digits]`
    #[error("invalid decimal literal: {0:?}")]
    InvalidDigit(String),
}
