//! # Error Handling
//!
//! Error types shared by all nearvec crates.
//!
//! ## Design Principles
//!
//! 1. **Actionable**: Every error carries the values that violated the contract
//! 2. **Synchronous**: All failures surface at the call site; there is no retry
//!    or partial-failure state anywhere in the workspace
//! 3. **Traceable**: Stable error codes for monitoring

use thiserror::Error;

/// Result type alias for nearvec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Primary error type for nearvec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A binary vector operation was given operands of different dimension
    /// or element width. Never silently recovered: proceeding would compare
    /// incompatible data.
    #[error("dimension mismatch: {message}")]
    DimensionMismatch { message: String },

    /// A caller violated a programming contract (bit widths out of range,
    /// malformed bucket schedule). Not a runtime data condition.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl Error {
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Error::DimensionMismatch {
            message: format!("expected {} components, got {}", expected, actual),
        }
    }

    pub fn width_mismatch(expected: u8, actual: u8) -> Self {
        Error::DimensionMismatch {
            message: format!("expected {}-bit components, got {}-bit", expected, actual),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument { message: message.into() }
    }

    /// Check if error is recoverable by the caller retrying with fixed inputs
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::DimensionMismatch { .. } => false,
            Error::InvalidArgument { .. } => false,
        }
    }

    /// Get error code for monitoring
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            Error::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}
