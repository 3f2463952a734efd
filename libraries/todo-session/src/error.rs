//! Session-layer errors.

use thiserror::Error;

/// Errors raised by route lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Path does not belong to any client route
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
