//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] sweetshop_core::EmailError),

    /// Password too short or otherwise invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Registration submitted without a display name.
    #[error("name cannot be empty")]
    MissingName,
}
