//! Session error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised when a session can no longer authorize requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The operator logged out.
    #[error("Session has been invalidated. Please log in again.")]
    Invalidated,

    /// The session expiry has passed.
    #[error("Session expired at {expires}. Please log in again.")]
    Expired {
        /// When the session expired.
        expires: DateTime<Utc>,
    },
}
