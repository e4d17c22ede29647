//! REST-specific error types.
//!
//! - [`RestError::InvalidPath`]: A path was empty after normalization
//! - [`RestError::Session`]: The operator session can no longer authorize calls
//! - [`RestError::Http`]: Wraps underlying HTTP errors

use crate::auth::AuthError;
use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST operations.
///
/// # Example
///
/// ```rust
/// use boxinator_admin::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST path is invalid.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// The session was invalidated or has expired. No request was sent.
    #[error(transparent)]
    Session(#[from] AuthError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "/".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: /");
    }

    #[test]
    fn test_session_error_is_transparent() {
        let error: RestError = AuthError::Invalidated.into();
        assert_eq!(error.to_string(), AuthError::Invalidated.to_string());
    }

    #[test]
    fn test_http_error_wraps_invalid_request() {
        let http_error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        let error: RestError = http_error.into();

        assert!(matches!(error, RestError::Http(HttpError::InvalidRequest(_))));
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }
}
