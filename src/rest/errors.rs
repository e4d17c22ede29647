//! Resource-specific error types for REST operations.
//!
//! The backend's HTTP status codes are mapped to semantic variants:
//!
//! - **401/403**: [`ResourceError::Unauthorized`] - the token was refused
//! - **404**: [`ResourceError::NotFound`] - the record doesn't exist
//! - **Other 4xx**: [`ResourceError::Rejected`] - e.g. a duplicate country code
//! - **5xx**: [`ResourceError::Http`] - wrapped HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use boxinator_admin::rest::{ResourceError, RestResource};
//!
//! match Country::create(&client, &session, &fields).await {
//!     Ok(country) => println!("Created {}", country.name),
//!     Err(ResourceError::Rejected { code, message, .. }) => {
//!         println!("Backend refused ({code}): {message}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::auth::AuthError;
use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The backend refused the bearer token (HTTP 401 or 403).
    #[error("{resource} request was not authorized")]
    Unauthorized {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// The record was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Shipment").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The backend rejected the request (any other 4xx).
    #[error("{resource} rejected ({code}): {message}")]
    Rejected {
        /// The type name of the resource.
        resource: &'static str,
        /// The HTTP status code.
        code: u16,
        /// The backend's message.
        message: String,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// No path is declared for this operation on this resource.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// The response payload did not match the resource shape.
    #[error("Could not decode {resource} response: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The session was invalidated or has expired. No request was sent.
    #[error(transparent)]
    Session(#[from] AuthError),

    /// An HTTP-level error occurred: a transport failure or a 5xx response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The REST path could not be used.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The offending path.
        path: String,
    },
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Session(e) => Self::Session(e),
            RestError::Http(e) => Self::Http(e),
            RestError::InvalidPath { path } => Self::InvalidPath { path },
        }
    }
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-2xx HTTP response.
    ///
    /// The human-readable message is the envelope's `msg` when present,
    /// otherwise the raw body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxinator_admin::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     409,
    ///     &json!({"msg": "Country code already exists"}),
    ///     "Country",
    ///     None,
    ///     Some("req-1"),
    /// );
    /// assert!(matches!(error, ResourceError::Rejected { code: 409, .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        let message = body
            .get("msg")
            .and_then(serde_json::Value::as_str)
            .or_else(|| body.get("raw_body").and_then(serde_json::Value::as_str))
            .map_or_else(|| body.to_string(), ToString::to_string);

        match code {
            401 | 403 => Self::Unauthorized { resource },
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            400..=499 => Self::Rejected {
                resource,
                code,
                message,
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code,
                message,
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Rejected { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a response.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(HttpError::Network(_)))
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ResourceError::NotFound {
            resource: "Shipment",
            id: "77".to_string(),
        };
        assert_eq!(error.to_string(), "Shipment with id 77 not found");
    }

    #[test]
    fn test_from_http_response_maps_auth_codes_to_unauthorized() {
        for code in [401, 403] {
            let error = ResourceError::from_http_response(code, &json!({}), "Account", None, None);
            assert!(matches!(
                error,
                ResourceError::Unauthorized { resource: "Account" }
            ));
        }
    }

    #[test]
    fn test_from_http_response_maps_404_to_not_found() {
        let error =
            ResourceError::from_http_response(404, &json!({}), "Shipment", Some("9"), None);
        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "Shipment", id } if id == "9"
        ));
    }

    #[test]
    fn test_from_http_response_maps_409_to_rejected_with_envelope_msg() {
        let error = ResourceError::from_http_response(
            409,
            &json!({"data": null, "msg": "Country code already exists", "status": "CONFLICT"}),
            "Country",
            None,
            Some("req-456"),
        );

        match error {
            ResourceError::Rejected {
                code,
                message,
                request_id,
                ..
            } => {
                assert_eq!(code, 409);
                assert_eq!(message, "Country code already exists");
                assert_eq!(request_id.as_deref(), Some("req-456"));
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_from_http_response_maps_5xx_to_http() {
        let error = ResourceError::from_http_response(
            500,
            &json!({"raw_body": "Internal Server Error"}),
            "Shipment",
            None,
            Some("req-789"),
        );

        assert!(matches!(error, ResourceError::Http(HttpError::Response(_))));
        assert_eq!(error.to_string(), "Internal Server Error");
        assert_eq!(error.request_id(), Some("req-789"));
    }

    #[test]
    fn test_from_rest_error_unwraps_layers() {
        let error: ResourceError = RestError::Session(AuthError::Invalidated).into();
        assert!(matches!(
            error,
            ResourceError::Session(AuthError::Invalidated)
        ));

        let error: ResourceError = RestError::InvalidPath {
            path: String::new(),
        }
        .into();
        assert!(matches!(error, ResourceError::InvalidPath { .. }));
    }

    #[test]
    fn test_path_resolution_failed_includes_operation_context() {
        let error = ResourceError::PathResolutionFailed {
            resource: "Country",
            operation: "find",
        };
        let message = error.to_string();
        assert!(message.contains("Country"));
        assert!(message.contains("find"));
    }
}
