//! Response wrapper for REST resource operations.
//!
//! The backend wraps every payload in an envelope:
//!
//! ```json
//! {"data": {...}, "msg": "Shipment details has been updated.", "status": "CREATED"}
//! ```
//!
//! [`ResourceResponse<T>`] unwraps `data` into `T` and keeps `msg` and the
//! request ID alongside. It implements `Deref<Target = T>`:
//!
//! ```rust,ignore
//! let response = Shipment::list_all(&client, &session).await?;
//! for shipment in response.iter() {
//!     println!("{:?}", shipment.id);
//! }
//! let shipments: Vec<Shipment> = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use boxinator_admin::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["Norway", "Sweden"],
///     Some("Countries found".to_string()),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.message(), Some("Countries found"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    message: Option<String>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(data: T, message: Option<String>, request_id: Option<String>) -> Self {
        Self {
            data,
            message,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the envelope's `msg`, if the backend sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            message: self.message,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` from an HTTP response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if `data` is missing or does not
    /// deserialize into `T`.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let message = response.message().map(ToString::to_string);

        let data_value = response
            .body
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        let data: T = serde_json::from_value(data_value)
            .map_err(|source| ResourceError::Decode { resource, source })?;

        Ok(Self {
            data,
            message,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
