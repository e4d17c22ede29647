//! REST Resource trait for CRUD operations.
//!
//! Resources that implement [`RestResource`] gain `find()`, `list_all()`,
//! `create()`, `update()` and `delete()`. Every operation takes the
//! [`RestClient`] and the operator [`Session`] explicitly; nothing is looked
//! up from ambient state.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use boxinator_admin::rest::{RestResource, ResourcePath, ResourceOperation};
//! use boxinator_admin::clients::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Country {
//!     pub id: Option<u64>,
//!     pub name: String,
//! }
//!
//! impl RestResource for Country {
//!     type Id = u64;
//!
//!     const NAME: &'static str = "Country";
//!     const PLURAL: &'static str = "countries";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "country/all"),
//!         ResourcePath::new(HttpMethod::Patch, ResourceOperation::Update, &["id"], "country/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! let countries = Country::list_all(&client, &session).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::auth::Session;
use crate::clients::{HttpResponse, RestClient};
use crate::rest::{
    build_path, get_path, ChangeSet, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// A REST resource that can be listed, created, updated, and deleted.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Shipment")
/// - `PLURAL`: The plural form (e.g., "shipments")
/// - `PATHS`: Available paths for different operations
///
/// Operations a resource does not declare a path for fail with
/// [`ResourceError::PathResolutionFailed`] before any I/O.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// The singular name of the resource (e.g., "Shipment").
    ///
    /// Used in error messages, log fields and toasts.
    const NAME: &'static str;

    /// The plural name of the resource (e.g., "shipments").
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for records that haven't been created yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Finds a single record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the record doesn't exist.
    async fn find(
        client: &RestClient,
        session: &Session,
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.to_string();
        let url = resolve_path::<Self>(ResourceOperation::Find, &[("id", id.as_str())])?;

        let response = client.get(session, &url).await?;
        let response = ensure_success::<Self>(response, Some(&id))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Lists every record. There is no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or is rejected.
    async fn list_all(
        client: &RestClient,
        session: &Session,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let url = resolve_path::<Self>(ResourceOperation::All, &[])?;

        let response = client.get(session, &url).await?;
        let response = ensure_success::<Self>(response, None)?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Lists the records belonging to a parent (e.g., an account's shipments).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has
    /// no list path taking `parent_id_name`.
    async fn list_with_parent<ParentId: Display + Send>(
        client: &RestClient,
        session: &Session,
        parent_id_name: &str,
        parent_id: ParentId,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let parent_id = parent_id.to_string();
        let url = resolve_path::<Self>(
            ResourceOperation::All,
            &[(parent_id_name, parent_id.as_str())],
        )?;

        let response = client.get(session, &url).await?;
        let response = ensure_success::<Self>(response, None)?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Creates a record from the given fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rejected`] if the backend refuses the record
    /// (e.g., a duplicate country code).
    async fn create(
        client: &RestClient,
        session: &Session,
        fields: &Value,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let url = resolve_path::<Self>(ResourceOperation::Create, &[])?;

        let response = client.post(session, &url, fields.clone()).await?;
        let response = ensure_success::<Self>(response, None)?;

        tracing::debug!(resource = Self::NAME, "Record created");
        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Applies a change set to an existing record.
    ///
    /// Only the fields in `changes` are sent; everything else is left
    /// untouched by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the record doesn't exist and
    /// [`ResourceError::Rejected`] if the backend refuses the change.
    async fn update(
        client: &RestClient,
        session: &Session,
        id: Self::Id,
        changes: &ChangeSet,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.to_string();
        let url = resolve_path::<Self>(ResourceOperation::Update, &[("id", id.as_str())])?;

        let response = client.patch(session, &url, changes.to_json()).await?;
        let response = ensure_success::<Self>(response, Some(&id))?;

        tracing::debug!(resource = Self::NAME, id = %id, fields = changes.len(), "Record updated");
        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the record doesn't exist.
    async fn delete(
        client: &RestClient,
        session: &Session,
        id: Self::Id,
    ) -> Result<(), ResourceError> {
        let id = id.to_string();
        let url = resolve_path::<Self>(ResourceOperation::Delete, &[("id", id.as_str())])?;

        let response = client.delete(session, &url).await?;
        ensure_success::<Self>(response, Some(&id))?;

        tracing::debug!(resource = Self::NAME, id = %id, "Record deleted");
        Ok(())
    }
}

/// Picks the path for `operation` and interpolates `ids` into it.
pub(crate) fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
    ids: &[(&str, &str)],
) -> Result<String, ResourceError> {
    let ids: HashMap<&str, &str> = ids.iter().copied().collect();
    let available_ids: Vec<&str> = ids.keys().copied().collect();

    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;

    Ok(build_path(path.template, &ids))
}

/// Maps a non-2xx response to a [`ResourceError`].
pub(crate) fn ensure_success<R: RestResource>(
    response: HttpResponse,
    id: Option<&str>,
) -> Result<HttpResponse, ResourceError> {
    if response.is_ok() {
        return Ok(response);
    }

    let error = ResourceError::from_http_response(
        response.code,
        &response.body,
        R::NAME,
        id,
        response.request_id(),
    );
    tracing::debug!(resource = R::NAME, code = response.code, error = %error, "Backend rejected request");
    Err(error)
}
