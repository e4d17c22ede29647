//! HTTP client types for backend communication.
//!
//! This module provides the transport layer for making authorized requests
//! to the shipment backend.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client, one round trip per request
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A parsed response from the backend
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`rest::RestClient`]: Session-aware REST client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use boxinator_admin::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "shipment/all").build()?;
//! let response = client.request(request, session.bearer_token()?).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are attempted exactly once. Transport failures come back as
//! [`HttpError::Network`]; HTTP error statuses come back as responses.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
