//! REST client for the shipment backend.
//!
//! A thin layer over [`HttpClient`](crate::clients::HttpClient) offering
//! `get()`, `post()`, `patch()` and `delete()`.
//!
//! # Path Normalization
//!
//! - Leading and trailing slashes are stripped: `/shipment/all/` -> `shipment/all`
//! - The configured API path is prefixed: `shipment/all` -> `/api/v1/shipment/all`
//! - Empty paths are rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
