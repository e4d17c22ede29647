//! Configuration types for the admin console.
//!
//! The main types in this module are:
//!
//! - [`AdminConfig`]: Backend location and client settings
//! - [`AdminConfigBuilder`]: A builder for constructing [`AdminConfig`] instances
//! - [`ApiBaseUrl`]: A validated backend base URL
//! - [`BearerToken`]: An operator credential with masked debug output
//!
//! # Example
//!
//! ```rust
//! use boxinator_admin::{AdminConfig, ApiBaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(ApiBaseUrl::new("https://api.boxinator.example").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_path(), "/api/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, BearerToken};

use crate::error::ConfigError;

/// Default path prefix of the REST backend.
pub const DEFAULT_API_PATH: &str = "/api/v1";

/// Configuration for talking to the shipment backend.
///
/// `AdminConfig` is `Clone`, `Send`, and `Sync`. It holds no credentials;
/// those travel in an explicit [`Session`](crate::Session).
#[derive(Clone, Debug)]
pub struct AdminConfig {
    base_url: ApiBaseUrl,
    api_path: String,
    user_agent_prefix: Option<String>,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the API path prefix (e.g., "/api/v1").
    #[must_use]
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AdminConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for constructing [`AdminConfig`] instances.
///
/// `base_url` is required.
///
/// # Defaults
///
/// - `api_path`: `/api/v1`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    api_path: Option<String>,
    user_agent_prefix: Option<String>,
}

impl AdminConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: ApiBaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API path prefix.
    #[must_use]
    pub fn api_path(mut self, path: impl Into<String>) -> Self {
        self.api_path = Some(path.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdminConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// or [`ConfigError::InvalidApiPath`] if the API path is not absolute.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let api_path = match self.api_path {
            None => DEFAULT_API_PATH.to_string(),
            Some(path) => {
                let trimmed = path.trim().trim_end_matches('/');
                if !trimmed.starts_with('/') {
                    return Err(ConfigError::InvalidApiPath { path });
                }
                trimmed.to_string()
            }
        };

        Ok(AdminConfig {
            base_url,
            api_path,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
