//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated backend base URL.
///
/// Accepts `http` and `https` URLs with a non-empty host. Trailing slashes
/// are stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use boxinator_admin::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://api.boxinator.example/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.boxinator.example");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.boxinator.example");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A bearer token issued to an operator at login.
///
/// The `Debug` implementation masks the token so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use boxinator_admin::BearerToken;
///
/// let token = BearerToken::new("eyJhbGciOi").unwrap();
/// assert_eq!(format!("{:?}", token), "BearerToken(*****)");
/// assert_eq!(token.as_ref(), "eyJhbGciOi");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBearerToken`] if the token is empty or
    /// whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyBearerToken);
        }
        Ok(Self(token))
    }

    /// Returns the value of an `Authorization` header carrying this token.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = ApiBaseUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_rejects_unsupported_scheme() {
        assert!(matches!(
            ApiBaseUrl::new("ftp://files.example"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_missing_host() {
        assert!(ApiBaseUrl::new("https://").is_err());
        assert!(ApiBaseUrl::new("https://:8080").is_err());
        assert!(ApiBaseUrl::new("api.example").is_err());
        assert!(ApiBaseUrl::new("").is_err());
    }

    #[test]
    fn test_bearer_token_rejects_blank() {
        assert!(matches!(
            BearerToken::new("   "),
            Err(ConfigError::EmptyBearerToken)
        ));
    }

    #[test]
    fn test_bearer_token_masks_value_in_debug() {
        let token = BearerToken::new("super-secret").unwrap();
        let debug_output = format!("{token:?}");
        assert!(!debug_output.contains("super-secret"));
        assert_eq!(token.authorization_value(), "Bearer super-secret");
    }
}
