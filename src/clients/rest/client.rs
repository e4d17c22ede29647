//! REST client implementation for the shipment backend.
//!
//! This module provides the [`RestClient`] type for making authorized REST
//! requests with path normalization.

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::AdminConfig;

/// REST client for the shipment backend.
///
/// Provides `get`, `post`, `patch` and `delete`. Every call takes the
/// operator [`Session`]; an inactive session fails before any I/O.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use boxinator_admin::{AdminConfig, ApiBaseUrl, BearerToken, RestClient, Session};
///
/// let config = AdminConfig::builder()
///     .base_url(ApiBaseUrl::new("https://api.boxinator.example")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
/// let session = Session::issue(BearerToken::new("token")?, None);
///
/// let response = client.get(&session, "country/all").await?;
/// let response = client
///     .patch(&session, "shipment/7", serde_json::json!({"weight": 12}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be
    /// created.
    pub fn new(config: &AdminConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(
            base_uri = http_client.base_uri(),
            base_path = http_client.base_path(),
            "Rest client created"
        );
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Session`] if the session is no longer active,
    /// [`RestError::InvalidPath`] if the path is empty, and
    /// [`RestError::Http`] for transport failures.
    pub async fn get(&self, session: &Session, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(session, HttpMethod::Get, path, None)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(
        &self,
        session: &Session,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(session, HttpMethod::Post, path, Some(body))
            .await
    }

    /// Sends a PATCH request carrying only the changed fields.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn patch(
        &self,
        session: &Session,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(session, HttpMethod::Patch, path, Some(body))
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(&self, session: &Session, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(session, HttpMethod::Delete, path, None)
            .await
    }

    async fn make_request(
        &self,
        session: &Session,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, RestError> {
        let token = session.bearer_token()?;
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client
            .request(request, token)
            .await
            .map_err(Into::into)
    }
}

/// Normalizes a REST path: strips leading `/` and trailing `/`.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim().trim_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthError;
    use crate::config::{ApiBaseUrl, BearerToken};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(url: &str) -> RestClient {
        let config = AdminConfig::builder()
            .base_url(ApiBaseUrl::new(url).unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    fn session() -> Session {
        Session::issue(BearerToken::new("op-token").unwrap(), None)
    }

    #[test]
    fn test_normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/shipment/all").unwrap(), "shipment/all");
        assert_eq!(normalize_path("//country/3/").unwrap(), "country/3");
        assert_eq!(normalize_path("account").unwrap(), "account");
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { .. })
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    #[tokio::test]
    async fn test_patch_sends_body_to_prefixed_path() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/shipment/7"))
            .and(header("Authorization", "Bearer op-token"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"weight": 12})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let response = client
            .patch(&session(), "/shipment/7", json!({"weight": 12}))
            .await
            .unwrap();

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_invalidated_session_fails_before_any_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let mut session = session();
        session.invalidate();

        let result = client.get(&session, "shipment/all").await;

        assert!(matches!(
            result,
            Err(RestError::Session(AuthError::Invalidated))
        ));
    }

    #[tokio::test]
    async fn test_non_2xx_is_returned_for_the_caller_to_map() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/account/5"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"msg": "No account"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let response = client.delete(&session(), "account/5").await.unwrap();

        assert_eq!(response.code, 404);
        assert_eq!(response.message(), Some("No account"));
    }
}
