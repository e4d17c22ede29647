//! HTTP response types.

use std::collections::HashMap;

/// An HTTP response from the backend.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the backend's human-readable `msg` from the response envelope.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("msg").and_then(serde_json::Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 409, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_request_id_reads_first_header_value() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-request-id".to_string(),
            vec!["req-1".to_string(), "req-2".to_string()],
        );
        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("req-1"));
    }

    #[test]
    fn test_message_reads_envelope_msg() {
        let response = HttpResponse::new(
            201,
            HashMap::new(),
            json!({"data": null, "msg": "Shipment created", "status": "CREATED"}),
        );
        assert_eq!(response.message(), Some("Shipment created"));
    }
}
