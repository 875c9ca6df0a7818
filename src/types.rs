//! Request and response types shared by the client and its transports.

use crate::error::Result;
use crate::protocol::HeaderSet;
use bytes::Bytes;
use http::Method;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Cookie/credential policy attached to a dispatched request.
///
/// Requests sent through the [`ClientBridge`](crate::client::ClientBridge) always
/// carry [`Credentials::Include`]; `Omit` is honored by [`ReqwestFetch`] when it is
/// driven directly.
///
/// [`ReqwestFetch`]: crate::client::ReqwestFetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Neither send nor store cookies
    Omit,
    /// Send stored cookies and keep the ones the server sets
    #[default]
    Include,
}

/// Per-call overrides for a request.
///
/// Every field is optional; unset fields take the value computed by the client.
/// Headers given here are merged on top of the computed defaults.
///
/// # Examples
///
/// ```
/// use admin_runtime_client::RequestInit;
/// use std::time::Duration;
///
/// let init = RequestInit::new()
///     .with_header("X-Request-Id", "42")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(init.headers.unwrap().get("x-request-id"), Some("42"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestInit {
    /// HTTP method override (the resource APIs default to DELETE)
    pub method: Option<Method>,
    /// Headers merged on top of the computed defaults
    pub headers: Option<HeaderSet>,
    /// Optional request body
    pub body: Option<Bytes>,
    /// Credential mode; replaced by [`Credentials::Include`] at dispatch
    pub credentials: Option<Credentials>,
    /// Per-request timeout, the only cancellation knob offered
    pub timeout: Option<Duration>,
}

impl RequestInit {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the HTTP method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Add a single header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HeaderSet::new)
            .insert(name, value);
        self
    }

    /// Replace all caller headers
    pub fn with_headers(mut self, headers: HeaderSet) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Attach a request body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the credential mode
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Abort the request if no response arrives within `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fully resolved request, as handed to a [`Fetch`](crate::client::Fetch) transport.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    /// Absolute target URL
    pub url: Url,
    /// HTTP method
    pub method: Method,
    /// Final header set (lowercase names)
    pub headers: HeaderSet,
    /// Optional body
    pub body: Option<Bytes>,
    /// Credential mode
    pub credentials: Credentials,
    /// Optional per-request timeout
    pub timeout: Option<Duration>,
}

/// Response returned by the admin runtime API.
///
/// The status is passed through verbatim; a 404 or 500 is an ordinary value.
#[derive(Clone, Debug)]
pub struct AdminResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (keys lowercase)
    pub headers: BTreeMap<String, String>,
    /// Raw response body
    pub body: Bytes,
}

impl AdminResponse {
    /// Create a response with the given status and an empty body
    pub fn new(status: u16) -> Self {
        AdminResponse {
            status,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }

    /// Attach a body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach a header
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a response header (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Body as UTF-8 text (lossy)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_init_builders() {
        let init = RequestInit::new()
            .with_method(Method::POST)
            .with_header("X-Trace", "abc")
            .with_body("payload")
            .with_credentials(Credentials::Omit);

        assert_eq!(init.method, Some(Method::POST));
        assert_eq!(init.headers.as_ref().unwrap().get("x-trace"), Some("abc"));
        assert_eq!(init.body.as_deref(), Some(&b"payload"[..]));
        assert_eq!(init.credentials, Some(Credentials::Omit));
    }

    #[test]
    fn test_response_status_passthrough() {
        let res = AdminResponse::new(404);
        assert_eq!(res.status, 404);
        assert!(!res.is_success());
        assert!(AdminResponse::new(204).is_success());
    }

    #[test]
    fn test_response_header_lookup() {
        let res = AdminResponse::new(200).with_header("Content-Type", "application/json");
        assert_eq!(res.header("content-type"), Some("application/json"));
        assert_eq!(res.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_response_json() {
        let res = AdminResponse::new(200).with_body(r#"{"deleted":true}"#);
        let value: serde_json::Value = res.json().unwrap();
        assert_eq!(value["deleted"], true);
    }
}
