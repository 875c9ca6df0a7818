//! The capability bundle shared by every resource API.
//!
//! A [`ClientBridge`] holds the resolved base URL, the token and the transport
//! behind `Arc`s. Cloning it is cheap and each resource API keeps its own clone.

use super::transport::Fetch;
use crate::error::Result;
use crate::protocol::{load_headers, HeaderSet};
use crate::types::{AdminResponse, Credentials, FetchRequest, RequestInit};
use http::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// URL building, header building, JSON decoding, token access and dispatch.
#[derive(Clone)]
pub struct ClientBridge {
    base_url: Arc<Url>,
    api_token: Option<Arc<str>>,
    transport: Arc<dyn Fetch>,
}

impl ClientBridge {
    /// Create a bridge. An empty token counts as no token.
    pub fn new(base_url: Url, api_token: Option<String>, transport: Arc<dyn Fetch>) -> Self {
        ClientBridge {
            base_url: Arc::new(base_url),
            api_token: api_token.filter(|t| !t.is_empty()).map(Arc::from),
            transport,
        }
    }

    /// The base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative reference beneath the base URL.
    ///
    /// The base path is treated as a directory, so `./access-cards/x` against
    /// `https://host/admin` yields `https://host/admin/access-cards/x`.
    pub fn url(&self, reference: &str) -> Result<Url> {
        if self.base_url.path().ends_with('/') {
            return Ok(self.base_url.join(reference)?);
        }

        let mut base = (*self.base_url).clone();
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
        Ok(base.join(reference)?)
    }

    /// Compute request headers: defaults, caller headers on top, Authorization
    /// dropped when no token is configured.
    pub fn headers(&self, caller: Option<&HeaderSet>) -> HeaderSet {
        load_headers(self.token(), caller)
    }

    /// Decode a response body as JSON
    pub fn json<T: DeserializeOwned>(&self, response: &AdminResponse) -> Result<T> {
        response.json()
    }

    /// The configured token, if any
    pub fn token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// Send a request through the transport.
    ///
    /// Credentials are always [`Credentials::Include`], whatever `init` asks for.
    /// Headers in `init` are sent as given; use [`ClientBridge::headers`] to compute them.
    pub async fn fetch(&self, url: Url, init: RequestInit) -> Result<AdminResponse> {
        let request = FetchRequest {
            url,
            method: init.method.unwrap_or(Method::GET),
            headers: init.headers.unwrap_or_default(),
            body: init.body,
            credentials: Credentials::Include,
            timeout: init.timeout,
        };

        tracing::debug!(method = %request.method, url = %request.url, "dispatching admin runtime request");

        self.transport.fetch(request).await
    }

    /// Issue a DELETE-style request to a relative route.
    ///
    /// The method defaults to DELETE unless `init` overrides it; headers are
    /// always recomputed from `init.headers`.
    pub async fn delete(&self, path: &str, init: Option<RequestInit>) -> Result<AdminResponse> {
        let target = self.url(path)?;
        let init = init.unwrap_or_default();

        let request_init = RequestInit {
            method: Some(init.method.unwrap_or(Method::DELETE)),
            headers: Some(self.headers(init.headers.as_ref())),
            ..init
        };

        self.fetch(target, request_init).await
    }
}

impl fmt::Debug for ClientBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBridge")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::fetch_fn;
    use std::sync::Mutex;

    fn recording_bridge(
        base: &str,
        token: Option<&str>,
    ) -> (ClientBridge, Arc<Mutex<Vec<FetchRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let transport = fetch_fn(move |request| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(request);
                Ok(AdminResponse::new(204))
            }
        });
        let bridge = ClientBridge::new(
            Url::parse(base).unwrap(),
            token.map(str::to_string),
            transport,
        );
        (bridge, seen)
    }

    #[test]
    fn test_url_with_directory_base() {
        let (bridge, _) = recording_bridge("https://host/admin/", None);
        let url = bridge.url("./access-cards/x").unwrap();
        assert_eq!(url.as_str(), "https://host/admin/access-cards/x");
    }

    #[test]
    fn test_url_with_file_like_base() {
        let (bridge, _) = recording_bridge("https://host/admin", None);
        let url = bridge.url("./licenses/l").unwrap();
        assert_eq!(url.as_str(), "https://host/admin/licenses/l");
        assert_eq!(bridge.base_url().as_str(), "https://host/admin");
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let (bridge, _) = recording_bridge("https://host/", Some(""));
        assert_eq!(bridge.token(), None);
        assert!(!bridge.headers(None).contains("authorization"));
    }

    #[tokio::test]
    async fn test_fetch_forces_credentials() {
        let (bridge, seen) = recording_bridge("https://host/", Some("t"));
        let init = RequestInit::new().with_credentials(Credentials::Omit);
        let url = bridge.url("./x").unwrap();
        bridge.fetch(url, init).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].credentials, Credentials::Include);
        assert_eq!(seen[0].method, Method::GET);
    }

    #[tokio::test]
    async fn test_delete_defaults() {
        let (bridge, seen) = recording_bridge("https://host/", Some("t"));
        bridge.delete("./access-rights/r1", None).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::DELETE);
        assert_eq!(seen[0].url.as_str(), "https://host/access-rights/r1");
        assert_eq!(seen[0].headers.get("authorization"), Some("Bearer t"));
        assert_eq!(seen[0].headers.get("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_delete_merges_init() {
        let (bridge, seen) = recording_bridge("https://host/", None);
        let init = RequestInit::new()
            .with_header("Authorization", "Bearer stale")
            .with_header("X-Reason", "cleanup")
            .with_timeout(std::time::Duration::from_secs(3));
        bridge.delete("./access-cards/c", Some(init)).await.unwrap();

        let seen = seen.lock().unwrap();
        assert!(!seen[0].headers.contains("authorization"));
        assert_eq!(seen[0].headers.get("x-reason"), Some("cleanup"));
        assert_eq!(seen[0].timeout, Some(std::time::Duration::from_secs(3)));
    }

    #[test]
    fn test_json_decode() {
        let (bridge, _) = recording_bridge("https://host/", None);
        let res = AdminResponse::new(200).with_body(r#"{"lookup":"c1"}"#);
        let value: serde_json::Value = bridge.json(&res).unwrap();
        assert_eq!(value["lookup"], "c1");
    }
}
