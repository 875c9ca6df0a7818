//! Request transports.
//!
//! A [`Fetch`] takes a fully resolved [`FetchRequest`] and produces an
//! [`AdminResponse`]. The status is never inspected here; only failures below
//! HTTP become errors.
//!
//! # Custom transports
//!
//! ```
//! use admin_runtime_client::client::{fetch_fn, ClientOptions};
//! use admin_runtime_client::AdminResponse;
//!
//! let transport = fetch_fn(|request| async move {
//!     assert_eq!(request.method, http::Method::DELETE);
//!     Ok(AdminResponse::new(204))
//! });
//! let options = ClientOptions::new().with_fetch(transport);
//! ```

use crate::error::Result;
use crate::types::{AdminResponse, Credentials, FetchRequest};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

/// Executes HTTP requests on behalf of the client.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Send one request and return the response, whatever its status.
    async fn fetch(&self, request: FetchRequest) -> Result<AdminResponse>;
}

/// Default transport backed by [`reqwest`].
///
/// Requests with [`Credentials::Include`] share a cookie jar so session cookies set
/// by the runtime are replayed; requests with [`Credentials::Omit`] go through a
/// client without one.
#[derive(Clone, Debug)]
pub struct ReqwestFetch {
    with_cookies: reqwest::Client,
    without_cookies: reqwest::Client,
}

impl ReqwestFetch {
    /// Create a transport with default reqwest settings
    pub fn new() -> Self {
        let with_cookies = match reqwest::Client::builder().cookie_store(true).build() {
            Ok(client) => client,
            Err(err) => {
                tracing::debug!(%err, "cookie-store client unavailable, sending requests without a cookie jar");
                reqwest::Client::default()
            }
        };

        ReqwestFetch {
            with_cookies,
            without_cookies: reqwest::Client::new(),
        }
    }

    fn client_for(&self, credentials: Credentials) -> &reqwest::Client {
        match credentials {
            Credentials::Include => &self.with_cookies,
            Credentials::Omit => &self.without_cookies,
        }
    }
}

impl Default for ReqwestFetch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for ReqwestFetch {
    async fn fetch(&self, request: FetchRequest) -> Result<AdminResponse> {
        let headers = request.headers.to_header_map()?;

        let mut req_builder = self
            .client_for(request.credentials)
            .request(request.method, request.url)
            .headers(headers);

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();

        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response.bytes().await?;

        Ok(AdminResponse {
            status,
            headers,
            body,
        })
    }
}

/// Transport built from an async closure. See [`fetch_fn`].
pub struct FnFetch<F> {
    f: F,
}

#[async_trait]
impl<F> Fetch for FnFetch<F>
where
    F: Fn(FetchRequest) -> BoxFuture<'static, Result<AdminResponse>> + Send + Sync,
{
    async fn fetch(&self, request: FetchRequest) -> Result<AdminResponse> {
        (self.f)(request).await
    }
}

/// Adapt an async closure into a shareable [`Fetch`].
pub fn fetch_fn<F, Fut>(f: F) -> Arc<dyn Fetch>
where
    F: Fn(FetchRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<AdminResponse>> + Send + 'static,
{
    Arc::new(FnFetch {
        f: move |request: FetchRequest| f(request).boxed(),
    })
}
