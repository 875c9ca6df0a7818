//! Client configuration.
//!
//! Options are read once when the client is constructed. Precedence for addressing:
//! `base_url` over `base_path`, `base_path` over the path detected from the
//! [`EnvironmentContext`].
//!
//! # Examples
//!
//! ```
//! use admin_runtime_client::client::ClientOptions;
//!
//! let options = ClientOptions::new()
//!     .with_api_token("secret")
//!     .with_base_url("https://admin.example.com/runtime/");
//! assert_eq!(options.api_token.as_deref(), Some("secret"));
//! ```

use super::environment::EnvironmentContext;
use super::transport::Fetch;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Environment variable holding the bearer token
pub const ENV_API_TOKEN: &str = "ADMIN_RUNTIME_API_TOKEN";
/// Environment variable holding the base URL
pub const ENV_BASE_URL: &str = "ADMIN_RUNTIME_BASE_URL";
/// Environment variable holding the base path
pub const ENV_BASE_PATH: &str = "ADMIN_RUNTIME_BASE_PATH";

/// An explicit base URL, either already parsed or as text (absolute or relative).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BaseUrl {
    /// A parsed URL, used as-is
    Url(Url),
    /// Text that is parsed at construction; relative values resolve against the origin
    Str(String),
}

impl From<Url> for BaseUrl {
    fn from(url: Url) -> Self {
        BaseUrl::Url(url)
    }
}

impl From<&Url> for BaseUrl {
    fn from(url: &Url) -> Self {
        BaseUrl::Url(url.clone())
    }
}

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        BaseUrl::Str(s)
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        BaseUrl::Str(s.to_string())
    }
}

/// Construction-time options for [`AdminRuntimeClient`](super::AdminRuntimeClient).
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Bearer token for the `Authorization` header
    pub api_token: Option<String>,

    /// Path prepended to every route, e.g. `/admin`
    pub base_path: Option<String>,

    /// Base URL; overrides `base_path` when present
    pub base_url: Option<BaseUrl>,

    /// Custom transport; defaults to [`ReqwestFetch`](super::ReqwestFetch)
    pub fetch: Option<Arc<dyn Fetch>>,

    /// Ambient origin/document used for base path detection
    pub environment: EnvironmentContext,
}

impl ClientOptions {
    /// Empty options: no token, auto-detected base, default transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from `ADMIN_RUNTIME_*` environment variables.
    ///
    /// Unset or empty variables leave the corresponding option unset.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        ClientOptions {
            api_token: var(ENV_API_TOKEN),
            base_path: var(ENV_BASE_PATH),
            base_url: var(ENV_BASE_URL).map(BaseUrl::Str),
            ..Default::default()
        }
    }

    /// Set the bearer token
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the base path
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<BaseUrl>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use a custom transport
    pub fn with_fetch(mut self, fetch: Arc<dyn Fetch>) -> Self {
        self.fetch = Some(fetch);
        self
    }

    /// Provide the ambient environment
    pub fn with_environment(mut self, environment: EnvironmentContext) -> Self {
        self.environment = environment;
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("base_path", &self.base_path)
            .field("base_url", &self.base_url)
            .field("fetch", &self.fetch.as_ref().map(|_| "<custom>"))
            .field("environment", &self.environment)
            .finish()
    }
}
