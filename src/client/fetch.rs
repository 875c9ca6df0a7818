//! The top-level admin runtime client.
//!
//! # Examples
//!
//! ```ignore
//! use admin_runtime_client::{AdminRuntimeClient, ClientOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AdminRuntimeClient::new(
//!         ClientOptions::new()
//!             .with_api_token("secret")
//!             .with_base_url("https://admin.example.com/runtime/"),
//!     );
//!
//!     let response = client.licenses.delete_plan("pro", "monthly", None).await?;
//!     if !response.is_success() {
//!         eprintln!("delete failed with status {}", response.status);
//!     }
//!     Ok(())
//! }
//! ```

use super::base_url::resolve_base_url;
use super::bridge::ClientBridge;
use super::config::ClientOptions;
use super::resources::{AccessCardsApi, AccessRightsApi, LicensesApi};
use super::transport::{Fetch, ReqwestFetch};
use std::sync::Arc;
use url::Url;

/// Client for the admin runtime API.
///
/// The base URL is resolved once, in [`AdminRuntimeClient::new`]. The resource
/// APIs share one [`ClientBridge`] and hold no other state, so the client can be
/// cloned and used from many tasks at once.
#[derive(Clone, Debug)]
pub struct AdminRuntimeClient {
    /// Access cards
    pub access_cards: AccessCardsApi,
    /// Access rights
    pub access_rights: AccessRightsApi,
    /// Licenses, plans and prices
    pub licenses: LicensesApi,

    bridge: ClientBridge,
}

impl AdminRuntimeClient {
    /// Create a client from options
    pub fn new(options: ClientOptions) -> Self {
        let base_url = resolve_base_url(&options);
        let transport: Arc<dyn Fetch> = match options.fetch {
            Some(fetch) => fetch,
            None => Arc::new(ReqwestFetch::new()),
        };

        tracing::debug!(base_url = %base_url, has_token = options.api_token.is_some(), "creating admin runtime client");

        let bridge = ClientBridge::new(base_url, options.api_token, transport);

        AdminRuntimeClient {
            access_cards: AccessCardsApi::new(bridge.clone()),
            access_rights: AccessRightsApi::new(bridge.clone()),
            licenses: LicensesApi::new(bridge.clone()),
            bridge,
        }
    }

    /// The resolved base URL
    pub fn base_url(&self) -> &Url {
        self.bridge.base_url()
    }

    /// The configured API token, if any
    pub fn api_token(&self) -> Option<&str> {
        self.bridge.token()
    }

    /// The shared bridge, for issuing requests to routes without a dedicated API
    pub fn bridge(&self) -> &ClientBridge {
        &self.bridge
    }
}

impl Default for AdminRuntimeClient {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}

/// Create a client from options; same as [`AdminRuntimeClient::new`].
pub fn create_admin_runtime_client(options: ClientOptions) -> AdminRuntimeClient {
    AdminRuntimeClient::new(options)
}
