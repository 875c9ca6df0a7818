//! Admin runtime HTTP client.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch        - AdminRuntimeClient construction
//! ├── base_url     - Base URL resolution
//! ├── environment  - Injected origin/document context
//! ├── config       - Client options
//! ├── bridge       - Shared URL/header/JSON/fetch capabilities
//! ├── resources    - Access rights, access cards, licenses
//! ├── transport    - Fetch trait and the reqwest transport
//! └── utils        - Lookup encoding
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AdminRuntimeClient`] | Top-level client with one field per resource family |
//! | [`ClientOptions`] | Token, base URL/path, transport, environment |
//! | [`ClientBridge`] | Capabilities shared by the resource APIs |
//! | [`Fetch`] | Transport seam; [`ReqwestFetch`] by default |
//!
//! # Examples
//!
//! ```
//! use admin_runtime_client::client::{AdminRuntimeClient, ClientOptions};
//!
//! let client = AdminRuntimeClient::new(ClientOptions::new().with_base_path("/admin/"));
//! assert_eq!(client.base_url().as_str(), "http://admin-runtime.local/admin/");
//! ```

mod base_url;
mod bridge;
mod config;
mod environment;
mod fetch;
mod resources;
mod transport;
mod utils;

pub use base_url::{detect_document_base_path, resolve_base_url};
pub use bridge::ClientBridge;
pub use config::{BaseUrl, ClientOptions, ENV_API_TOKEN, ENV_BASE_PATH, ENV_BASE_URL};
pub use environment::{DocumentContext, EnvironmentContext};
pub use fetch::{create_admin_runtime_client, AdminRuntimeClient};
pub use resources::{AccessCardsApi, AccessRightsApi, LicensesApi};
pub use transport::{fetch_fn, Fetch, FnFetch, ReqwestFetch};
pub use utils::{encode_lookup, resource_path};
