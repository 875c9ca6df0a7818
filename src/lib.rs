#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Admin Runtime Client
//!
//! A client for the administrative runtime HTTP API. It addresses three resource
//! families (access rights, access cards and licenses with their plans and prices)
//! and issues DELETE requests against them.
//!
//! ## Overview
//!
//! 1. **Base URL resolution** - an explicit base URL, a base path, or a path detected
//!    from an injected document context is turned into one absolute URL, once.
//! 2. **Bridge** - a shared bundle of URL building, header building, JSON decoding,
//!    token access and dispatch.
//! 3. **Resource APIs** - thin route builders over the bridge.
//!
//! ## Behavior
//!
//! - Every lookup is percent-encoded as one path segment.
//! - Requests always carry credentials (cookies).
//! - `Authorization: Bearer {token}` is sent only when a token is configured.
//! - Responses are returned as-is; a non-2xx status is not an error.
//!
//! ## Usage
//!
//! ```ignore
//! use admin_runtime_client::{AdminRuntimeClient, ClientOptions, RequestInit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AdminRuntimeClient::new(ClientOptions::from_env());
//!
//!     let response = client.access_cards.delete("card-1", None).await?;
//!     println!("Status: {}", response.status);
//!
//!     let init = RequestInit::new().with_header("X-Reason", "expired");
//!     let response = client
//!         .licenses
//!         .delete_plan_price("pro", "monthly", "usd", Some(init))
//!         .await?;
//!     println!("Status: {}", response.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - Client, options, base URL resolution, bridge, resource APIs, transports
//! - **[protocol]** - Route segments, header constants and the header policy
//! - **[types]** - Request overrides and responses
//! - **[error]** - Error types and result handling

pub mod client;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::{create_admin_runtime_client, AdminRuntimeClient, ClientOptions};
pub use error::{AdminRuntimeError, Result};
pub use types::{AdminResponse, Credentials, FetchRequest, RequestInit};

#[cfg(test)]
mod tests;
