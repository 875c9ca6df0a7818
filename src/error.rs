//! Error types for the admin runtime client.
//!
//! Only failures that prevent a request from completing are errors. A response with a
//! non-2xx status is a successful call and is returned as an [`AdminResponse`] for the
//! caller to interpret.
//!
//! [`AdminResponse`]: crate::types::AdminResponse

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AdminRuntimeError>;

/// Errors raised while building or dispatching admin runtime requests.
#[derive(Debug, Error)]
pub enum AdminRuntimeError {
    /// Transport failure from the built-in reqwest transport.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom [`Fetch`](crate::client::Fetch) implementation.
    #[error("transport error: {0}")]
    Transport(String),

    /// A caller-supplied header could not be sent over HTTP.
    #[error("invalid header: {name}")]
    InvalidHeader {
        /// The offending header name
        name: String,
    },

    /// A relative reference could not be joined onto the base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as the requested JSON type.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdminRuntimeError {
    /// Build a transport error from any displayable failure.
    pub fn transport(message: impl Into<String>) -> Self {
        AdminRuntimeError::Transport(message.into())
    }

    /// Whether the error happened below HTTP (connection, TLS, timeout, custom transport).
    pub fn is_transport(&self) -> bool {
        matches!(self, AdminRuntimeError::Http(_) | AdminRuntimeError::Transport(_))
    }
}
