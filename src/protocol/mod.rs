//! Wire-level constants and header handling for the admin runtime API.
//!
//! # Routes
//!
//! | Resource | Path |
//! |----------|------|
//! | Access rights | `access-rights/{lookup}` |
//! | Access cards | `access-cards/{lookup}` |
//! | Licenses | `licenses/{licLookup}[/{planLookup}[/{priceLookup}]]` |
//!
//! All routes are relative to the client's base URL and every lookup is
//! percent-encoded as a single path segment.

pub mod headers;

pub use headers::{load_headers, merge_headers, HeaderSet};

/// Protocol constants
pub mod constants {
    /// Origin used when the environment does not provide one
    pub const FALLBACK_ORIGIN: &str = "http://admin-runtime.local";

    /// Resource path segments
    pub mod segments {
        /// Access rights collection
        pub const ACCESS_RIGHTS: &str = "access-rights";
        /// Access cards collection
        pub const ACCESS_CARDS: &str = "access-cards";
        /// Licenses collection (plans and prices nest below a license)
        pub const LICENSES: &str = "licenses";
    }

    /// Header names (lowercase)
    pub mod headers {
        /// Bearer token header
        pub const AUTHORIZATION: &str = "authorization";
        /// Request body media type
        pub const CONTENT_TYPE: &str = "content-type";
    }

    /// Media type sent by default
    pub const APPLICATION_JSON: &str = "application/json";
}
