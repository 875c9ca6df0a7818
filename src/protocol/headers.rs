//! Header model and the default-header policy.
//!
//! Headers are an ordered map of lowercase names to values. Merging is a pure
//! function rather than an in-place update so the Authorization rule can be
//! checked in isolation.
//!
//! # Examples
//!
//! ```
//! use admin_runtime_client::protocol::{load_headers, HeaderSet};
//!
//! let mut caller = HeaderSet::new();
//! caller.insert("Authorization", "Bearer stale");
//! caller.insert("X-Request-Id", "7");
//!
//! // No token configured: Authorization never survives.
//! let headers = load_headers(None, Some(&caller));
//! assert_eq!(headers.get("authorization"), None);
//! assert_eq!(headers.get("x-request-id"), Some("7"));
//!
//! // Token configured: defaults apply, caller values win.
//! let headers = load_headers(Some("secret"), None);
//! assert_eq!(headers.get("Authorization"), Some("Bearer secret"));
//! ```

use super::constants::{headers, APPLICATION_JSON};
use crate::error::{AdminRuntimeError, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;

/// Ordered, case-insensitive header map.
///
/// Names are stored lowercase; a later insert of the same name replaces the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: BTreeMap<String, String>,
}

impl HeaderSet {
    /// Create an empty header set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a header
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        self.entries.insert(name, value.into());
    }

    /// Get a header value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Remove a header, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(&name.to_ascii_lowercase())
    }

    /// Whether a header is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of headers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate headers in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert into an [`http::HeaderMap`], rejecting names or values HTTP cannot carry.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let invalid = || AdminRuntimeError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = HeaderSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// Merge `overrides` on top of `defaults`.
///
/// Each override replaces the default of the same name; all other defaults are kept.
pub fn merge_headers(defaults: &HeaderSet, overrides: Option<&HeaderSet>) -> HeaderSet {
    let mut merged = defaults.clone();
    if let Some(overrides) = overrides {
        for (name, value) in overrides.iter() {
            merged.insert(name, value);
        }
    }
    merged
}

/// Compute the headers for a request.
///
/// Defaults are `Authorization: Bearer {token}` and `Content-Type: application/json`,
/// with the caller's headers merged on top. Without a non-empty token the
/// `Authorization` header is removed from the result, including one the caller supplied.
pub fn load_headers(token: Option<&str>, caller: Option<&HeaderSet>) -> HeaderSet {
    let token = token.filter(|t| !t.is_empty());

    let mut defaults = HeaderSet::new();
    defaults.insert(
        headers::AUTHORIZATION,
        format!("Bearer {}", token.unwrap_or_default()),
    );
    defaults.insert(headers::CONTENT_TYPE, APPLICATION_JSON);

    let mut merged = merge_headers(&defaults, caller);

    if token.is_none() && merged.remove(headers::AUTHORIZATION).is_some() {
        tracing::trace!("no API token configured, dropping Authorization header");
    }

    merged
}
