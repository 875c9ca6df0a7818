//! Base URL resolution.
//!
//! Computes the single absolute URL every request is resolved against. Resolution
//! never fails: each unparseable input degrades to the next fallback, ending at
//! `http://admin-runtime.local/`.
//!
//! # Precedence
//!
//! 1. `base_url` given as a parsed [`Url`]: cloned.
//! 2. `base_url` given as non-blank text: parsed as absolute, else resolved against the origin.
//! 3. `base_path`, else the path detected from the document context, else `/`,
//!    joined onto the origin.
//!
//! The origin is the environment's origin when present and parseable, otherwise
//! [`FALLBACK_ORIGIN`].
//!
//! # Examples
//!
//! ```
//! use admin_runtime_client::client::{resolve_base_url, ClientOptions};
//!
//! let url = resolve_base_url(&ClientOptions::new().with_base_path("/admin"));
//! assert_eq!(url.as_str(), "http://admin-runtime.local/admin");
//!
//! let url = resolve_base_url(&ClientOptions::new());
//! assert_eq!(url.path(), "/");
//! ```

use super::config::{BaseUrl, ClientOptions};
use super::environment::EnvironmentContext;
use crate::protocol::constants::FALLBACK_ORIGIN;
use std::sync::LazyLock;
use url::Url;

static FALLBACK_ORIGIN_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(FALLBACK_ORIGIN).expect("fallback origin is a valid absolute URL")
});

/// Resolve the base URL for a client from its options.
pub fn resolve_base_url(options: &ClientOptions) -> Url {
    let env = &options.environment;

    match &options.base_url {
        Some(BaseUrl::Url(url)) => return url.clone(),
        Some(BaseUrl::Str(raw)) if !raw.trim().is_empty() => {
            return resolve_base_url_str(raw, env);
        }
        _ => {}
    }

    let origin = origin_or_fallback(env);
    let path = match &options.base_path {
        Some(path) => path.clone(),
        None => detect_document_base_path(env),
    };
    let path = if path.is_empty() { "/" } else { path.as_str() };

    origin.join(path).unwrap_or_else(|err| {
        tracing::debug!(path, %err, "base path could not be joined onto origin, using origin root");
        origin
    })
}

/// Detect a base path from the document context.
///
/// A `<base href>` wins over the document base URI. Returns `/` when there is no
/// document or neither hint is usable.
pub fn detect_document_base_path(env: &EnvironmentContext) -> String {
    let Some(doc) = &env.document else {
        return "/".to_string();
    };

    if let Some(href) = doc.base_href.as_deref().filter(|h| !h.is_empty()) {
        return match ambient_origin(env).and_then(|origin| origin.join(href)) {
            Ok(url) => non_empty_path(&url),
            Err(err) => {
                tracing::debug!(href, %err, "base href could not be resolved, using it verbatim");
                if href.starts_with('/') {
                    href.to_string()
                } else {
                    format!("/{}", href)
                }
            }
        };
    }

    if let Some(uri) = doc.base_uri.as_deref().filter(|u| !u.is_empty()) {
        match Url::parse(uri) {
            Ok(url) => return non_empty_path(&url),
            Err(err) => tracing::debug!(uri, %err, "ignoring invalid document base URI"),
        }
    }

    "/".to_string()
}

fn resolve_base_url_str(raw: &str, env: &EnvironmentContext) -> Url {
    if let Ok(url) = Url::parse(raw) {
        return url;
    }

    let origin = origin_or_fallback(env);
    origin.join(raw).unwrap_or_else(|err| {
        tracing::debug!(base_url = raw, %err, "base URL could not be resolved, using origin root");
        origin
    })
}

/// The environment origin, or the fallback origin when none is set.
///
/// An origin that cannot serve as a base (`data:x`, `mailto:a`) is rejected.
fn ambient_origin(env: &EnvironmentContext) -> Result<Url, url::ParseError> {
    match env.origin.as_deref() {
        Some(origin) => {
            let url = Url::parse(origin)?;
            if url.cannot_be_a_base() {
                return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
            }
            Ok(url)
        }
        None => Ok(FALLBACK_ORIGIN_URL.clone()),
    }
}

fn origin_or_fallback(env: &EnvironmentContext) -> Url {
    ambient_origin(env).unwrap_or_else(|err| {
        tracing::debug!(origin = ?env.origin, %err, "invalid ambient origin, using fallback");
        FALLBACK_ORIGIN_URL.clone()
    })
}

fn non_empty_path(url: &Url) -> String {
    match url.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    }
}
