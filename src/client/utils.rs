//! Path helpers for resource routes.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a lookup, matching JavaScript's `encodeURIComponent`.
const LOOKUP: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a lookup so it forms exactly one path segment.
///
/// # Examples
///
/// ```
/// use admin_runtime_client::client::encode_lookup;
///
/// assert_eq!(encode_lookup("a b"), "a%20b");
/// assert_eq!(encode_lookup("x/y"), "x%2Fy");
/// assert_eq!(encode_lookup("card-1"), "card-1");
/// ```
pub fn encode_lookup(lookup: &str) -> String {
    utf8_percent_encode(lookup, LOOKUP).to_string()
}

/// Build a relative route from a collection segment and raw lookups.
///
/// The result starts with `./` so it resolves beneath the base URL.
pub fn resource_path(segment: &str, lookups: &[&str]) -> String {
    let mut path = format!("./{}", segment);
    for lookup in lookups {
        path.push('/');
        path.push_str(&encode_lookup(lookup));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode_lookup("a b"), "a%20b");
        assert_eq!(encode_lookup("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(encode_lookup("50%"), "50%25");
        assert_eq!(encode_lookup("k=v&x"), "k%3Dv%26x");
    }

    #[test]
    fn test_encode_unreserved_characters() {
        assert_eq!(encode_lookup("Az09-_.!~*'()"), "Az09-_.!~*'()");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_lookup("café"), "caf%C3%A9");
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path("access-cards", &["card-1"]), "./access-cards/card-1");
        assert_eq!(
            resource_path("licenses", &["lic1", "plan 2", "price/3"]),
            "./licenses/lic1/plan%202/price%2F3"
        );
    }
}
