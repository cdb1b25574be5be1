//! API Configuration
//!
//! The API base URL is baked in at compile time, the same way the build
//! pipeline injects it into the bundle. When it is missing the UI disables
//! itself with a visible warning instead of issuing requests.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const API_BASE: Option<&str> = option_env!("API_BASE_URL");

/// Configured API base URL, or `None` when unset/blank.
pub fn api_base() -> Option<&'static str> {
    match API_BASE {
        Some(base) if !base.trim().is_empty() => Some(base),
        _ => None,
    }
}

/// Join the base URL and an absolute path, tolerating one trailing slash
/// on the base.
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{path}")
}

/// Percent-encode a query string value.
pub fn query_value(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_trims_one_trailing_slash() {
        assert_eq!(api_url("http://api", "/locations"), "http://api/locations");
        assert_eq!(api_url("http://api/", "/locations"), "http://api/locations");
        // only the final slash is the join artifact
        assert_eq!(api_url("http://api//", "/x"), "http://api//x");
    }

    #[test]
    fn test_query_value_encodes_reserved_characters() {
        assert_eq!(query_value("blue widget"), "blue%20widget");
        assert_eq!(query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(query_value("plain"), "plain");
    }
}
