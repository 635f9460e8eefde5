//! Pure format checks for target URLs and short codes.
//!
//! Both functions are total: malformed input yields `false`, never an error.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Compiled pattern for short codes: 6 to 8 alphanumeric characters.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("valid code regex"));

/// Returns true iff `s` parses as an absolute URL with scheme `http` or `https`.
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Returns true iff `s` matches `[A-Za-z0-9]{6,8}`.
pub fn is_valid_code(s: &str) -> bool {
    CODE_REGEX.is_match(s)
}
