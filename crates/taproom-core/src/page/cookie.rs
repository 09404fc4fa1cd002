//! Cookie lookup for the CSRF token

use percent_encoding::percent_decode_str;

/// Name of the cookie carrying the CSRF token
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the like endpoint expects the token in
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Find a cookie's value in a `Cookie` header string
///
/// Entries are split on `;` and trimmed; the first entry starting with
/// `name=` wins and its value is percent-decoded. Values that do not decode
/// as UTF-8 are decoded lossily.
pub fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    if cookie_header.is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// The CSRF token from a `Cookie` header string
pub fn csrf_token(cookie_header: &str) -> Option<String> {
    get_cookie(cookie_header, CSRF_COOKIE_NAME)
}
