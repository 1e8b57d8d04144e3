//! Noise-header filtering and cookie/header separation.

use tracing::debug;

use crate::parser::cookie::parse_cookie_string;
use crate::session::FieldMap;

/// Headers that usually don't contain auth data and clutter the output.
///
/// Membership is checked against the lowercased header name. Everything not
/// listed here is kept, so Authorization, CSRF-style tokens, and custom
/// headers survive by default.
pub const IGNORED_HEADERS: [&str; 18] = [
    "host",
    "content-length",
    "content-type",
    "connection",
    "upgrade-insecure-requests",
    "accept",
    "accept-encoding",
    "accept-language",
    "user-agent",
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
    "sec-fetch-site",
    "sec-fetch-mode",
    "sec-fetch-user",
    "sec-fetch-dest",
    "if-none-match",
    "if-modified-since",
];

/// Returns true if the header name (any casing) is in the noise set.
#[must_use]
pub fn is_noise_header(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    IGNORED_HEADERS.contains(&lower.as_str())
}

/// Filters out noise headers and separates cookies from headers.
///
/// A header named `cookie` (any casing) is exploded into the cookie map
/// instead of being kept; noise-set headers are dropped entirely; all other
/// entries are kept verbatim with their original casing.
#[must_use]
pub fn clean_headers(raw_headers: FieldMap) -> (FieldMap, FieldMap) {
    let mut headers = FieldMap::new();
    let mut cookies = FieldMap::new();

    for (name, value) in raw_headers {
        let lower = name.to_ascii_lowercase();

        if lower == "cookie" {
            cookies.extend(parse_cookie_string(&value));
            continue;
        }

        if IGNORED_HEADERS.contains(&lower.as_str()) {
            debug!(header = %name, "dropping noise header");
            continue;
        }

        headers.insert(name, value);
    }

    (headers, cookies)
}
