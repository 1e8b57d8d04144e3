//! Ingestion adapters for captured request text.
//!
//! Three independent paths converge on one canonical
//! [`SessionRecord`](crate::session::SessionRecord):
//!
//! - [`parse_raw_http`] - raw HTTP request text (proxy request editor)
//! - [`parse_curl`] - a shell-style cURL command line
//! - [`collect_manual`] - interactive question/answer entry
//!
//! The raw-HTTP and cURL paths feed their collected headers through
//! [`clean_headers`], which drops noise headers and explodes `Cookie`
//! values into the cookie map. Manual entry bypasses the filter.
//!
//! # Example
//!
//! ```
//! use harvester_core::parser::parse_raw_http;
//!
//! let record = parse_raw_http("GET / HTTP/1.1\nCookie: sid=abc\n\n");
//! assert_eq!(record.cookies.get("sid"), Some("abc"));
//! ```

mod classify;
mod cookie;
mod curl;
mod error;
mod manual;
mod raw_http;
mod shellwords;

pub use classify::{IGNORED_HEADERS, clean_headers, is_noise_header};
pub use cookie::parse_cookie_string;
pub use curl::parse_curl;
pub use error::ParseError;
pub use manual::collect_manual;
pub use raw_http::parse_raw_http;
pub use shellwords::split_shell_words;
