//! Raw HTTP request text adapter.

use tracing::debug;

use crate::parser::classify::clean_headers;
use crate::session::{FieldMap, SessionRecord, Source};

/// Parses a raw HTTP request as copied from an intercepting proxy's
/// request editor.
///
/// The first line (method, path, version) is discarded unconditionally and
/// never parsed. Header lines are split on the first colon; iteration stops
/// at the blank line that separates headers from the body. Lines without a
/// colon are silently skipped, so malformed input never fails; empty input
/// yields an empty record.
#[must_use]
pub fn parse_raw_http(raw_text: &str) -> SessionRecord {
    let mut record = SessionRecord::new(Source::RawHttp);
    let mut raw_headers = FieldMap::new();

    let mut lines = raw_text.trim().split('\n');
    if let Some(request_line) = lines.next() {
        debug!(line = request_line, "skipping request line");
    }

    for line in lines {
        // Blank line (or bare \r) marks the header/body boundary
        if line.is_empty() || line == "\r" {
            break;
        }

        match line.split_once(':') {
            Some((name, value)) => raw_headers.insert(name.trim(), value.trim()),
            None => debug!(line, "skipping header line without colon"),
        }
    }

    let (headers, cookies) = clean_headers(raw_headers);
    record.headers = headers;
    record.cookies = cookies;
    record
}
