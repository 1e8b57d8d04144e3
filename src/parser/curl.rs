//! cURL command-line adapter.

use tracing::debug;

use crate::parser::classify::clean_headers;
use crate::parser::error::ParseError;
use crate::parser::shellwords::split_shell_words;
use crate::session::{FieldMap, SessionRecord, Source};

/// Parses a cURL command line, collecting `-H`/`--header` values.
///
/// Line continuations (backslash-newline) and bare newlines are collapsed
/// to spaces first, which tolerates multi-line commands produced by browser
/// "copy as cURL" features. All flags other than `-H`/`--header` are
/// ignored; a trailing `-H` with no value and header specs without a colon
/// are skipped.
///
/// # Errors
///
/// Returns [`ParseError::Tokenize`] when the command cannot be split into
/// shell words (unbalanced quoting). No headers are collected in that case.
pub fn parse_curl(curl_command: &str) -> Result<SessionRecord, ParseError> {
    let mut record = SessionRecord::new(Source::Curl);

    // Sanitize newlines, often present when copying from browser devtools
    let normalized = curl_command.replace("\\\n", " ").replace('\n', " ");
    let tokens = split_shell_words(&normalized)?;

    let mut raw_headers = FieldMap::new();

    for (i, token) in tokens.iter().enumerate() {
        if token != "-H" && token != "--header" {
            continue;
        }
        let Some(header_str) = tokens.get(i + 1) else {
            debug!("ignoring trailing header flag with no value");
            continue;
        };
        match header_str.split_once(':') {
            Some((name, value)) => raw_headers.insert(name.trim(), value.trim()),
            None => debug!(header = %header_str, "skipping header argument without colon"),
        }
    }

    let (headers, cookies) = clean_headers(raw_headers);
    record.headers = headers;
    record.cookies = cookies;
    Ok(record)
}
