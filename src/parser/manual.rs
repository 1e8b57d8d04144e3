//! Interactive manual-entry adapter.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::parser::cookie::parse_cookie_string;
use crate::session::{SessionRecord, Source};

/// Builds a session record from an interactive question/answer sequence.
///
/// Prompts go to `writer` and answers come from `reader`, so tests can
/// script the dialogue. End-of-input at any prompt counts as an empty
/// answer. Manually entered headers bypass the noise filter; the user is
/// assumed intentional.
///
/// # Errors
///
/// Returns an `io::Error` if reading a line or writing a prompt fails.
pub fn collect_manual(
    mut reader: impl BufRead,
    mut writer: impl Write,
) -> io::Result<SessionRecord> {
    let mut record = SessionRecord::new(Source::Manual);

    // Auth header
    let auth = prompt_line(
        &mut reader,
        &mut writer,
        "Enter Authorization Header Value (Enter to skip): ",
    )?;
    if !auth.is_empty() {
        if auth.contains("Bearer") || auth.contains("Basic") {
            record.headers.insert("Authorization", auth);
        } else {
            // Ask key if not obvious
            let key = prompt_line(
                &mut reader,
                &mut writer,
                "  -> Key name (default: Authorization): ",
            )?;
            let key = if key.is_empty() {
                "Authorization".to_string()
            } else {
                key
            };
            record.headers.insert(key, auth);
        }
    }

    // Cookies
    let cookie_str = prompt_line(
        &mut reader,
        &mut writer,
        "Enter raw Cookie string (key=val; key2=val2): ",
    )?;
    if !cookie_str.is_empty() {
        record.cookies = parse_cookie_string(&cookie_str);
    }

    // CSRF / other custom headers
    loop {
        let custom = prompt_line(
            &mut reader,
            &mut writer,
            "Add custom header? (key:value) or Enter to finish: ",
        )?;
        if custom.is_empty() {
            break;
        }
        match custom.split_once(':') {
            Some((key, value)) => record.headers.insert(key.trim(), value.trim()),
            None => debug!(entry = %custom, "skipping custom header without colon"),
        }
    }

    Ok(record)
}

/// Writes a prompt and reads one trimmed answer line.
///
/// End-of-input yields an empty string.
fn prompt_line(reader: &mut impl BufRead, writer: &mut impl Write, prompt: &str) -> io::Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(String::new());
    }
    Ok(line.trim().to_string())
}
