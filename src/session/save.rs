//! Writing a session record to a JSON file.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::SessionRecord;

/// Default output file name when the user supplies none.
pub const DEFAULT_SESSION_FILENAME: &str = "session.json";

/// Errors that can occur while saving a session record.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The record could not be serialized to JSON.
    #[error("failed to serialize session record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write session file '{path}': {source}\n  Suggestion: Check the path is writable")]
    Io {
        /// The path that could not be written.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Normalizes a user-supplied file name for the session JSON document.
///
/// An empty (or whitespace-only) name falls back to `session.json`; a name
/// without a `.json` suffix gets one appended.
#[must_use]
pub fn normalize_session_filename(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_SESSION_FILENAME.to_string();
    }

    if trimmed.ends_with(".json") {
        trimmed.to_string()
    } else {
        format!("{trimmed}.json")
    }
}

/// Writes the record as pretty-printed JSON, overwriting any existing file.
///
/// # Errors
///
/// Returns [`SaveError::Serialize`] if the record cannot be serialized, or
/// [`SaveError::Io`] if the file cannot be written.
pub fn write_session_file(record: &SessionRecord, path: &Path) -> Result<(), SaveError> {
    let json = record.to_json_pretty()?;
    fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), "session record written");
    Ok(())
}
