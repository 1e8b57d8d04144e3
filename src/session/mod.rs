//! The canonical session record and its validation and JSON output.
//!
//! Every ingestion adapter converges on a [`SessionRecord`]: one map of
//! cookies, one map of surviving headers, and metadata recording which
//! adapter produced the record and when.

mod map;
mod save;

pub use map::FieldMap;
pub use save::{DEFAULT_SESSION_FILENAME, SaveError, normalize_session_filename, write_session_file};

use std::fmt;

use serde::Serialize;

/// Which ingestion adapter produced a session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Raw HTTP request text (proxy request-editor style)
    RawHttp,
    /// cURL command line ("copy as cURL" style)
    Curl,
    /// Interactive manual entry
    Manual,
    /// No adapter has run
    Unknown,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawHttp => write!(f, "raw_http"),
            Self::Curl => write!(f, "curl"),
            Self::Manual => write!(f, "manual"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Record metadata: provenance and creation time.
#[derive(Debug, Clone, Serialize)]
pub struct SessionMeta {
    /// Local timestamp captured at record construction (informational only).
    pub created_at: String,
    /// The adapter that built the record.
    pub source: Source,
}

/// The normalized session record produced by one harvester run.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    /// Cookie name -> value, exploded from `Cookie` headers.
    pub cookies: FieldMap,
    /// Surviving headers with original casing (noise headers removed).
    pub headers: FieldMap,
    /// Provenance metadata.
    pub meta: SessionMeta,
}

impl SessionRecord {
    /// Creates an empty record tagged with the adapter that is about to run.
    #[must_use]
    pub fn new(source: Source) -> Self {
        Self {
            cookies: FieldMap::new(),
            headers: FieldMap::new(),
            meta: SessionMeta {
                created_at: chrono::Local::now()
                    .format("%Y-%m-%d %H:%M:%S%.6f")
                    .to_string(),
                source,
            },
        }
    }

    /// Checks whether the record captured any authentication material.
    ///
    /// True when the cookie map is non-empty, or a header is named
    /// `Authorization` (any casing), or a header name contains `token` or
    /// `csrf` case-insensitively. Advisory only; a record that fails this
    /// check is still saveable.
    #[must_use]
    pub fn has_auth_material(&self) -> bool {
        if !self.cookies.is_empty() {
            return true;
        }

        self.headers.iter().any(|(name, _)| {
            let lower = name.to_ascii_lowercase();
            lower == "authorization" || lower.contains("token") || lower.contains("csrf")
        })
    }

    /// Serializes the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new(Source::Unknown)
    }
}
