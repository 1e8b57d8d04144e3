//! Harvester Core Library
//!
//! This library provides the core functionality for the session harvester,
//! which extracts authentication material (cookies, bearer/basic tokens,
//! CSRF/custom headers) from a captured HTTP request and normalizes it into
//! a single structured session record.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Ingestion adapters (raw HTTP, cURL command, manual entry)
//!   and the cookie/header classifier
//! - [`session`] - The canonical session record, validation, and JSON output

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod parser;
pub mod session;

// Re-export commonly used types
pub use parser::{
    ParseError, clean_headers, collect_manual, is_noise_header, parse_cookie_string, parse_curl,
    parse_raw_http, split_shell_words,
};
pub use session::{
    FieldMap, SaveError, SessionMeta, SessionRecord, Source, normalize_session_filename,
    write_session_file,
};
