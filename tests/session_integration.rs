//! Integration tests for the adapter -> record -> JSON pipeline.

use std::io::Cursor;

use harvester_core::{
    ParseError, SessionRecord, Source, collect_manual, normalize_session_filename, parse_curl,
    parse_raw_http, write_session_file,
};

// ==================== Raw HTTP ====================

#[test]
fn test_raw_http_end_to_end() {
    let record = parse_raw_http(
        "GET / HTTP/1.1\nHost: x.com\nCookie: sid=abc123\nAuthorization: Bearer zzz\n\n",
    );

    assert_eq!(record.cookies.get("sid"), Some("abc123"));
    assert_eq!(record.cookies.len(), 1);
    assert_eq!(record.headers.get("Authorization"), Some("Bearer zzz"));
    assert_eq!(record.headers.len(), 1, "Host must be dropped");
    assert_eq!(record.meta.source, Source::RawHttp);
}

#[test]
fn test_raw_http_noise_set_excluded_in_any_case() {
    for name in ["Host", "HOST", "host", "hOsT"] {
        let raw = format!("GET / HTTP/1.1\n{name}: x.com\n");
        let record = parse_raw_http(&raw);
        assert!(
            record.headers.is_empty(),
            "{name} should be excluded from cleaned headers"
        );
    }
}

#[test]
fn test_raw_http_cookie_duplicates_last_write_wins() {
    let record = parse_raw_http("GET / HTTP/1.1\nCookie: a=1; b=2; a=3\n");
    assert_eq!(record.cookies.get("a"), Some("3"));
    assert_eq!(record.cookies.get("b"), Some("2"));
    assert_eq!(record.cookies.len(), 2);
}

// ==================== cURL ====================

#[test]
fn test_curl_end_to_end() {
    let record = parse_curl("curl 'https://x.com' -H 'Cookie: a=1' -H 'X-Custom: v'").unwrap();

    assert_eq!(record.cookies.get("a"), Some("1"));
    assert_eq!(record.cookies.len(), 1);
    assert_eq!(record.headers.get("X-Custom"), Some("v"));
    assert_eq!(record.headers.len(), 1);
    assert_eq!(record.meta.source, Source::Curl);
}

#[test]
fn test_curl_unterminated_quote_reports_error_without_crash() {
    let result = parse_curl("curl 'https://x.com' -H 'Cookie: a=1");
    let err = match result {
        Err(e) => e,
        Ok(_) => panic!("unterminated quote should fail tokenization"),
    };
    assert!(matches!(err, ParseError::Tokenize { .. }));

    // The caller proceeds with an empty record for this source
    let record = SessionRecord::new(Source::Curl);
    assert!(record.cookies.is_empty());
    assert!(record.headers.is_empty());
    assert!(!record.has_auth_material());
}

// ==================== Manual ====================

#[test]
fn test_manual_dialogue_end_to_end() {
    let script = "Bearer tok123\nsid=abc; theme=dark\nX-Csrf-Token: xyz\n\n";
    let mut prompts = Vec::new();
    let record = collect_manual(Cursor::new(script.as_bytes()), &mut prompts).unwrap();

    assert_eq!(record.headers.get("Authorization"), Some("Bearer tok123"));
    assert_eq!(record.headers.get("X-Csrf-Token"), Some("xyz"));
    assert_eq!(record.cookies.get("sid"), Some("abc"));
    assert_eq!(record.cookies.get("theme"), Some("dark"));
    assert_eq!(record.meta.source, Source::Manual);
    assert!(record.has_auth_material());
}

// ==================== Validation ====================

#[test]
fn test_validation_false_on_empty_record() {
    let record = SessionRecord::new(Source::RawHttp);
    assert!(!record.has_auth_material());
}

#[test]
fn test_validation_true_on_csrf_header_only() {
    let mut record = SessionRecord::new(Source::Manual);
    record.headers.insert("X-Csrf-Token", "xyz");
    assert!(record.has_auth_material());
}

// ==================== Serialization round-trip ====================

#[test]
fn test_record_round_trips_through_json() {
    let record = parse_raw_http("GET / HTTP/1.1\nCookie: sid=abc\nAuthorization: Bearer z\n");

    let json = record.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let top_keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(top_keys, vec!["cookies", "headers", "meta"]);
    assert_eq!(value["meta"]["source"], "raw_http");
    assert_eq!(value["cookies"]["sid"], "abc");
    assert_eq!(value["headers"]["Authorization"], "Bearer z");
    assert!(value["meta"]["created_at"].is_string());
}

#[test]
fn test_round_trip_preserves_source_for_each_adapter() {
    let cases = [
        (parse_raw_http("GET / HTTP/1.1\n"), "raw_http"),
        (parse_curl("curl 'https://x.com'").unwrap(), "curl"),
        (
            collect_manual(Cursor::new(b"\n\n\n" as &[u8]), Vec::new()).unwrap(),
            "manual",
        ),
    ];

    for (record, expected_tag) in cases {
        let value: serde_json::Value =
            serde_json::from_str(&record.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["meta"]["source"], expected_tag);
    }
}

// ==================== File save ====================

#[test]
fn test_save_appends_json_suffix_and_writes_file() {
    let dir = tempfile::tempdir().unwrap();

    let record = parse_raw_http("GET / HTTP/1.1\nCookie: sid=abc\n");
    let filename = normalize_session_filename("capture");
    assert_eq!(filename, "capture.json");

    let path = dir.path().join(filename);
    write_session_file(&record, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["cookies"]["sid"], "abc");
}
