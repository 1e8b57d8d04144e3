//! Cookie-header string parsing.

use cookie::Cookie;
use tracing::debug;

use crate::session::FieldMap;

/// Converts a `Cookie: a=b; c=d` style string into a name/value map.
///
/// Parsing is permissive: surrounding whitespace per pair is tolerated,
/// quoted values are unquoted, empty values are kept, and pairs that fail
/// to parse (no `=` sign, empty name) are silently skipped. Duplicate names
/// resolve last-write-wins.
#[must_use]
pub fn parse_cookie_string(cookie_str: &str) -> FieldMap {
    let mut cookies = FieldMap::new();

    for parsed in Cookie::split_parse(cookie_str.trim()) {
        match parsed {
            Ok(pair) => cookies.insert(pair.name(), pair.value_trimmed()),
            Err(error) => debug!(%error, "skipping malformed cookie pair"),
        }
    }

    cookies
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let cookies = parse_cookie_string("sid=abc123; theme=dark");
        assert_eq!(cookies.get("sid"), Some("abc123"));
        assert_eq!(cookies.get("theme"), Some("dark"));
        assert_eq!(cookies.len(), 2);
    }

    #[test]
    fn test_parse_duplicate_names_last_wins() {
        let cookies = parse_cookie_string("a=1; b=2; a=3");
        assert_eq!(cookies.get("a"), Some("3"));
        assert_eq!(cookies.get("b"), Some("2"));
        assert_eq!(cookies.len(), 2);
    }

    #[test]
    fn test_parse_quoted_value_unquoted() {
        let cookies = parse_cookie_string(r#"token="abc def""#);
        assert_eq!(cookies.get("token"), Some("abc def"));
    }

    #[test]
    fn test_parse_empty_value_kept() {
        let cookies = parse_cookie_string("flag=; sid=x");
        assert_eq!(cookies.get("flag"), Some(""));
        assert_eq!(cookies.get("sid"), Some("x"));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let cookies = parse_cookie_string("  a=1 ;   b=2  ");
        assert_eq!(cookies.get("a"), Some("1"));
        assert_eq!(cookies.get("b"), Some("2"));
    }

    #[test]
    fn test_parse_value_with_equals_sign() {
        let cookies = parse_cookie_string("data=a=b=c");
        assert_eq!(cookies.get("data"), Some("a=b=c"));
    }

    #[test]
    fn test_parse_malformed_pair_skipped() {
        let cookies = parse_cookie_string("no-equals-sign; sid=ok");
        assert_eq!(cookies.get("sid"), Some("ok"));
        assert_eq!(cookies.len(), 1);
    }

    #[test]
    fn test_parse_empty_string() {
        let cookies = parse_cookie_string("");
        assert!(cookies.is_empty());
    }
}
