//! Shell-style word splitting for captured command lines.

use crate::parser::error::ParseError;

/// Splits input into shell words, honoring quotes and backslash escapes.
///
/// Rules follow POSIX-style splitting: single quotes are fully literal,
/// double quotes allow `\"` and `\\` escapes, and a backslash outside
/// quotes escapes the next character. Quotes are stripped from the
/// resulting tokens, so `-H 'Cookie: a=1'` yields `Cookie: a=1` as one
/// word. `''` yields an empty token.
///
/// # Errors
///
/// Returns [`ParseError::Tokenize`] when a quote never closes or the input
/// ends in a lone backslash.
pub fn split_shell_words(input: &str) -> Result<Vec<String>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < chars.len() {
        // Skip leading whitespace
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let (token, next) = scan_token(&chars, i)?;
        tokens.push(token);
        i = next;
    }

    Ok(tokens)
}

/// Scans one token starting at `start`, returning it unquoted along with
/// the index just past its end.
fn scan_token(chars: &[char], start: usize) -> Result<(String, usize), ParseError> {
    let mut token = String::new();
    let mut i = start;
    let mut in_single_quotes = false;
    let mut in_double_quotes = false;

    while i < chars.len() {
        let c = chars[i];

        if in_single_quotes {
            if c == '\'' {
                in_single_quotes = false;
            } else {
                token.push(c);
            }
            i += 1;
            continue;
        }

        if in_double_quotes {
            if c == '"' {
                in_double_quotes = false;
            } else if c == '\\' && i + 1 < chars.len() {
                // Inside double quotes only \" and \\ are escapes
                let next = chars[i + 1];
                if next == '"' || next == '\\' {
                    token.push(next);
                    i += 1;
                } else {
                    token.push(c);
                }
            } else if c == '\\' {
                return Err(ParseError::unterminated_quote('"'));
            } else {
                token.push(c);
            }
            i += 1;
            continue;
        }

        match c {
            '\'' => in_single_quotes = true,
            '"' => in_double_quotes = true,
            '\\' => {
                if i + 1 >= chars.len() {
                    return Err(ParseError::dangling_escape());
                }
                token.push(chars[i + 1]);
                i += 1;
            }
            _ if c.is_whitespace() => return Ok((token, i)),
            _ => token.push(c),
        }
        i += 1;
    }

    if in_single_quotes {
        return Err(ParseError::unterminated_quote('\''));
    }
    if in_double_quotes {
        return Err(ParseError::unterminated_quote('"'));
    }

    Ok((token, i))
}
