//! Blocking line-read prompts for the interactive flow.

use std::io::{self, BufRead, Write};

/// Writes a prompt to stdout and reads one trimmed line from stdin.
///
/// End-of-input yields an empty string, which every caller treats as the
/// default answer.
pub(crate) fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(String::new());
    }
    Ok(line.trim().to_string())
}

/// Collects lines from the reader until end-of-input, joined with newlines.
pub(crate) fn read_multiline(reader: impl BufRead) -> io::Result<String> {
    let mut contents = Vec::new();
    for line in reader.lines() {
        contents.push(line?);
    }
    Ok(contents.join("\n"))
}

/// Interprets a save-confirmation answer: default-yes on empty, `y`, `yes`.
pub(crate) fn confirm_save(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_multiline_joins_lines() {
        let input = Cursor::new("line one\nline two\nline three\n");
        let text = read_multiline(input).unwrap();
        assert_eq!(text, "line one\nline two\nline three");
    }

    #[test]
    fn test_read_multiline_empty_input() {
        let input = Cursor::new("");
        assert_eq!(read_multiline(input).unwrap(), "");
    }

    #[test]
    fn test_confirm_save_default_yes() {
        assert!(confirm_save(""));
        assert!(confirm_save("y"));
        assert!(confirm_save("Y"));
        assert!(confirm_save("yes"));
        assert!(confirm_save("YES"));
    }

    #[test]
    fn test_confirm_save_anything_else_discards() {
        assert!(!confirm_save("n"));
        assert!(!confirm_save("no"));
        assert!(!confirm_save("maybe"));
    }
}
