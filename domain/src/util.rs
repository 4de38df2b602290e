//! Shared utility functions.

/// Single-line preview of user text for log messages.
///
/// Newlines are collapsed to spaces and the result is cut to at most
/// `max_bytes` bytes on a UTF-8 character boundary, with `...` appended
/// when anything was dropped.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let flat: String = s
        .trim()
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.len() <= max_bytes {
        return flat;
    }
    let mut end = max_bytes;
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(log_preview("hello", 10), "hello");
    }

    #[test]
    fn preview_collapses_newlines() {
        assert_eq!(log_preview("line one\nline two\n", 100), "line one line two");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        // each kana is 3 bytes; byte 4 falls inside the second one
        assert_eq!(log_preview("あのね", 4), "あ...");
        assert_eq!(log_preview("あのね", 6), "あの...");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(log_preview("   ", 10), "");
    }
}
