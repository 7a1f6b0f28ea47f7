//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary, appending `...` when anything was cut.
///
/// Used for log previews of user and assistant text.
pub fn preview(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Returns `true` when `s` contains nothing but whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_is_unchanged() {
        assert_eq!(preview("hi", 10), "hi");
    }

    #[test]
    fn preview_cuts_and_marks() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn preview_multibyte_boundary() {
        // 9 bytes: 3+3+3
        let s = "あのね";
        assert_eq!(preview(s, 4), "あ...");
        assert_eq!(preview(s, 9), "あのね");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(!is_blank(" a "));
    }
}
