//! Width-aware text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, ending with `…` when shortened
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Wrap text to a width, keeping explicit line breaks
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    text.split('\n')
        .flat_map(|paragraph| {
            if paragraph.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(paragraph, width)
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// Pad (or truncate) to an exact display width
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_ellipsis(text, width);
    let current = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(current)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ellipsis() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("a longer line", 6), "a lon…");
        assert_eq!(truncate_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        let lines = wrap_text("one two three\n\nfour", 7);
        assert_eq!(lines, vec!["one two", "three", "", "four"]);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
    }
}
