use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// CJK characters and most emoji take two columns, combining marks take none.
///
/// ```
/// use faqview::util::display_width;
///
/// assert_eq!(display_width("FAQ"), 3);
/// assert_eq!(display_width("자주 묻는 질문"), 14);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate `s` to at most `max_width` columns, appending "..." when cut.
///
/// Widths of 3 or less have no room for an ellipsis, so the string is simply
/// cut. Returns `Cow::Borrowed` when `s` already fits.
///
/// ```
/// use faqview::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Short", 10), "Short");
/// assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
/// assert_eq!(truncate_to_width("Test", 2), "Te");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width <= ELLIPSIS_WIDTH {
        return Cow::Owned(take_columns(s, max_width).to_string());
    }
    let head = take_columns(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", head, ELLIPSIS))
}

/// Longest prefix of `s` that fits in `width` columns.
fn take_columns(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Break `s` into lines of at most `width` columns, preferring spaces.
///
/// Words wider than a line are split mid-word. A zero width yields no lines.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in s.split(' ').filter(|w| !w.is_empty()) {
        let mut word = word;
        let mut w = display_width(word);
        let gap = usize::from(used > 0);

        if used + gap + w <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            used += gap + w;
            continue;
        }

        if used > 0 {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        while w > width {
            let head = take_columns(word, width);
            // A single char wider than the line still has to go somewhere
            let head = if head.is_empty() {
                word.chars().next().map_or(word, |c| &word[..c.len_utf8()])
            } else {
                head
            };
            lines.push(head.to_string());
            word = &word[head.len()..];
            w = display_width(word);
        }
        if !word.is_empty() {
            current.push_str(word);
            used = w;
        }
    }
    if used > 0 {
        lines.push(current);
    }
    lines
}

fn is_stripped_control(b: u8) -> bool {
    b == 0x7f || (b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r')
}

/// Strip terminal control characters and ANSI escape sequences.
///
/// FAQ bodies come from the backend and end up on the terminal, so anything
/// that could move the cursor or retitle the window is removed. Tab, newline
/// and carriage return are kept.
///
/// Returns `Cow::Borrowed` when nothing needs stripping.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if !bytes.iter().any(|&b| b == 0x1b || is_stripped_control(b)) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    let len = bytes.len();

    while i < len {
        let b = bytes[i];
        if b == 0x1b {
            match bytes.get(i + 1) {
                // CSI: parameters until a final byte in 0x40..=0x7e
                Some(b'[') => {
                    i += 2;
                    while i < len {
                        let c = bytes[i];
                        i += 1;
                        if (0x40..=0x7e).contains(&c) {
                            break;
                        }
                    }
                }
                // OSC: until BEL or ST
                Some(b']') => {
                    i += 2;
                    while i < len {
                        if bytes[i] == 0x07 {
                            i += 1;
                            break;
                        }
                        if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                            i += 2;
                            break;
                        }
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        } else if is_stripped_control(b) {
            i += 1;
        } else {
            let start = i;
            while i < len && bytes[i] != 0x1b && !is_stripped_control(bytes[i]) {
                i += 1;
            }
            // Only ASCII bytes end a run, so the slice is on char boundaries.
            out.push_str(&s[start..i]);
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_truncation() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
        assert_eq!(truncate_to_width("Short", 10), "Short");
    }

    #[test]
    fn test_cjk_truncation() {
        // 4 chars x 2 columns = 8
        assert_eq!(truncate_to_width("자주묻는", 7), "자주...");
        assert_eq!(truncate_to_width("자주", 10), "자주");
        assert_eq!(truncate_to_width("자주묻는", 5), "자...");
    }

    #[test]
    fn test_borrowed_when_fits() {
        assert!(matches!(truncate_to_width("12345", 5), Cow::Borrowed(_)));
    }

    #[test]
    fn test_narrow_widths() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Test", 1), "T");
        assert_eq!(truncate_to_width("Test", 3), "Tes");
        // A two-column char does not fit in one column
        assert_eq!(truncate_to_width("질문", 1), "");
        assert_eq!(truncate_to_width("질문", 3), "질");
    }

    #[test]
    fn test_min_width_with_ellipsis() {
        assert_eq!(truncate_to_width("Testing", 4), "T...");
    }

    #[test]
    fn test_wrap_on_spaces() {
        assert_eq!(
            wrap_to_width("Refunds are issued within seven days", 15),
            vec!["Refunds are", "issued within", "seven days"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_to_width("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_counts_wide_chars() {
        assert_eq!(wrap_to_width("환불 안내 페이지", 9), vec!["환불 안내", "페이지"]);
    }

    #[test]
    fn test_wrap_edge_cases() {
        assert!(wrap_to_width("", 10).is_empty());
        assert!(wrap_to_width("text", 0).is_empty());
        assert_eq!(wrap_to_width("질문", 1), vec!["질", "문"]);
    }

    #[test]
    fn test_strip_clean_text_returns_borrowed() {
        let input = "line1\nline2\ttabbed\r\n";
        let result = strip_control_chars(input);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }

    #[test]
    fn test_strip_controls_and_del() {
        assert_eq!(strip_control_chars("he\x00ll\x07o\x7f!"), "hello!");
    }

    #[test]
    fn test_strip_ansi_sequences() {
        assert_eq!(strip_control_chars("\x1b[31mRed\x1b[0m"), "Red");
        assert_eq!(strip_control_chars("\x1b]0;title\x07safe"), "safe");
        assert_eq!(strip_control_chars("\x1b]0;title\x1b\\safe"), "safe");
        assert_eq!(strip_control_chars("a\x1bb"), "ab");
    }

    #[test]
    fn test_strip_preserves_unicode() {
        assert_eq!(strip_control_chars("환불 \x1b[1m안내\x1b[0m"), "환불 안내");
    }
}
