//! Formatting utilities for CLI output.

use unicode_width::UnicodeWidthStr;

/// Hours with one decimal, e.g. `7.5h`.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}h")
}

/// Pad to `width` terminal columns; wide (CJK) characters count as two.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

/// Cut `s` to at most `width` columns, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// Memo on one line: newlines shown as `⏎`.
pub fn one_line(s: &str) -> String {
    s.replace("\r\n", "⏎").replace('\n', "⏎")
}
