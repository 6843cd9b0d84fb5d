//! Text measurement helpers for table cells and labels.
//!
//! All widths are display columns, not bytes or chars, so CJK and other
//! wide glyphs truncate correctly inside fixed-width table cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Truncates `input` to at most `max_width` display columns, appending an
/// ellipsis when anything was cut. Widths below 2 degrade to a hard cut.
pub fn truncate_with_ellipsis(input: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(input) <= max_width {
        return input.to_string();
    }
    if max_width < 2 {
        return take_columns(input, max_width);
    }
    let mut out = take_columns(input, max_width - 1);
    out.push_str(ELLIPSIS);
    out
}

/// Returns the longest prefix of `input` that fits in `max_width` columns.
fn take_columns(input: &str, max_width: usize) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_with_ellipsis("feed", 10), "feed");
        assert_eq!(truncate_with_ellipsis("", 4), "");
    }

    #[test]
    fn long_strings_get_an_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Policy Violations", 10), "Policy Vi…");
    }

    #[test]
    fn wide_glyphs_count_as_two_columns() {
        // each CJK glyph occupies two columns
        assert_eq!(truncate_with_ellipsis("模型提示词管理", 6), "模型…");
    }

    #[test]
    fn tiny_widths_hard_cut() {
        assert_eq!(truncate_with_ellipsis("abcdef", 1), "a");
        assert_eq!(truncate_with_ellipsis("abcdef", 0), "");
    }
}
