//! Trimming helpers that understand Japanese spacing.

/// Whether `c` is stripped by [`trim_to_empty`]: any control character or space up to U+0020.
fn is_ascii_trim(c: char) -> bool {
    c <= '\u{20}'
}

/// Whether `c` is stripped by [`full_trim`].
fn is_full_trim(c: char) -> bool {
    is_ascii_trim(c) || c == '\u{a0}' || c == '\u{3000}'
}

/// Trim control characters and spaces from both ends; `None` becomes `""`.
pub fn trim_to_empty(text: Option<&str>) -> &str {
    text.map_or("", |s| s.trim_matches(is_ascii_trim))
}

/// Trim both ends, also removing U+3000 (ideographic space) and U+00A0 (no-break space).
///
/// Returns a subslice of `text`, so nothing is allocated whether or not trimming occurred.
pub fn full_trim(text: &str) -> &str {
    text.trim_matches(is_full_trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_to_empty() {
        assert_eq!(trim_to_empty(Some("  abc  ")), "abc");
        assert_eq!(trim_to_empty(None), "");
        assert_eq!(trim_to_empty(Some("   ")), "");
        assert_eq!(trim_to_empty(Some("\t\r\nabc\u{0}")), "abc");
    }

    #[test]
    fn test_trim_to_empty_keeps_ideographic_space() {
        assert_eq!(trim_to_empty(Some("\u{3000}abc\u{3000}")), "\u{3000}abc\u{3000}");
    }

    #[test]
    fn test_full_trim() {
        assert_eq!(full_trim("\u{3000} abc\u{3000} "), "abc");
        assert_eq!(full_trim("\u{a0}abc\u{a0}"), "abc");
        assert_eq!(full_trim("\u{3000} "), "");
        assert_eq!(full_trim("\u{3000}\u{3000}"), "");
        assert_eq!(full_trim(""), "");
    }

    #[test]
    fn test_full_trim_keeps_inner_spaces() {
        assert_eq!(full_trim("\u{3000}坂﨑\u{3000}ともゑ "), "坂﨑\u{3000}ともゑ");
    }

    #[test]
    fn test_full_trim_borrows_untrimmed_input() {
        let text = "abc";
        assert!(std::ptr::eq(full_trim(text), text));
    }

    #[test]
    fn test_full_trim_absent() {
        let absent: Option<&str> = None;
        assert_eq!(absent.map(full_trim), None);
    }
}
