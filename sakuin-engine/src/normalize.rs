//! Canonical form used before hashing and index comparisons.

use crate::kana::{hiragana_to_katakana_char, to_zenkaku_katakana};
use crate::variant::{VariantMap, variant_map};

/// Whitespace deleted by [`normalize`]: ASCII space, tab, line feed,
/// vertical tab, form feed, carriage return and the ideographic space.
pub fn is_removable_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | '\u{3000}'
    )
}

/// Normalize `text` with the embedded variant table.
///
/// Hiragana becomes katakana, variant characters fold to their canonical
/// form, whitespace is removed everywhere, and half-width katakana becomes
/// full-width with voicing marks composed. Two strings with the same
/// normalized form are the same logical text.
pub fn normalize(text: &str) -> String {
    normalize_with(text, variant_map())
}

/// Normalize `text` with a caller-supplied variant table.
pub fn normalize_with(text: &str, variants: &VariantMap) -> String {
    let folded: String = text
        .chars()
        .map(|c| variants.canonical(hiragana_to_katakana_char(c)))
        .filter(|&c| !is_removable_whitespace(c))
        .collect();
    to_zenkaku_katakana(&folded)
}
