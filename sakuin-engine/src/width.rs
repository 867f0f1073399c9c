//! Full-width to half-width folding for Latin letters, digits and signs.

/// Offset between a full-width ASCII variant (`Ａ`) and its half-width form (`A`).
const FULL_WIDTH_OFFSET: u32 = 'Ａ' as u32 - 'A' as u32;

/// Full-width signs folded alongside letters and digits.
///
/// Every entry except `−` (U+2212 MINUS SIGN) lives in the full-width block,
/// so `FULL_WIDTH_OFFSET` maps it onto its ASCII counterpart.
pub const FULL_WIDTH_SIGNS: [char; 28] = [
    '！', '＃', '＄', '％', '＆', '（', '）', '＊', '＋', '，', '−', '－', '．', '／', '：', '；',
    '＜', '＝', '＞', '？', '＠', '［', '］', '＾', '＿', '｛', '｜', '｝',
];

/// Whether `c` is one of the full-width signs folded by [`to_half_width`].
pub fn is_full_width_sign(c: char) -> bool {
    FULL_WIDTH_SIGNS.contains(&c)
}

/// Fold a single full-width letter, digit or sign to half-width.
///
/// `−` (U+2212) folds to ASCII `-`; every other sign is shifted by the
/// full-width offset. Characters outside those classes are returned unchanged.
pub fn to_half_width_char(c: char) -> char {
    match c {
        // U+2212 sits outside the full-width block; the offset would land on U+2332
        '−' => '-',
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => shift_down(c),
        _ if is_full_width_sign(c) => shift_down(c),
        _ => c,
    }
}

fn shift_down(c: char) -> char {
    char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c)
}

/// Convert full-width Latin letters, digits and [`FULL_WIDTH_SIGNS`] to half-width.
///
/// Everything else, including full-width katakana and CJK punctuation, passes through.
pub fn to_half_width(text: &str) -> String {
    text.chars().map(to_half_width_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_half_width() {
        assert_eq!(to_half_width("ＡＢＣａｂｃ０１２！＃＄"), "ABCabc012!#$");
        assert_eq!(to_half_width("Ｚｚ９"), "Zz9");
        assert_eq!(to_half_width("（カッコ）＿［］｛｜｝"), "(カッコ)_[]{|}");
    }

    #[test]
    fn test_ascii_is_fixed_point() {
        assert_eq!(to_half_width("Hello World"), "Hello World");
        assert_eq!(to_half_width("a-b_c (1/2)"), "a-b_c (1/2)");
        assert_eq!(to_half_width(""), "");
    }

    #[test]
    fn test_japanese_passes_through() {
        assert_eq!(to_half_width("あいうアイウ漢字。、「」"), "あいうアイウ漢字。、「」");
        // Full-width space and unlisted signs are not folded
        assert_eq!(to_half_width("　＂＇～"), "　＂＇～");
    }

    #[test]
    fn test_minus_signs() {
        assert_eq!(to_half_width_char('－'), '-');
        assert_eq!(to_half_width_char('−'), '-');
    }

    #[test]
    fn test_every_sign_lands_in_ascii() {
        for sign in FULL_WIDTH_SIGNS {
            let folded = to_half_width_char(sign);
            assert!(folded.is_ascii_punctuation(), "{sign} -> {folded}");
        }
    }

    #[test]
    fn test_absent_input_stays_absent() {
        let absent: Option<&str> = None;
        assert_eq!(absent.map(to_half_width), None);
        assert_eq!(Some("１").map(to_half_width).as_deref(), Some("1"));
    }
}
