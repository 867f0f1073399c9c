//! Kanji numerals: parsing into decimal and formatting small integers.

/// Errors that can occur while parsing kanji numerals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KansujiError {
    #[error("kanji numeral is empty")]
    Empty,

    #[error("invalid kanji numeral character: '{0}'")]
    InvalidCharacter(char),

    #[error("kanji numeral is too large")]
    Overflow,
}

type Result<T> = std::result::Result<T, KansujiError>;

const TEN_THOUSAND: u64 = 10_000;
const HUNDRED_MILLION: u64 = 100_000_000;

fn digit_value(c: char) -> Option<u64> {
    let value = match c {
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    };
    Some(value)
}

/// Parse a positive kanji numeral such as `百二十三` into its value.
///
/// Digits `一`..`九` set the pending digit (a later digit replaces an
/// earlier unconsumed one). `十`/`百`/`千` multiply the pending digit, or 1
/// if none, into the group below 万. `万`/`億` close that group and scale
/// it into the total. `零` on its own is zero.
///
/// `〇` on its own is also accepted as zero because it is what
/// [`to_kanji`] produces for 0. Inside a longer numeral it is invalid.
pub fn parse_kansuji(text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(KansujiError::Empty);
    }
    if text == "零" || text == "〇" {
        return Ok(0);
    }

    // 1 stands for the implied digit before a leading multiplier; 0 means nothing pending
    let mut digit: u64 = 1;
    let mut group: u64 = 0;
    let mut total: u64 = 0;
    for c in text.chars() {
        if let Some(value) = digit_value(c) {
            digit = value;
            continue;
        }
        match c {
            '十' | '百' | '千' => {
                let unit = match c {
                    '十' => 10,
                    '百' => 100,
                    _ => 1_000,
                };
                group = checked_add(group, checked_mul(digit.max(1), unit)?)?;
                digit = 0;
            }
            '万' | '億' => {
                let unit = if c == '万' { TEN_THOUSAND } else { HUNDRED_MILLION };
                group = checked_add(group, digit)?;
                total = checked_add(total, checked_mul(group.max(1), unit)?)?;
                group = 0;
                digit = 0;
            }
            _ => return Err(KansujiError::InvalidCharacter(c)),
        }
    }
    checked_add(checked_add(total, group)?, digit)
}

fn checked_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(KansujiError::Overflow)
}

fn checked_mul(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(KansujiError::Overflow)
}

/// Convert a kanji numeral to a decimal digit string (`百二十三` → `"123"`).
pub fn convert_kansuji(text: &str) -> Result<String> {
    parse_kansuji(text).map(|value| value.to_string())
}

/// Format 0..=100 as kanji numerals (`34` → `三十四`).
///
/// Returns `None` for values outside that range.
pub fn to_kanji(n: i32) -> Option<String> {
    match n {
        0 => Some("〇".to_string()),
        1..=10 => Some(kanji_digit(n).to_string()),
        11..=99 => {
            let (tens, ones) = (n / 10, n % 10);
            let mut out = String::new();
            if tens > 1 {
                out.push_str(kanji_digit(tens));
            }
            out.push('十');
            if ones > 0 {
                out.push_str(kanji_digit(ones));
            }
            Some(out)
        }
        100 => Some("百".to_string()),
        _ => None,
    }
}

/// Single kanji glyph for 1..=10, or `""` for anything else.
pub fn kanji_digit(n: i32) -> &'static str {
    match n {
        1 => "一",
        2 => "二",
        3 => "三",
        4 => "四",
        5 => "五",
        6 => "六",
        7 => "七",
        8 => "八",
        9 => "九",
        10 => "十",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_kansuji() {
        assert_eq!(convert_kansuji("一").unwrap(), "1");
        assert_eq!(convert_kansuji("十").unwrap(), "10");
        assert_eq!(convert_kansuji("十一").unwrap(), "11");
        assert_eq!(convert_kansuji("二十一").unwrap(), "21");
        assert_eq!(convert_kansuji("百").unwrap(), "100");
        assert_eq!(convert_kansuji("百二十三").unwrap(), "123");
        assert_eq!(convert_kansuji("千").unwrap(), "1000");
        assert_eq!(convert_kansuji("一万").unwrap(), "10000");
        assert_eq!(convert_kansuji("一億").unwrap(), "100000000");
        assert_eq!(convert_kansuji("零").unwrap(), "0");
    }

    #[test]
    fn test_zero_forms() {
        assert_eq!(parse_kansuji("零"), Ok(0));
        assert_eq!(parse_kansuji("〇"), Ok(0));
        assert_eq!(to_kanji(0).as_deref().map(parse_kansuji), Some(Ok(0)));
        assert_eq!(parse_kansuji("十〇"), Err(KansujiError::InvalidCharacter('〇')));
    }

    #[test]
    fn test_compound_numbers() {
        assert_eq!(parse_kansuji("二千二十四"), Ok(2024));
        assert_eq!(parse_kansuji("三千五百万"), Ok(35_000_000));
        assert_eq!(parse_kansuji("十万"), Ok(100_000));
        assert_eq!(parse_kansuji("万"), Ok(10_000));
        assert_eq!(parse_kansuji("一億二千万"), Ok(120_000_000));
        assert_eq!(parse_kansuji("五億六万七"), Ok(500_060_007));
    }

    #[test]
    fn test_later_digit_replaces_pending_digit() {
        assert_eq!(parse_kansuji("一二"), Ok(2));
        assert_eq!(parse_kansuji("三四十"), Ok(40));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_kansuji(""), Err(KansujiError::Empty));
        let absent: Option<&str> = None;
        assert_eq!(
            convert_kansuji(absent.unwrap_or_default()),
            Err(KansujiError::Empty)
        );
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(parse_kansuji("百a"), Err(KansujiError::InvalidCharacter('a')));
        assert_eq!(parse_kansuji("二零"), Err(KansujiError::InvalidCharacter('零')));
        assert_eq!(
            KansujiError::InvalidCharacter('x').to_string(),
            "invalid kanji numeral character: 'x'"
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(checked_add(u64::MAX, 1), Err(KansujiError::Overflow));
        assert_eq!(checked_mul(u64::MAX, 10), Err(KansujiError::Overflow));
        assert_eq!(checked_mul(9_999, HUNDRED_MILLION), Ok(999_900_000_000));
    }

    #[test]
    fn test_to_kanji() {
        assert_eq!(to_kanji(0).as_deref(), Some("〇"));
        assert_eq!(to_kanji(1).as_deref(), Some("一"));
        assert_eq!(to_kanji(10).as_deref(), Some("十"));
        assert_eq!(to_kanji(11).as_deref(), Some("十一"));
        assert_eq!(to_kanji(20).as_deref(), Some("二十"));
        assert_eq!(to_kanji(34).as_deref(), Some("三十四"));
        assert_eq!(to_kanji(99).as_deref(), Some("九十九"));
        assert_eq!(to_kanji(100).as_deref(), Some("百"));
        assert_eq!(to_kanji(101), None);
        assert_eq!(to_kanji(-1), None);
    }

    #[test]
    fn test_kanji_digit() {
        assert_eq!(kanji_digit(1), "一");
        assert_eq!(kanji_digit(10), "十");
        assert_eq!(kanji_digit(0), "");
        assert_eq!(kanji_digit(11), "");
    }
}
