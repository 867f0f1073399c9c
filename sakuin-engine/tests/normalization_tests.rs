//! Integration tests for the public normalization surface.

use sakuin_engine::{
    convert_kansuji, full_trim, hash, normalize, parse_kansuji, to_half_width, to_kanji,
    to_ngram, to_zenkaku_katakana, trim_to_empty,
};

// ============================================================================
// Sample corpus
// ============================================================================

const SAMPLES: &[&str] = &[
    "",
    "前島",
    "坂﨑 ともゑ",
    "坂﨑 ﾏﾛｶ",
    "ｶﾞｷﾞｸﾞｹﾞｺﾞ",
    "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ",
    "ｳﾞｧｲｵﾘﾝ",
    "ｱﾞｲ",
    "髙橋\u{3000}はなこ",
    "渡邉 澤子\t",
    "ＡＢＣ　１２３",
    "（株）ｻﾝﾌﾟﾙ",
    "ゐゑをん",
    "ﾞﾟ",
    "\u{a0}no-break\u{a0}",
];

// ============================================================================
// Width and trimming
// ============================================================================

#[test]
fn test_half_width_folding() {
    assert_eq!(to_half_width("ＡＢＣａｂｃ０１２！＃＄"), "ABCabc012!#$");
    assert_eq!(to_half_width("Hello World"), "Hello World");
}

#[test]
fn test_trimming() {
    assert_eq!(trim_to_empty(None), "");
    assert_eq!(trim_to_empty(Some("   ")), "");
    assert_eq!(trim_to_empty(Some("  abc  ")), "abc");

    let absent: Option<&str> = None;
    assert_eq!(absent.map(full_trim), None);
    assert_eq!(full_trim("\u{a0}abc\u{a0}"), "abc");
    assert_eq!(full_trim("\u{3000}\u{3000}\u{3000}"), "");
}

// ============================================================================
// Normalization and hashing
// ============================================================================

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("坂﨑 ともゑ"), "坂崎トモエ");
    assert_eq!(normalize("坂﨑 ﾏﾛｶ"), "坂崎マロカ");
    assert_eq!(normalize("前島"), "前島");
    assert_eq!(normalize("渡邉 澤子\t"), "渡辺沢子");
}

#[test]
fn test_normalize_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "sample {sample:?}");
    }
}

#[test]
fn test_normalized_text_has_no_removable_space_or_hiragana() {
    for sample in SAMPLES {
        let normalized = normalize(sample);
        assert!(!normalized.contains([' ', '\t', '\u{3000}']), "{normalized:?}");
        assert!(
            !normalized.chars().any(|c| ('ぁ'..='ん').contains(&c)),
            "{normalized:?}"
        );
    }
}

#[test]
fn test_hash_follows_normal_form() {
    assert_eq!(hash("坂﨑 ともゑ"), hash("坂崎トモヱ"));
    for sample in SAMPLES {
        assert_eq!(hash(sample), hash(&normalize(sample)), "sample {sample:?}");
    }
}

// ============================================================================
// Katakana
// ============================================================================

#[test]
fn test_katakana_composition() {
    assert_eq!(to_zenkaku_katakana("\u{ff71}\u{ff72}\u{ff73}\u{ff74}\u{ff75}"), "アイウエオ");
    assert_eq!(
        to_zenkaku_katakana("\u{ff76}\u{ff9e}\u{ff77}\u{ff9e}\u{ff78}\u{ff9e}\u{ff79}\u{ff9e}\u{ff7a}\u{ff9e}"),
        "ガギグゲゴ"
    );
    assert_eq!(
        to_zenkaku_katakana("\u{ff8a}\u{ff9f}\u{ff8b}\u{ff9f}\u{ff8c}\u{ff9f}\u{ff8d}\u{ff9f}\u{ff8e}\u{ff9f}"),
        "パピプペポ"
    );
    assert_eq!(to_zenkaku_katakana("ｻｼｽｾｿ"), "サシスセソ");
}

// ============================================================================
// Kanji numerals
// ============================================================================

#[test]
fn test_kansuji_examples() {
    let cases = [
        ("一", "1"),
        ("十", "10"),
        ("十一", "11"),
        ("二十一", "21"),
        ("百", "100"),
        ("百二十三", "123"),
        ("千", "1000"),
        ("一万", "10000"),
        ("一億", "100000000"),
        ("零", "0"),
    ];
    for (kanji, expected) in cases {
        assert_eq!(convert_kansuji(kanji).unwrap(), expected, "{kanji}");
    }
}

#[test]
fn test_kanji_round_trip() {
    for n in 0..=100 {
        let kanji = to_kanji(n).unwrap_or_else(|| panic!("{n} should be formattable"));
        assert_eq!(parse_kansuji(&kanji), Ok(n as u64), "{n} -> {kanji}");
    }
    assert_eq!(to_kanji(34).as_deref(), Some("三十四"));
    assert_eq!(to_kanji(101), None);
    assert_eq!(to_kanji(-1), None);
}

// ============================================================================
// N-gram
// ============================================================================

#[test]
fn test_ngram_examples() {
    assert_eq!(to_ngram("あいう"), "あ い う");
    assert_eq!(to_ngram("（あい）"), "（ あ い ）");
}

#[test]
fn test_ngram_of_normalized_name() {
    assert_eq!(to_ngram(&normalize("坂﨑 ともゑ")), "坂 崎 ト モ エ");
}
