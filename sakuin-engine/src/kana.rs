//! Kana conversions: hiragana to katakana, half-width to full-width katakana,
//! and composition of half-width voicing marks.

/// Half-width katakana block U+FF61..=U+FF9F, in codepoint order.
pub const HALF_WIDTH_KATAKANA: [char; 63] = [
    '｡', '｢', '｣', '､', '･', 'ｦ', 'ｧ', 'ｨ', 'ｩ', 'ｪ', 'ｫ', 'ｬ', 'ｭ', 'ｮ', 'ｯ', 'ｰ', 'ｱ', 'ｲ', 'ｳ',
    'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ', 'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ',
    'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ', 'ﾓ', 'ﾔ', 'ﾕ', 'ﾖ', 'ﾗ', 'ﾘ', 'ﾙ',
    'ﾚ', 'ﾛ', 'ﾜ', 'ﾝ', 'ﾞ', 'ﾟ',
];

/// Full-width counterparts of [`HALF_WIDTH_KATAKANA`], index-aligned.
pub const FULL_WIDTH_KATAKANA: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー', 'ア', 'イ', 'ウ',
    'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ',
    'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル',
    'レ', 'ロ', 'ワ', 'ン', '゛', '゜',
];

const _: () = assert!(HALF_WIDTH_KATAKANA.len() == FULL_WIDTH_KATAKANA.len());

const HALF_WIDTH_FIRST: char = HALF_WIDTH_KATAKANA[0];
const HALF_WIDTH_LAST: char = HALF_WIDTH_KATAKANA[HALF_WIDTH_KATAKANA.len() - 1];

/// Half-width voiced sound mark (dakuten).
pub const HALF_WIDTH_VOICED_MARK: char = '\u{ff9e}';
/// Half-width semi-voiced sound mark (handakuten).
pub const HALF_WIDTH_SEMI_VOICED_MARK: char = '\u{ff9f}';

/// Half-width bases that take a voiced sound mark.
const VOICEABLE: [char; 21] = [
    'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ', 'ﾃ', 'ﾄ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ',
    'ｳ',
];
/// Voiced full-width katakana for each entry of `VOICEABLE`.
const VOICED: [char; 21] = [
    'ガ', 'ギ', 'グ', 'ゲ', 'ゴ', 'ザ', 'ジ', 'ズ', 'ゼ', 'ゾ', 'ダ', 'ヂ', 'ヅ', 'デ', 'ド', 'バ', 'ビ', 'ブ', 'ベ', 'ボ',
    'ヴ',
];

/// Half-width h-row bases that take a semi-voiced sound mark.
const SEMI_VOICEABLE: [char; 5] = ['ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ'];
/// Semi-voiced full-width katakana for each entry of `SEMI_VOICEABLE`.
const SEMI_VOICED: [char; 5] = ['パ', 'ピ', 'プ', 'ペ', 'ポ'];

/// Shift a hiragana character (U+3041..=U+3093, `ぁ`..=`ん`) to katakana.
pub fn hiragana_to_katakana_char(c: char) -> char {
    match c {
        'ぁ'..='ん' => std::char::from_u32(c as u32 - 'ぁ' as u32 + 'ァ' as u32).unwrap_or(c),
        _ => c,
    }
}

/// Convert hiragana to katakana
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars().map(hiragana_to_katakana_char).collect()
}

/// Convert one half-width katakana character to full-width.
///
/// Voicing marks become the standalone `゛`/`゜`; anything outside the
/// half-width katakana block passes through.
pub fn to_zenkaku_katakana_char(c: char) -> char {
    if (HALF_WIDTH_FIRST..=HALF_WIDTH_LAST).contains(&c) {
        FULL_WIDTH_KATAKANA[(c as u32 - HALF_WIDTH_FIRST as u32) as usize]
    } else {
        c
    }
}

/// Compose a half-width base and a following voicing mark into one full-width character.
fn compose(base: char, mark: char) -> Option<char> {
    let (bases, composed) = match mark {
        HALF_WIDTH_VOICED_MARK => (&VOICEABLE[..], &VOICED[..]),
        HALF_WIDTH_SEMI_VOICED_MARK => (&SEMI_VOICEABLE[..], &SEMI_VOICED[..]),
        _ => return None,
    };
    bases
        .iter()
        .position(|&b| b == base)
        .map(|i| composed[i])
}

/// Merge `c1` with a following voicing mark `c2`.
///
/// Returns the composed full-width character (`ｶ` + `ﾞ` → `ガ`,
/// `ﾊ` + `ﾟ` → `パ`), or `c1` unchanged when the pair does not compose.
pub fn merge_katakana(c1: char, c2: char) -> char {
    compose(c1, c2).unwrap_or(c1)
}

/// Convert half-width katakana in `text` to full-width, composing voicing marks.
pub fn to_zenkaku_katakana(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(composed) = chars.peek().and_then(|&next| compose(c, next)) {
            out.push(composed);
            chars.next();
            continue;
        }
        out.push(to_zenkaku_katakana_char(c));
    }
    out
}
