//! Japanese text normalization for search indexes.
//!
//! Pure string transforms shared by indexing and query code: width folding,
//! kana unification, variant kanji folding, kanji numerals, a compact content
//! hash of normalized text, and n-gram splitting.

pub mod hash;
pub mod kana;
pub mod kansuji;
pub mod ngram;
pub mod normalize;
pub mod trim;
pub mod variant;
pub mod width;

pub use hash::{checksum, hash, hash_with};
pub use kana::{
    hiragana_to_katakana, merge_katakana, to_zenkaku_katakana, to_zenkaku_katakana_char,
};
pub use kansuji::{KansujiError, convert_kansuji, kanji_digit, parse_kansuji, to_kanji};
pub use ngram::to_ngram;
pub use normalize::{normalize, normalize_with};
pub use trim::{full_trim, trim_to_empty};
pub use variant::{VariantError, VariantMap, variant_map};
pub use width::to_half_width;
