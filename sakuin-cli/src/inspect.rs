//! Side-by-side view of every transform applied to one text.

use sakuin_engine::{
    VariantMap, checksum, full_trim, normalize_with, to_half_width, to_ngram,
    to_zenkaku_katakana,
};
use serde::Serialize;

/// Every transform applied to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection<'a> {
    pub input: &'a str,
    pub half_width: String,
    pub full_trim: &'a str,
    pub katakana: String,
    pub normalized: String,
    pub ngram: String,
    /// Content hash as 16 lowercase hex digits
    pub hash: String,
}

/// Apply every transform to `text`, normalizing with `variants`.
pub fn inspect<'a>(text: &'a str, variants: &VariantMap) -> Inspection<'a> {
    let normalized = normalize_with(text, variants);
    Inspection {
        input: text,
        half_width: to_half_width(text),
        full_trim: full_trim(text),
        katakana: to_zenkaku_katakana(text),
        ngram: to_ngram(text),
        hash: format!("{:016x}", checksum(normalized.as_bytes())),
        normalized,
    }
}

impl Inspection<'_> {
    /// Render as JSON, pretty-printed when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
