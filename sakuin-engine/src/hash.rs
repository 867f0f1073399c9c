//! 64-bit content hash of normalized text.
//!
//! Not a cryptographic hash: CRC32 and Adler-32 of the normalized UTF-8
//! bytes are packed together to fingerprint text for deduplication.

use adler2::Adler32;

use crate::normalize::normalize_with;
use crate::variant::{VariantMap, variant_map};

/// Hash `text` after normalizing it with the embedded variant table.
///
/// Texts with the same normalized form always hash equal.
pub fn hash(text: &str) -> u64 {
    hash_with(text, variant_map())
}

/// Hash `text` after normalizing it with `variants`.
pub fn hash_with(text: &str, variants: &VariantMap) -> u64 {
    checksum(normalize_with(text, variants).as_bytes())
}

/// CRC32 in the high 32 bits, Adler-32 in the low 32 bits.
///
/// Each call owns its checksum state, so this is safe to call from any thread.
pub fn checksum(bytes: &[u8]) -> u64 {
    let mut crc = crc32fast::Hasher::new();
    crc.update(bytes);
    let mut adler = Adler32::new();
    adler.write_slice(bytes);
    (u64::from(crc.finalize()) << 32) | u64::from(adler.checksum())
}
