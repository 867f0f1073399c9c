//! Variant character table.
//!
//! Orthographic variants (mostly name kanji such as `﨑`/`崎`) are folded to a
//! canonical character by [`normalize`](crate::normalize()). The table is line oriented:
//! the first character on a line is canonical and each following character
//! maps to it. The default table is embedded from `data/variants.txt` and
//! parsed once on first use.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, trace, warn};

/// Embedded default variant table.
const DEFAULT_VARIANTS: &str = include_str!("../data/variants.txt");

/// Errors that can occur while loading an external variant table.
#[derive(Debug, thiserror::Error)]
pub enum VariantError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("variant table '{source_name}' contains no mappings")]
    Empty { source_name: String },
}

type Result<T> = std::result::Result<T, VariantError>;

/// Read-only mapping from a variant character to its canonical form.
#[derive(Debug, Clone, Default)]
pub struct VariantMap {
    map: HashMap<char, char>,
}

impl VariantMap {
    /// Parse a variant table from text.
    ///
    /// Blank lines and `#` comments are ignored, as are lines containing
    /// characters outside the Basic Multilingual Plane.
    pub fn parse(source: &str) -> Self {
        let mut variants = Self::default();
        for (line_no, line) in source.lines().enumerate() {
            variants.insert_line(line_no + 1, line);
        }
        debug!("Parsed variant table with {} mappings", variants.len());
        variants
    }

    /// Read a variant table from any buffered reader.
    ///
    /// Fails on I/O errors and when the table yields no mappings at all.
    pub fn from_reader(reader: impl BufRead, source_name: &str) -> Result<Self> {
        let mut variants = Self::default();
        for (line_no, line) in reader.lines().enumerate() {
            variants.insert_line(line_no + 1, &line?);
        }
        if variants.is_empty() {
            warn!("Variant table '{}' has no usable lines", source_name);
            return Err(VariantError::Empty {
                source_name: source_name.to_string(),
            });
        }
        debug!(
            "Loaded variant table '{}' with {} mappings",
            source_name,
            variants.len()
        );
        Ok(variants)
    }

    /// Load a variant table from a UTF-8 file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    fn insert_line(&mut self, line_no: usize, line: &str) {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        if line.chars().any(|c| c as u32 > 0xffff) {
            trace!("Skipping variant line {}: supplementary-plane character", line_no);
            return;
        }
        let mut chars = line.chars();
        let Some(canonical) = chars.next() else {
            return;
        };
        for variant in chars {
            self.map.insert(variant, canonical);
        }
    }

    /// Canonical form of `c`, if `c` is a known variant.
    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    /// Canonical form of `c`, or `c` itself when it has none.
    pub fn canonical(&self, c: char) -> char {
        self.get(c).unwrap_or(c)
    }

    /// Number of variant characters in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

static VARIANTS: OnceLock<VariantMap> = OnceLock::new();

/// Return the process-wide variant table, parsed once from the embedded `data/variants.txt`.
pub fn variant_map() -> &'static VariantMap {
    VARIANTS.get_or_init(|| VariantMap::parse(DEFAULT_VARIANTS))
}
