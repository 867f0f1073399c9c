//! Parallel normalization and hashing of line-oriented input.

use std::borrow::Cow;
use std::io::Write;

use anyhow::Result;
use indicatif::ProgressBar;
use rayon::prelude::*;
use sakuin_engine::{VariantMap, checksum, normalize_with};
use serde::{Deserialize, Serialize, Serializer};

/// Output format for batch results
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BatchFormat {
    /// `hash\tnormalized\toriginal`, one record per line
    #[default]
    Tsv,
    /// One JSON object per line
    Jsonl,
}

/// Normalized form and hash of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    #[serde(serialize_with = "serialize_hex")]
    pub hash: u64,
    pub normalized: String,
    pub original: String,
}

fn serialize_hex<S: Serializer>(
    hash: &u64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{hash:016x}"))
}

/// Normalize and hash every line in parallel, preserving input order.
pub fn process_lines(
    lines: &[String],
    variants: &VariantMap,
    progress: Option<&ProgressBar>,
) -> Vec<BatchRecord> {
    lines
        .par_iter()
        .map(|line| {
            let normalized = normalize_with(line, variants);
            let record = BatchRecord {
                hash: checksum(normalized.as_bytes()),
                normalized,
                original: line.clone(),
            };
            if let Some(pb) = progress {
                pb.inc(1);
            }
            record
        })
        .collect()
}

/// Escape a TSV field so it stays a single column on a single line.
///
/// Backslash, tab, carriage return and line feed become `\\`, `\t`, `\r` and `\n`.
fn escape_tsv(field: &str) -> Cow<'_, str> {
    if !field.contains(['\\', '\t', '\r', '\n']) {
        return Cow::Borrowed(field);
    }
    let mut out = String::with_capacity(field.len() + 2);
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Write records in the requested format.
///
/// TSV rows are `hash\tnormalized\toriginal`. Backslashes and control
/// whitespace in the text columns are escaped, so each record is one row.
pub fn write_records(
    records: &[BatchRecord],
    format: BatchFormat,
    mut writer: impl Write,
) -> Result<()> {
    for record in records {
        match format {
            BatchFormat::Tsv => writeln!(
                writer,
                "{:016x}\t{}\t{}",
                record.hash,
                escape_tsv(&record.normalized),
                escape_tsv(&record.original)
            )?,
            BatchFormat::Jsonl => {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
