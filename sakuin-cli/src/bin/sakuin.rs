//! sakuin: normalize Japanese text for search indexes from the command line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use sakuin_cli::{BatchFormat, Settings, inspect, process_lines, write_records};
use sakuin_engine::{
    VariantMap, convert_kansuji, full_trim, hash_with, normalize_with, to_half_width, to_kanji,
    to_ngram, to_zenkaku_katakana, variant_map,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// sakuin — Japanese text normalization for search indexes.
#[derive(Parser, Debug)]
#[command(name = "sakuin")]
#[command(about = "Japanese text normalization for search indexes")]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical normalized form (kana, variants, spaces, half-width katakana).
    Normalize { text: String },

    /// Fold full-width Latin letters, digits and signs to half-width.
    HalfWidth { text: String },

    /// Trim both ends, including ideographic and no-break spaces.
    Trim { text: String },

    /// Convert half-width katakana to full-width, composing voicing marks.
    Katakana { text: String },

    /// Split text into space-separated characters for n-gram indexing.
    Ngram { text: String },

    /// Print the 64-bit content hash of the normalized text as hex.
    Hash { text: String },

    /// Convert a kanji numeral (e.g. 百二十三) to decimal.
    Kansuji { text: String },

    /// Format an integer from 0 to 100 as kanji numerals.
    Kanji {
        #[arg(allow_negative_numbers = true)]
        number: i32,
    },

    /// Print every transform of the text as JSON.
    Inspect { text: String },

    /// Normalize and hash one text per line in parallel.
    Batch {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<BatchFormat>,

        /// Number of worker threads (overrides the config file)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default: info level, with --verbose: debug level
    let default_filter = if cli.verbose {
        "sakuin=debug,sakuin_cli=debug,sakuin_engine=debug"
    } else {
        "sakuin=info,sakuin_cli=info,sakuin_engine=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let custom_variants = settings.load_variants()?;
    let variants = custom_variants.as_ref().unwrap_or_else(|| variant_map());

    match cli.command {
        Commands::Normalize { text } => println!("{}", normalize_with(&text, variants)),
        Commands::HalfWidth { text } => println!("{}", to_half_width(&text)),
        Commands::Trim { text } => println!("{}", full_trim(&text)),
        Commands::Katakana { text } => println!("{}", to_zenkaku_katakana(&text)),
        Commands::Ngram { text } => println!("{}", to_ngram(&text)),
        Commands::Hash { text } => println!("{:016x}", hash_with(&text, variants)),
        Commands::Kansuji { text } => {
            let value = convert_kansuji(&text)
                .with_context(|| format!("Failed to parse kanji numeral '{text}'"))?;
            println!("{value}");
        }
        Commands::Kanji { number } => match to_kanji(number) {
            Some(kanji) => println!("{kanji}"),
            None => bail!("{number} is outside the supported range 0..=100"),
        },
        Commands::Inspect { text } => {
            println!("{}", inspect(&text, variants).to_json(settings.output.pretty)?);
        }
        Commands::Batch {
            input,
            output,
            format,
            threads,
        } => {
            let format = format.unwrap_or(settings.batch.format);
            let threads = threads.unwrap_or_else(|| settings.batch.worker_threads());
            run_batch(
                input,
                output,
                format,
                threads,
                settings.batch.progress,
                variants,
            )?;
        }
        Commands::Config => print!("{}", toml::to_string_pretty(&settings)?),
    }
    Ok(())
}

fn run_batch(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: BatchFormat,
    threads: usize,
    progress: bool,
    variants: &VariantMap,
) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok(); // ignore error if already initialized

    let lines = match &input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            read_lines(BufReader::new(file))
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => read_lines(io::stdin().lock()).context("Failed to read stdin")?,
    };
    tracing::info!("Processing {} lines (threads={})", lines.len(), threads);

    let pb = if progress {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let records = process_lines(&lines, variants, pb.as_ref());
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_records(&records, format, BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => write_records(&records, format, BufWriter::new(io::stdout().lock()))?,
    }
    Ok(())
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
