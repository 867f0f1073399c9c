//! sakuin-cli: command-line access to sakuin-engine.
//!
//! The binary lives in `src/bin/sakuin.rs`; configuration, batch
//! processing and inspection are kept here so they can be tested without spawning it.

pub mod batch;
pub mod config;
pub mod inspect;

pub use batch::{BatchFormat, BatchRecord, process_lines, write_records};
pub use config::Settings;
pub use inspect::{Inspection, inspect};
