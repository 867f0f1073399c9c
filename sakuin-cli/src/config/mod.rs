//! Configuration for the sakuin command-line tool.

pub mod settings;

pub use settings::{BatchSettings, OutputSettings, Settings, VariantSettings};
