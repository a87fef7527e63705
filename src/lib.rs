//! importscan - a static Python import scanner
//!
//! This library walks a source tree, extracts imported packages, raw import
//! statements, and fully-qualified imported names from `.py` files and
//! `.ipynb` notebooks, classifies packages as standard-library or custom,
//! and writes per-file and aggregate reports in text, CSV, and Markdown.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use error::{ErrorSeverity, OptionExt, Result, ResultExt, ScanError};
pub use models::{FileExtraction, ScanResults, ScanSummary};
pub use parsers::{Classification, Classifier};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
