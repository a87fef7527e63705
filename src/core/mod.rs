//! Core functionality for directory walking and import extraction

pub mod extractor;
pub mod walker;

pub use extractor::{extract_file, FileKind, SourceLine};
pub use walker::Walker;
