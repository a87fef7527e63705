//! Parsing and classification functionality
//!
//! This module provides the line-level import matcher, the notebook document
//! model, and the standard-library classifier with its bundled reference
//! table.

pub mod classifier;
pub mod line_matcher;
pub mod notebook;
pub mod stdlib;

pub use classifier::{Classification, Classifier};
pub use line_matcher::{match_line, LineMatch};
pub use notebook::{Notebook, NotebookCell};
