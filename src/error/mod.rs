//! Error handling for the importscan application
//!
//! This module provides the error handling system for the scanner,
//! including error types, result aliases, and error context utilities.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt};
pub use types::{ErrorSeverity, Result, ScanError};
