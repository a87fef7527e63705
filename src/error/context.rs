//! Error context utilities
//!
//! This module provides utilities for adding context to errors and handling
//! errors in a consistent way throughout the application.

use crate::error::{Result, ScanError};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| ScanError::Scan {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error message
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ScanError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ScanError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_with_context() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        let with_context = result.with_context(|| "Failed to read config");
        assert!(with_context.is_err());

        if let Err(ScanError::Scan { message }) = with_context {
            assert!(message.contains("Failed to read config"));
            assert!(message.contains("file not found"));
        } else {
            panic!("Expected Scan error");
        }
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let result = none.ok_or_error(|| ScanError::config_error("Missing value"));

        assert!(result.is_err());
        if let Err(ScanError::Config { message }) = result {
            assert_eq!(message, "Missing value");
        } else {
            panic!("Expected Config error");
        }

        let some = Some(42);
        let result = some.ok_or_error(|| ScanError::config_error("Missing value"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }
}
