//! Error types and definitions for importscan
//!
//! This module provides the error handling system for the scanner, including
//! the error enum, severity levels, and a result alias.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for scanner operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Invalid scan root
    #[error("Invalid path: {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// Permission denied errors
    #[error("Permission denied accessing {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// A source file could not be read
    #[error("Error reading {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A notebook document could not be parsed as JSON
    #[error("Malformed notebook {}: {}", .path.display(), .source)]
    NotebookParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The standard-library reference list could not be read
    #[error("Error reading standard-library list {}: {}", .path.display(), .source)]
    StdlibListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The standard-library reference list contained no module names
    #[error("Standard-library list {} contains no module names", .path.display())]
    StdlibListEmpty { path: PathBuf },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Report artifact write errors
    #[error("Error writing report {}: {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Scan errors that don't fit a more specific variant
    #[error("Scan error: {message}")]
    Scan { message: String },
}

impl ScanError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level - the file or artifact is skipped, the walk continues
            ScanError::FileRead { .. } => ErrorSeverity::Warning,
            ScanError::NotebookParse { .. } => ErrorSeverity::Warning,
            ScanError::OutputWrite { .. } => ErrorSeverity::Warning,
            ScanError::Csv { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            ScanError::InvalidPath { .. } => ErrorSeverity::Critical,
            ScanError::Config { .. } => ErrorSeverity::Critical,
            ScanError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ScanError::ConfigRead { .. } => ErrorSeverity::Critical,
            ScanError::ConfigParse { .. } => ErrorSeverity::Critical,
            ScanError::GlobPattern { .. } => ErrorSeverity::Critical,
            ScanError::StdlibListRead { .. } => ErrorSeverity::Critical,
            ScanError::StdlibListEmpty { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ScanError::PermissionDenied { path } => {
                format!(
                    "Cannot access '{}' due to permission denied. Check file permissions.",
                    path.display()
                )
            }
            ScanError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            ScanError::NotebookParse { path, source } => {
                format!(
                    "Invalid notebook JSON in '{}': {}. The file was skipped.",
                    path.display(),
                    source
                )
            }
            ScanError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create one with --init or use command line options.",
                    path.display()
                )
            }
            ScanError::StdlibListRead { path, source } => {
                format!(
                    "Cannot load standard-library list from '{}': {}. Classification is unavailable.",
                    path.display(),
                    source
                )
            }
            ScanError::StdlibListEmpty { path } => {
                format!(
                    "Standard-library list '{}' is empty. Classification is unavailable.",
                    path.display()
                )
            }
            ScanError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ScanError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ScanError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        ScanError::PermissionDenied { path: path.into() }
    }

    /// Create a per-file read error
    pub fn file_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a notebook parse error
    pub fn notebook_parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ScanError::NotebookParse {
            path: path.into(),
            source,
        }
    }

    /// Create an artifact write error
    pub fn output_write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a generic scan error
    pub fn scan_error(message: impl Into<String>) -> Self {
        ScanError::Scan {
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::io_error(err)
    }
}

impl From<csv::Error> for ScanError {
    fn from(err: csv::Error) -> Self {
        ScanError::Csv { source: err }
    }
}

impl From<glob::PatternError> for ScanError {
    fn from(err: glob::PatternError) -> Self {
        ScanError::GlobPattern { source: err }
    }
}

/// Result type alias for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
