//! Extraction result structures

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// Everything extracted from a single source file.
///
/// The three sets are semantically unordered; `BTreeSet` keeps iteration in
/// sorted lexical order so every serialization of a result is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileExtraction {
    /// Path of the scanned file, as walked from the scan root. Unique per run.
    pub path: PathBuf,
    /// Bare package roots and `name==version` pins
    pub packages: BTreeSet<String>,
    /// Verbatim, whitespace-trimmed import statements
    pub imports: BTreeSet<String>,
    /// Fully-qualified imported names: `root.symbol`, `root`, or `root as alias`
    pub imported_names: BTreeSet<String>,
}

impl FileExtraction {
    /// Create an empty extraction for the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// True when no rule matched anywhere in the file
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.imports.is_empty() && self.imported_names.is_empty()
    }

    /// The directory-name-plus-stem base used to name sibling report artifacts
    pub fn artifact_base_name(&self) -> String {
        let parent = self
            .path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}-{}", parent, stem)
    }
}

/// A non-fatal error recorded against a path during the scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub message: String,
    pub severity: String,
}

impl ScanIssue {
    pub fn from_error(path: PathBuf, error: &ScanError) -> Self {
        Self {
            path,
            message: error.user_message(),
            severity: error.severity().to_string(),
        }
    }
}

/// Accumulated statistics for one full tree walk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Source files read (plain and notebook), whether or not they matched
    pub files_scanned: usize,
    /// Files that yielded at least one non-empty set
    pub files_matched: usize,
    /// Sum of per-file package set sizes
    pub total_packages: usize,
    /// Sum of per-file import statement set sizes
    pub total_imports: usize,
    /// Sum of per-file imported name set sizes
    pub total_imported_names: usize,
    /// Non-fatal errors encountered during the walk
    pub errors_encountered: usize,
    #[serde(skip)]
    pub scan_duration: Duration,
}

/// The aggregate: every per-file extraction collected by one tree walk.
///
/// Append-only during the walk, read-only during report emission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResults {
    pub files: Vec<FileExtraction>,
    pub summary: ScanSummary,
    pub issues: Vec<ScanIssue>,
}

impl ScanResults {
    /// Create a new empty ScanResults instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file extraction. Empty extractions only bump the scanned count;
    /// they never enter the aggregate.
    pub fn add_file(&mut self, extraction: FileExtraction) {
        self.summary.files_scanned += 1;

        if extraction.is_empty() {
            return;
        }

        self.summary.files_matched += 1;
        self.summary.total_packages += extraction.packages.len();
        self.summary.total_imports += extraction.imports.len();
        self.summary.total_imported_names += extraction.imported_names.len();
        self.files.push(extraction);
    }

    /// Record a non-fatal error against a path
    pub fn add_issue(&mut self, path: PathBuf, error: &ScanError) {
        self.summary.errors_encountered += 1;
        self.issues.push(ScanIssue::from_error(path, error));
    }

    /// Set the total scan duration
    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.summary.scan_duration = duration;
    }
}
