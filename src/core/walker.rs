//! Directory walking functionality
//!
//! This module provides directory traversal with per-file error handling,
//! pattern-based exclusion, and depth limiting. Traversal is synchronous and
//! single-pass: one file is opened, extracted, and released before the next.
//! Sibling entries are visited in sorted name order, so the aggregate - and
//! with it every summary artifact - is identical across reruns of an
//! unchanged tree.

use crate::config::Settings;
use crate::core::extractor::{extract_file, FileKind};
use crate::error::{Result, ScanError};
use crate::models::ScanResults;
use glob::Pattern;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Main walker for directory traversal and extraction
pub struct Walker {
    settings: Settings,
}

impl Walker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Walk the configured root and extract imports from every recognized
    /// file.
    ///
    /// Per-file failures are recorded as issues and the walk continues; only
    /// an unreadable root or an invalid configuration aborts the scan.
    pub fn scan(&self) -> Result<ScanResults> {
        let start_time = Instant::now();
        let mut results = ScanResults::new();

        if !self.settings.root_dir.is_dir() {
            return Err(ScanError::InvalidPath {
                path: self.settings.root_dir.clone(),
            });
        }

        let exclude_patterns = self.compile_exclude_patterns()?;

        self.scan_dir(&self.settings.root_dir, &exclude_patterns, 0, &mut results)?;

        results.set_scan_duration(start_time.elapsed());
        Ok(results)
    }

    /// Compile exclude patterns into glob patterns
    fn compile_exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.settings
            .exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern).map_err(ScanError::from))
            .collect()
    }

    /// Check if a directory matches any exclude pattern
    fn is_excluded(&self, path: &Path, patterns: &[Pattern]) -> bool {
        let path_str = path.to_string_lossy();
        patterns.iter().any(|pattern| pattern.matches(&path_str))
    }

    /// Recursively scan one directory level
    fn scan_dir(
        &self,
        dir: &Path,
        exclude_patterns: &[Pattern],
        current_depth: usize,
        results: &mut ScanResults,
    ) -> Result<()> {
        if let Some(max_depth) = self.settings.max_depth {
            if current_depth > max_depth {
                return Ok(());
            }
        }

        if self.is_excluded(dir, exclude_patterns) {
            return Ok(());
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                // An unreadable root is fatal; anything deeper is recorded
                // and skipped.
                if current_depth == 0 {
                    return Err(if err.kind() == std::io::ErrorKind::PermissionDenied {
                        ScanError::permission_denied(dir)
                    } else {
                        ScanError::io_error(err)
                    });
                }
                let recorded = if err.kind() == std::io::ErrorKind::PermissionDenied {
                    ScanError::permission_denied(dir)
                } else {
                    ScanError::io_error(err)
                };
                results.add_issue(dir.to_path_buf(), &recorded);
                return Ok(());
            }
        };

        let mut paths: Vec<std::path::PathBuf> = Vec::new();
        for entry_result in entries {
            match entry_result {
                Ok(entry) => paths.push(entry.path()),
                Err(err) => {
                    results.add_issue(dir.to_path_buf(), &ScanError::io_error(err));
                }
            }
        }
        paths.sort();

        for path in paths {
            if path.is_dir() {
                if path.is_symlink() && !self.settings.follow_links {
                    continue;
                }
                self.scan_dir(&path, exclude_patterns, current_depth + 1, results)?;
            } else {
                self.scan_entry(&path, results);
            }
        }

        Ok(())
    }

    /// Extract from one file if its extension is recognized
    fn scan_entry(&self, path: &Path, results: &mut ScanResults) {
        let Some(kind) = FileKind::from_path(path) else {
            return;
        };

        match extract_file(path, kind) {
            Ok(extraction) => results.add_file(extraction),
            Err(err) => results.add_issue(path.to_path_buf(), &err),
        }
    }
}
