//! Per-file extraction
//!
//! Reads one source file and applies the line matcher across its shrinking
//! units: physical lines for plain files, code-cell sub-lines for notebooks.
//! Both unit kinds are carried as a tagged [`SourceLine`] and normalized to a
//! plain string before the matcher runs, so the matcher never needs to know
//! where a line came from.

use crate::error::{Result, ScanError};
use crate::models::FileExtraction;
use crate::parsers::{match_line, Notebook};
use std::fs;
use std::path::Path;

/// File kinds accepted by the scanner; everything else is skipped entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Plain `.py` source, scanned line by line
    PlainSource,
    /// `.ipynb` notebook JSON, scanned per code-cell sub-line
    Notebook,
}

impl FileKind {
    /// Determine the file kind from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("py") => Some(FileKind::PlainSource),
            Some("ipynb") => Some(FileKind::Notebook),
            _ => None,
        }
    }
}

/// One unit of source text on its way to the matcher
#[derive(Debug, Clone, Copy)]
pub enum SourceLine<'a> {
    Plain(&'a str),
    NotebookSubline(&'a str),
}

impl SourceLine<'_> {
    /// Normalize to plain text; the matcher only ever sees strings
    pub fn as_str(&self) -> &str {
        match self {
            SourceLine::Plain(s) | SourceLine::NotebookSubline(s) => s,
        }
    }
}

/// Extract packages, import statements, and imported names from one file.
///
/// Read and parse failures surface as errors for the walker to log; they do
/// not abort the walk.
pub fn extract_file(path: &Path, kind: FileKind) -> Result<FileExtraction> {
    let text =
        fs::read_to_string(path).map_err(|source| ScanError::file_read_error(path, source))?;

    let mut extraction = FileExtraction::new(path.to_path_buf());

    match kind {
        FileKind::PlainSource => {
            for line in text.lines() {
                absorb(&mut extraction, SourceLine::Plain(line));
            }
        }
        FileKind::Notebook => {
            let notebook = Notebook::parse(&text)
                .map_err(|source| ScanError::notebook_parse_error(path, source))?;
            for cell in notebook.cells.iter().filter(|c| c.is_code()) {
                for subline in &cell.source {
                    absorb(&mut extraction, SourceLine::NotebookSubline(subline));
                }
            }
        }
    }

    Ok(extraction)
}

/// Union one line's match into the file's extraction
fn absorb(extraction: &mut FileExtraction, line: SourceLine<'_>) {
    let matched = match_line(line.as_str());
    extraction.packages.extend(matched.packages);
    extraction.imports.extend(matched.imports);
    extraction.imported_names.extend(matched.imported_names);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn file_kind_from_extension() {
        assert_eq!(
            FileKind::from_path(Path::new("a/main.py")),
            Some(FileKind::PlainSource)
        );
        assert_eq!(
            FileKind::from_path(Path::new("a/nb.ipynb")),
            Some(FileKind::Notebook)
        );
        assert_eq!(FileKind::from_path(Path::new("a/readme.md")), None);
        assert_eq!(FileKind::from_path(Path::new("a/Makefile")), None);
    }

    #[test]
    fn plain_file_lines_are_unioned() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "main.py",
            "import os\nimport os\nfrom sys import argv\nx = 1\n",
        );

        let extraction = extract_file(&path, FileKind::PlainSource).unwrap();
        assert_eq!(extraction.packages.len(), 2);
        assert!(extraction.packages.contains("os"));
        assert!(extraction.packages.contains("sys"));
        assert!(extraction.imported_names.contains("sys.argv"));
    }

    #[test]
    fn notebook_only_code_cells_contribute() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "nb.ipynb",
            r#"{
                "cells": [
                    {"cell_type": "code", "source": ["from pkg import x\n"]},
                    {"cell_type": "markdown", "source": ["import markdown_only\n"]}
                ]
            }"#,
        );

        let extraction = extract_file(&path, FileKind::Notebook).unwrap();
        assert!(extraction.packages.contains("pkg"));
        assert!(extraction.imported_names.contains("pkg.x"));
        assert!(!extraction.packages.contains("markdown_only"));
    }

    #[test]
    fn notebook_version_pins_are_captured() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "nb.ipynb",
            r#"{"cells": [{"cell_type": "code", "source": ["!pip install requests==2.31.0\n"]}]}"#,
        );

        let extraction = extract_file(&path, FileKind::Notebook).unwrap();
        assert!(extraction.packages.contains("requests==2.31.0"));
    }

    #[test]
    fn malformed_notebook_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "broken.ipynb", "{not valid json");

        let err = extract_file(&path, FileKind::Notebook).unwrap_err();
        assert!(matches!(err, ScanError::NotebookParse { .. }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = extract_file(Path::new("/nonexistent/main.py"), FileKind::PlainSource)
            .unwrap_err();
        assert!(matches!(err, ScanError::FileRead { .. }));
    }
}
