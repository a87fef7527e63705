//! Standard-library vs custom package classification
//!
//! The classifier holds an explicitly constructed, immutable reference set of
//! standard-library module names. It is built once per run and passed to the
//! report writers; classification is a pure function of (reference set, input).

use crate::error::{Result, ScanError};
use crate::parsers::stdlib;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// The two-valued classification tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Standard,
    Custom,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Standard => write!(f, "standard"),
            Classification::Custom => write!(f, "custom"),
        }
    }
}

/// Classifies package roots against a fixed reference set
#[derive(Debug, Clone)]
pub struct Classifier {
    reference: BTreeSet<String>,
}

impl Classifier {
    /// Build a classifier from the bundled reference table
    /// (see [`stdlib::PYTHON_VERSION`])
    pub fn bundled() -> Self {
        Self {
            reference: stdlib::STANDARD_MODULES
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }

    /// Build a classifier from an explicit set of module names
    pub fn from_modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reference: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a classifier from a reference list file: one module name per
    /// line, blank lines and `#` comments ignored.
    ///
    /// An unreadable or empty list is a fatal error - every downstream
    /// classification depends on it, so there is no silent default.
    pub fn from_list_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ScanError::StdlibListRead {
            path: path.to_path_buf(),
            source,
        })?;

        let reference: BTreeSet<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if reference.is_empty() {
            return Err(ScanError::StdlibListEmpty {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { reference })
    }

    /// Classify a package or imported-name string.
    ///
    /// Any `==version` suffix and any dotted suffix beyond the root segment
    /// are stripped before lookup.
    pub fn classify(&self, name: &str) -> Classification {
        let bare = name.split("==").next().unwrap_or_default();
        let root = bare.split('.').next().unwrap_or_default();

        if self.reference.contains(root) {
            Classification::Standard
        } else {
            Classification::Custom
        }
    }

    /// Number of module names in the reference set
    pub fn reference_len(&self) -> usize {
        self.reference.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn test_classifier() -> Classifier {
        Classifier::from_modules(["os", "json", "sys"])
    }

    #[test]
    fn standard_and_custom() {
        let classifier = test_classifier();
        assert_eq!(classifier.classify("os"), Classification::Standard);
        assert_eq!(classifier.classify("numpy"), Classification::Custom);
    }

    #[test]
    fn dotted_suffix_is_stripped() {
        let classifier = test_classifier();
        assert_eq!(classifier.classify("os.path"), Classification::Standard);
        assert_eq!(classifier.classify("numpy.linalg"), Classification::Custom);
    }

    #[test]
    fn version_pin_is_stripped() {
        let classifier = test_classifier();
        assert_eq!(classifier.classify("numpy==1.26.4"), Classification::Custom);
        assert_eq!(classifier.classify("json==9.9"), Classification::Standard);
    }

    #[test]
    fn bundled_table_knows_common_modules() {
        let classifier = Classifier::bundled();
        assert_eq!(classifier.classify("os"), Classification::Standard);
        assert_eq!(classifier.classify("itertools"), Classification::Standard);
        assert_eq!(classifier.classify("numpy"), Classification::Custom);
        assert_eq!(classifier.classify("requests"), Classification::Custom);
    }

    #[test]
    fn list_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# reference list").unwrap();
        writeln!(file, "os").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "json").unwrap();

        let classifier = Classifier::from_list_file(file.path()).unwrap();
        assert_eq!(classifier.reference_len(), 2);
        assert_eq!(classifier.classify("os"), Classification::Standard);
        assert_eq!(classifier.classify("re"), Classification::Custom);
    }

    #[test]
    fn empty_list_file_fails_loudly() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# only a comment").unwrap();

        let err = Classifier::from_list_file(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::StdlibListEmpty { .. }));
    }

    #[test]
    fn missing_list_file_fails_loudly() {
        let err = Classifier::from_list_file(Path::new("/nonexistent/stdlib.txt")).unwrap_err();
        assert!(matches!(err, ScanError::StdlibListRead { .. }));
    }
}
