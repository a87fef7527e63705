//! Line-level import pattern matching
//!
//! Recognizes three statement shapes in a single line of Python source:
//!
//! 1. `from <module> import <name1>, <name2>, ...`
//! 2. `import <module>[.<submodule>] [as <alias>]`
//! 3. `<identifier>==<dotted-version>` pins, anywhere in the line
//!
//! Rules 1 and 2 are mutually exclusive and anchored at line start (leading
//! whitespace allowed); rule 3 is independent and may fire together with
//! either. Matching is regex-based, not grammar-based: imports inside string
//! literals or comments are still captured, and statements split across
//! physical lines are not recognized. This is a deliberate precision/cost
//! trade-off, not a defect.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static FROM_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*from\s+([A-Za-z0-9_.]+)\s+import\s+([A-Za-z0-9_*,\s]+)").unwrap());

static PLAIN_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*import\s+([A-Za-z0-9_.]+)(?:\s+as\s+([A-Za-z0-9_]+))?").unwrap());

static VERSION_PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_-]+)==([0-9.]+)").unwrap());

/// Everything one line contributes to a file's extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMatch {
    pub packages: BTreeSet<String>,
    pub imports: BTreeSet<String>,
    pub imported_names: BTreeSet<String>,
}

impl LineMatch {
    /// True when no rule matched
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.imports.is_empty() && self.imported_names.is_empty()
    }
}

/// The leading dotted-path segment of an import target.
///
/// Empty for relative imports (`from .sibling import x`), which never
/// contribute to any set.
fn module_root(module: &str) -> &str {
    module.split('.').next().unwrap_or_default()
}

/// Match one line of source text against the import and version-pin rules.
///
/// Lines with no match produce all-empty sets, never an error.
pub fn match_line(line: &str) -> LineMatch {
    let mut matched = LineMatch::default();

    if let Some(caps) = FROM_IMPORT_RE.captures(line) {
        let root = module_root(&caps[1]);
        if !root.is_empty() {
            matched.packages.insert(root.to_string());
            matched.imports.insert(line.trim().to_string());
            for name in caps[2].split(',') {
                let name: String = name.chars().filter(|c| !c.is_whitespace()).collect();
                if !name.is_empty() {
                    matched.imported_names.insert(format!("{}.{}", root, name));
                }
            }
        }
    } else if let Some(caps) = PLAIN_IMPORT_RE.captures(line) {
        let root = module_root(&caps[1]);
        if !root.is_empty() {
            matched.packages.insert(root.to_string());
            matched.imports.insert(line.trim().to_string());
            let qualified = match caps.get(2) {
                Some(alias) => format!("{} as {}", root, alias.as_str()),
                None => root.to_string(),
            };
            matched.imported_names.insert(qualified);
        }
    }

    for caps in VERSION_PIN_RE.captures_iter(line) {
        matched.packages.insert(format!("{}=={}", &caps[1], &caps[2]));
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str]) -> BTreeSet<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_import_captures_root_and_names() {
        let matched = match_line("from numpy.linalg import inv, det");

        assert_eq!(matched.packages, set(&["numpy"]));
        assert_eq!(matched.imports, set(&["from numpy.linalg import inv, det"]));
        assert_eq!(matched.imported_names, set(&["numpy.inv", "numpy.det"]));
    }

    #[test]
    fn from_import_star() {
        let matched = match_line("from os import *");
        assert_eq!(matched.imported_names, set(&["os.*"]));
    }

    #[test]
    fn plain_import_with_alias() {
        let matched = match_line("import pandas.io as pio");

        assert_eq!(matched.packages, set(&["pandas"]));
        assert_eq!(matched.imports, set(&["import pandas.io as pio"]));
        assert_eq!(matched.imported_names, set(&["pandas as pio"]));
    }

    #[test]
    fn plain_import_without_alias() {
        let matched = match_line("import os.path");

        assert_eq!(matched.packages, set(&["os"]));
        assert_eq!(matched.imported_names, set(&["os"]));
    }

    #[test]
    fn leading_whitespace_is_tolerated_and_trimmed() {
        let matched = match_line("    import json");

        assert_eq!(matched.packages, set(&["json"]));
        assert_eq!(matched.imports, set(&["import json"]));
    }

    #[test]
    fn mid_line_import_does_not_match() {
        let matched = match_line("value = 'import os'");
        assert!(matched.is_empty());
    }

    #[test]
    fn version_pin_is_captured() {
        let matched = match_line("requests==2.31.0");
        assert_eq!(matched.packages, set(&["requests==2.31.0"]));
        assert!(matched.imports.is_empty());
    }

    #[test]
    fn version_pin_combines_with_import_match() {
        let matched = match_line("import requests  # requests==2.31.0");

        assert_eq!(matched.packages, set(&["requests", "requests==2.31.0"]));
        assert_eq!(matched.imports, set(&["import requests  # requests==2.31.0"]));
    }

    #[test]
    fn multiple_pins_on_one_line() {
        let matched = match_line("numpy==1.26.4 pandas==2.2.1");
        assert_eq!(matched.packages, set(&["numpy==1.26.4", "pandas==2.2.1"]));
    }

    #[test]
    fn relative_import_contributes_nothing() {
        assert!(match_line("from .sibling import helper").is_empty());
        assert!(match_line("from ..pkg import thing").is_empty());
    }

    #[test]
    fn unmatched_line_is_empty() {
        assert!(match_line("x = 1 + 2").is_empty());
        assert!(match_line("").is_empty());
    }

    #[test]
    fn trailing_whitespace_in_name_list_is_stripped() {
        let matched = match_line("from os import path, sep ");
        assert_eq!(matched.imported_names, set(&["os.path", "os.sep"]));
    }
}
