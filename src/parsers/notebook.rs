//! Notebook document model
//!
//! Deserializes the subset of the `.ipynb` JSON structure the scanner needs:
//! a `cells` array where each cell carries a `cell_type` and, for code cells,
//! a `source` array with one string per physical sub-line. Everything else in
//! the document is ignored.

use serde::Deserialize;

/// A notebook document reduced to its cell list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<NotebookCell>,
}

/// One notebook cell
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookCell {
    #[serde(default)]
    pub cell_type: String,
    #[serde(default)]
    pub source: Vec<String>,
}

impl NotebookCell {
    /// Only code cells contribute sub-lines to extraction
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }
}

impl Notebook {
    /// Parse a notebook document from its JSON text
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_code_and_markdown_cells() {
        let text = r##"{
            "cells": [
                {"cell_type": "code", "source": ["import os\n", "x = 1\n"], "outputs": []},
                {"cell_type": "markdown", "source": ["# heading\n"]}
            ],
            "nbformat": 4
        }"##;

        let notebook = Notebook::parse(text).unwrap();
        assert_eq!(notebook.cells.len(), 2);
        assert!(notebook.cells[0].is_code());
        assert!(!notebook.cells[1].is_code());
        assert_eq!(notebook.cells[0].source[0], "import os\n");
    }

    #[test]
    fn missing_cells_defaults_to_empty() {
        let notebook = Notebook::parse(r#"{"nbformat": 4}"#).unwrap();
        assert!(notebook.cells.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Notebook::parse("{not json").is_err());
    }
}
