//! Aggregate summary writing
//!
//! Emits one flat-text, one CSV, and one Markdown summary at the scanned
//! root, enumerating every per-file extraction in walk order under a
//! per-file heading. Content is a pure function of the aggregate, so
//! re-running over an unchanged tree produces byte-identical artifacts.

use crate::error::{Result, ScanError};
use crate::models::ScanResults;
use crate::output::writers::write_artifact;
use crate::parsers::Classifier;
use std::path::{Path, PathBuf};

/// Base name shared by the three summary artifacts
pub const SUMMARY_BASE_NAME: &str = "summary_all_packages";

/// Render the flat text summary
pub fn render_summary_text(results: &ScanResults) -> String {
    let mut output = String::new();

    for entry in &results.files {
        output.push_str(&format!("# {}\n", entry.path.display()));

        output.push_str("## Packages\n");
        for package in &entry.packages {
            output.push_str(&format!("- {}\n", package));
        }

        output.push_str("\n## Import Statements\n");
        for import in &entry.imports {
            output.push_str(&format!("- {}\n", import));
        }

        output.push_str("\n## Imported Names\n");
        for name in &entry.imported_names {
            output.push_str(&format!("- {}\n", name));
        }

        output.push_str(&format!("\n{}\n\n", "=".repeat(40)));
    }

    output
}

/// Render the CSV summary: `File,Name,Type` rows so the aggregate is
/// parseable without section-splitting
pub fn render_summary_csv(results: &ScanResults, classifier: &Classifier) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["File", "Name", "Type"])?;

    for entry in &results.files {
        let file = entry.path.display().to_string();
        for package in &entry.packages {
            let classification = classifier.classify(package).to_string();
            writer.write_record([file.as_str(), package.as_str(), classification.as_str()])?;
        }
        for name in &entry.imported_names {
            let classification = classifier.classify(name).to_string();
            writer.write_record([file.as_str(), name.as_str(), classification.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScanError::scan_error(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ScanError::scan_error(format!("CSV encoding error: {}", e)))
}

/// Render the Markdown summary with per-file headings and classification
/// annotations
pub fn render_summary_markdown(results: &ScanResults, classifier: &Classifier) -> String {
    let mut output = String::from("# Summary of Extracted Packages and Imports\n\n");

    for entry in &results.files {
        output.push_str(&format!("## `{}`\n\n", entry.path.display()));

        output.push_str("### Packages\n");
        for package in &entry.packages {
            output.push_str(&format!("- `{}` ({})\n", package, classifier.classify(package)));
        }

        output.push_str("\n### Import Statements\n");
        for import in &entry.imports {
            output.push_str(&format!("- `{}`\n", import));
        }

        output.push_str("\n### Imported Names\n");
        for name in &entry.imported_names {
            output.push_str(&format!("- `{}` ({})\n", name, classifier.classify(name)));
        }

        output.push('\n');
    }

    output
}

/// Write the three summary artifacts at the scanned root, returning the
/// paths written
pub fn write_summary(
    results: &ScanResults,
    root_dir: &Path,
    classifier: &Classifier,
) -> Result<Vec<PathBuf>> {
    let txt_path = root_dir.join(format!("{}.txt", SUMMARY_BASE_NAME));
    let csv_path = root_dir.join(format!("{}.csv", SUMMARY_BASE_NAME));
    let md_path = root_dir.join(format!("{}.md", SUMMARY_BASE_NAME));

    write_artifact(&txt_path, &render_summary_text(results))?;
    write_artifact(&csv_path, &render_summary_csv(results, classifier)?)?;
    write_artifact(&md_path, &render_summary_markdown(results, classifier))?;

    Ok(vec![txt_path, csv_path, md_path])
}
