//! Per-file report writing
//!
//! For one file's extraction, emits three sibling artifacts named
//! `<parentDir>-<stem>` plus a format suffix: a flat text listing, a
//! `Name,Type` CSV, and a Markdown report with inline classification
//! annotations. All three carry the same logical content in sorted order.

use crate::error::{Result, ScanError};
use crate::models::FileExtraction;
use crate::output::writers::write_artifact;
use crate::parsers::Classifier;
use std::path::PathBuf;

/// Render the flat text variant: three headed sections, one entry per line
pub fn render_text(extraction: &FileExtraction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Extracted from: {}\n\n", extraction.path.display()));

    output.push_str("=== Packages ===\n");
    for package in &extraction.packages {
        output.push_str(package);
        output.push('\n');
    }

    output.push_str("\n=== Import Statements ===\n");
    for import in &extraction.imports {
        output.push_str(import);
        output.push('\n');
    }

    output.push_str("\n=== Imported Names ===\n");
    for name in &extraction.imported_names {
        output.push_str(name);
        output.push('\n');
    }

    output
}

/// Render the Markdown variant with `(standard)` / `(custom)` annotations
pub fn render_markdown(extraction: &FileExtraction, classifier: &Classifier) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Imports from `{}`\n\n", extraction.path.display()));

    output.push_str("## Packages\n");
    for package in &extraction.packages {
        output.push_str(&format!("- `{}` ({})\n", package, classifier.classify(package)));
    }

    output.push_str("\n## Import Statements\n");
    for import in &extraction.imports {
        output.push_str(&format!("- `{}`\n", import));
    }

    output.push_str("\n## Imported Names\n");
    for name in &extraction.imported_names {
        output.push_str(&format!("- `{}` ({})\n", name, classifier.classify(name)));
    }

    output
}

/// Render the CSV variant: `Name,Type` rows for packages and imported names
pub fn render_csv(extraction: &FileExtraction, classifier: &Classifier) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Name", "Type"])?;

    for package in &extraction.packages {
        let classification = classifier.classify(package).to_string();
        writer.write_record([package.as_str(), classification.as_str()])?;
    }
    for name in &extraction.imported_names {
        let classification = classifier.classify(name).to_string();
        writer.write_record([name.as_str(), classification.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScanError::scan_error(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ScanError::scan_error(format!("CSV encoding error: {}", e)))
}

/// Write the three sibling artifacts for one extraction, returning the paths
/// written. A failure is reported to the caller, which logs it and moves on.
pub fn write_file_reports(
    extraction: &FileExtraction,
    classifier: &Classifier,
) -> Result<Vec<PathBuf>> {
    let out_dir = extraction.path.parent().map(PathBuf::from).unwrap_or_default();
    let base = extraction.artifact_base_name();

    let txt_path = out_dir.join(format!("{}_packages_list.txt", base));
    let csv_path = out_dir.join(format!("{}_imports.csv", base));
    let md_path = out_dir.join(format!("{}_imports.md", base));

    write_artifact(&txt_path, &render_text(extraction))?;
    write_artifact(&csv_path, &render_csv(extraction, classifier)?)?;
    write_artifact(&md_path, &render_markdown(extraction, classifier))?;

    Ok(vec![txt_path, csv_path, md_path])
}
