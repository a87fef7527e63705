use std::path::PathBuf;
use std::process;

use importscan::{
    cli::{Args, Command},
    config::{create_default_config, ConfigBuilder, Settings, DEFAULT_CONFIG_FILE},
    core::Walker,
    error::{ErrorSeverity, Result, ScanError},
    models::ScanResults,
    output::{per_file, summary, Reporter},
    parsers::{stdlib, Classifier},
    NAME, VERSION,
};

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create command from arguments
    let command = Command::from_args(args);

    // Run the command and get exit code
    let exit_code = run_command(command);

    process::exit(exit_code);
}

/// Run the command with proper error handling
fn run_command(command: Command) -> i32 {
    match execute_command(command) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("\nError: {}", err.user_message());

            // Provide default suggestions based on error type
            match &err {
                ScanError::InvalidPath { .. } => {
                    eprintln!("Suggestion: Check that the path exists and is a directory");
                }
                ScanError::ConfigNotFound { .. } => {
                    eprintln!(
                        "Suggestion: Create a {} file with --init or specify a config file with --config",
                        DEFAULT_CONFIG_FILE
                    );
                }
                ScanError::PermissionDenied { .. } => {
                    eprintln!("Suggestion: Check file permissions or run with sufficient access");
                }
                ScanError::StdlibListRead { .. } | ScanError::StdlibListEmpty { .. } => {
                    eprintln!(
                        "Suggestion: Pass a readable, non-empty file to --stdlib-list, or drop the flag to use the bundled table"
                    );
                }
                _ => {}
            }

            // Return appropriate exit code based on error severity
            match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}

/// Execute the command with proper orchestration
fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Init => {
            let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

            if config_path.exists() {
                println!("Configuration file already exists at: {}", config_path.display());
                println!("To overwrite it, delete the file first and run this command again.");
                return Ok(());
            }

            create_default_config(&config_path)?;

            println!("Created default configuration file at: {}", config_path.display());
            println!("\nEdit this file to configure importscan; command-line flags override it.");
            Ok(())
        }
        Command::Scan(args) => {
            // Build final settings: defaults, then config file, then CLI flags
            let config_builder = ConfigBuilder::new();
            let config_builder = if let Some(config_path) = &args.config {
                config_builder.add_config_file(config_path)?
            } else {
                config_builder.try_add_default_config_file()
            };
            let settings = config_builder.merge(args.to_partial()).build()?;

            let reporter = Reporter::new(settings.quiet, settings.verbose, settings.use_colors);

            if !settings.quiet {
                println!("{} v{} - Python import scanner", NAME, VERSION);
                println!("Scanning path: {}", settings.root_dir.display());
                if !settings.exclude_patterns.is_empty() {
                    println!("Excluding: {}", settings.exclude_patterns.join(", "));
                }
                if let Some(depth) = settings.max_depth {
                    println!("Maximum depth: {}", depth);
                }
            }

            // Classification must be available before anything is scanned
            let classifier = match &settings.stdlib_list {
                Some(path) => {
                    let classifier = Classifier::from_list_file(path)?;
                    reporter.print_verbose(&format!(
                        "Loaded {} standard-library module names from {}",
                        classifier.reference_len(),
                        path.display()
                    ));
                    classifier
                }
                None => {
                    reporter.print_verbose(&format!(
                        "Using bundled Python {} standard-library table",
                        stdlib::PYTHON_VERSION
                    ));
                    Classifier::bundled()
                }
            };

            // Walk the tree
            let walker = Walker::new(settings.clone());
            let results = walker.scan()?;

            // One-line diagnostic per per-file failure
            for issue in &results.issues {
                reporter.warning(&issue.message);
            }

            // Write reports
            write_reports(&results, &settings, &classifier, &reporter);

            // Display summary information if not in quiet mode
            if !settings.quiet {
                print_summary(&results, &settings);
            }

            Ok(())
        }
    }
}

/// Write per-file and aggregate reports, logging failures without aborting
fn write_reports(
    results: &ScanResults,
    settings: &Settings,
    classifier: &Classifier,
    reporter: &Reporter,
) {
    if !settings.summary_only {
        for extraction in &results.files {
            match per_file::write_file_reports(extraction, classifier) {
                Ok(_) => reporter.success(&format!(
                    "Wrote TXT, CSV, and MD reports for: {}",
                    extraction.path.display()
                )),
                Err(err) => reporter.warning(&err.user_message()),
            }
        }
    }

    match summary::write_summary(results, &settings.root_dir, classifier) {
        Ok(paths) => {
            for path in paths {
                reporter.success(&format!("Wrote summary: {}", path.display()));
            }
        }
        Err(err) => reporter.warning(&err.user_message()),
    }
}

/// Print a summary of the scan results
fn print_summary(results: &ScanResults, settings: &Settings) {
    println!("\n=== Scan Summary ===");
    println!("Files scanned: {}", results.summary.files_scanned);
    println!("Files with imports: {}", results.summary.files_matched);
    println!("Packages found: {}", results.summary.total_packages);
    println!("Import statements: {}", results.summary.total_imports);
    println!("Imported names: {}", results.summary.total_imported_names);

    if results.summary.errors_encountered > 0 {
        println!("Errors encountered: {}", results.summary.errors_encountered);
    }

    if results.files.is_empty() {
        println!(
            "\nNo imports found in {}. If this is unexpected, check:",
            settings.root_dir.display()
        );
        println!("  - The path contains .py or .ipynb files");
        println!("  - Exclude patterns aren't filtering out all directories");
        if let Some(depth) = settings.max_depth {
            println!("  - The max-depth setting ({}) isn't too restrictive", depth);
        }
    }

    println!("\nScan completed in: {:.2?}", results.summary.scan_duration);
    println!(
        "Scan completed at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}
