//! Command-line argument parsing

use crate::config::PartialSettings;
use clap::Parser;
use std::path::PathBuf;

/// importscan - Python import extraction and classification scanner
#[derive(Parser, Debug)]
#[command(name = "importscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract packages, import statements, and imported names from Python source trees")]
#[command(long_about = "importscan walks a directory tree, statically extracts import information from \
Python source files (.py) and Jupyter notebooks (.ipynb), classifies each discovered package as \
standard-library or custom, and writes per-file and aggregate reports in text, CSV, and Markdown.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Scan the current directory
    importscan

    # Scan a specific directory
    importscan ./my-project

    # Exclude directories (can specify multiple patterns)
    importscan ./my-project --exclude '*venv*' --exclude '*.git*'

    # Limit directory traversal depth
    importscan ./my-project --max-depth 3

Output Options:
    # Write only the root summary, no per-file artifacts
    importscan ./my-project --summary-only

    # Disable colored console output
    importscan ./my-project --no-colors

Classification:
    # Substitute a custom standard-library reference list
    importscan ./my-project --stdlib-list ./stdlib-modules.txt

Configuration:
    # Use a specific configuration file
    importscan ./my-project --config ./importscan.toml

    # Create a default configuration file
    importscan --init

Verbosity:
    # Quiet mode with minimal output
    importscan ./my-project --quiet

    # Verbose mode with detailed information
    importscan ./my-project --verbose
")]
pub struct Args {
    /// Root directory to scan (defaults to the current directory)
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Exclude directories matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for directories to exclude (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse")]
    pub max_depth: Option<usize>,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal (may cause duplicate scanning if links form cycles)")]
    pub follow_links: bool,

    /// Write only the root summary artifacts
    #[arg(long, help = "Skip per-file artifacts and write only summary_all_packages.{txt,csv,md} at the root")]
    pub summary_only: bool,

    /// Custom standard-library reference list
    #[arg(long, value_name = "FILE", help = "File with one standard-library module name per line (uses the bundled Python table if not specified)")]
    pub stdlib_list: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .importscan.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only warnings and errors)")]
    pub quiet: bool,

    /// Show detailed progress information
    #[arg(short, long, help = "Show detailed progress information")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored console output (useful for terminals without ANSI support or when piping)")]
    pub no_colors: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.importscan.toml) in the current directory")]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Convert the flags that were actually given into partial settings
    pub fn to_partial(&self) -> PartialSettings {
        PartialSettings {
            root_dir: self.root_dir.clone(),
            exclude_patterns: if self.exclude.is_empty() {
                None
            } else {
                Some(self.exclude.clone())
            },
            max_depth: self.max_depth,
            follow_links: self.follow_links.then_some(true),
            summary_only: self.summary_only.then_some(true),
            stdlib_list: self.stdlib_list.clone(),
            quiet: self.quiet.then_some(true),
            verbose: self.verbose.then_some(true),
            use_colors: self.no_colors.then_some(false),
        }
    }
}
