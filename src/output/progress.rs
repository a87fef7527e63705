//! Console reporting
//!
//! Quiet/verbose-aware console output for diagnostics and per-artifact
//! confirmations. Everything here goes to the terminal; report artifacts
//! never contain console decoration, so their content stays deterministic.

use ansi_term::Colour::{Green, Red, Yellow};

/// Console reporter for scan progress and diagnostics
pub struct Reporter {
    quiet: bool,
    verbose: bool,
    use_colors: bool,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(quiet: bool, verbose: bool, use_colors: bool) -> Self {
        Self {
            quiet,
            verbose,
            use_colors,
        }
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Print a verbose message (only in verbose mode)
    pub fn print_verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{}", message);
        }
    }

    /// Print a per-artifact confirmation (respects quiet mode)
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            println!("{} {}", Green.paint("✔"), message);
        } else {
            println!("[ok] {}", message);
        }
    }

    /// Print a warning (always printed, even in quiet mode)
    pub fn warning(&self, message: &str) {
        if self.use_colors {
            eprintln!("{} {}", Yellow.paint("Warning:"), message);
        } else {
            eprintln!("Warning: {}", message);
        }
    }

    /// Print an error (always printed, even in quiet mode)
    pub fn error(&self, message: &str) {
        if self.use_colors {
            eprintln!("{} {}", Red.paint("Error:"), message);
        } else {
            eprintln!("Error: {}", message);
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
