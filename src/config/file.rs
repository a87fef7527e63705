//! Configuration file loading
//!
//! Reads scanner settings from a TOML file (`.importscan.toml` by default)
//! into [`PartialSettings`], which the builder merges under CLI flags.

use crate::config::settings::PartialSettings;
use crate::error::{Result, ScanError};
use std::fs;
use std::path::Path;

/// Load a configuration file into partial settings
pub fn load_config_file(path: &Path) -> Result<PartialSettings> {
    if !path.exists() {
        return Err(ScanError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ScanError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ScanError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a commented default configuration file
pub fn create_default_config(path: &Path) -> Result<()> {
    let content = r#"# importscan configuration
#
# All keys are optional; command-line flags override anything set here.

# Root directory to scan
# root_dir = "."

# Glob patterns for directories to exclude
# exclude_patterns = ["*venv*", "*.git*"]

# Maximum directory depth to traverse
# max_depth = 10

# Follow symbolic links during traversal
# follow_links = false

# Skip per-file artifacts, write only the root summary
# summary_only = false

# Custom standard-library reference list, one module name per line
# stdlib_list = "stdlib-modules.txt"

# Console output
# quiet = false
# verbose = false
# use_colors = true
"#;

    fs::write(path, content).map_err(|source| ScanError::output_write_error(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_parses_known_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "max_depth = 4\nexclude_patterns = [\"*venv*\"]\nsummary_only = true\n",
        )
        .unwrap();

        let partial = load_config_file(&path).unwrap();
        assert_eq!(partial.max_depth, Some(4));
        assert_eq!(partial.exclude_patterns, Some(vec!["*venv*".to_string()]));
        assert_eq!(partial.summary_only, Some(true));
        assert!(partial.root_dir.is_none());
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "no_such_key = true\n").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ScanError::ConfigParse { .. }));
    }

    #[test]
    fn load_missing_file_is_config_not_found() {
        let err = load_config_file(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ScanError::ConfigNotFound { .. }));
    }

    #[test]
    fn default_config_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".importscan.toml");

        create_default_config(&path).unwrap();
        // Every key is commented out, so the file parses to all-unset settings
        let partial = load_config_file(&path).unwrap();
        assert!(partial.root_dir.is_none());
        assert!(partial.max_depth.is_none());
    }
}
