//! Configuration settings structures and validation

use crate::config::file::load_config_file;
use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".importscan.toml";

/// Fully resolved settings for one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory to scan
    pub root_dir: PathBuf,
    /// Glob patterns for directories to exclude
    pub exclude_patterns: Vec<String>,
    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,
    /// Follow symbolic links during traversal
    pub follow_links: bool,
    /// Skip per-file artifacts, write only the root summary
    pub summary_only: bool,
    /// Custom standard-library reference list (bundled table if unset)
    pub stdlib_list: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Show detailed progress information
    pub verbose: bool,
    /// Use ANSI colors in console output
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            exclude_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            summary_only: false,
            stdlib_list: None,
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

/// Settings from one source (CLI or config file); unset fields defer to
/// lower-priority sources or defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub root_dir: Option<PathBuf>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub summary_only: Option<bool>,
    pub stdlib_list: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Apply all fields from `other` that are set, overriding this source
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root_dir.is_some() {
            self.root_dir = other.root_dir;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.summary_only.is_some() {
            self.summary_only = other.summary_only;
        }
        if other.stdlib_list.is_some() {
            self.stdlib_list = other.stdlib_list;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Resolve to full settings, falling back to defaults
    pub fn to_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            root_dir: self.root_dir.unwrap_or(defaults.root_dir),
            exclude_patterns: self.exclude_patterns.unwrap_or(defaults.exclude_patterns),
            max_depth: self.max_depth.or(defaults.max_depth),
            follow_links: self.follow_links.unwrap_or(defaults.follow_links),
            summary_only: self.summary_only.unwrap_or(defaults.summary_only),
            stdlib_list: self.stdlib_list.or(defaults.stdlib_list),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
        }
    }
}

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.root_dir.is_dir() {
            return Err(ScanError::InvalidPath {
                path: settings.root_dir.clone(),
            });
        }

        match std::fs::read_dir(&settings.root_dir) {
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(ScanError::permission_denied(&settings.root_dir));
            }
            Err(e) => return Err(ScanError::io_error(e)),
            Ok(_) => {}
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        if settings.max_depth == Some(0) {
            return Err(ScanError::config_error("Max depth must be at least 1"));
        }

        Ok(())
    }
}

/// Configuration builder for creating settings from various sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Load and apply a configuration file
    pub fn add_config_file(mut self, path: &Path) -> Result<Self> {
        let from_file = load_config_file(path)?;
        self.partial.merge_from(from_file);
        Ok(self)
    }

    /// Apply the default configuration file if one exists in the working
    /// directory; its absence is not an error
    pub fn try_add_default_config_file(mut self) -> Self {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            if let Ok(from_file) = load_config_file(default_path) {
                self.partial.merge_from(from_file);
            }
        }
        self
    }

    /// Merge with another partial settings (highest priority last)
    pub fn merge(mut self, other: PartialSettings) -> Self {
        self.partial.merge_from(other);
        self
    }

    /// Build final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn merge_prefers_later_source() {
        let mut base = PartialSettings {
            root_dir: Some(PathBuf::from("/base")),
            exclude_patterns: Some(vec!["base".to_string()]),
            ..Default::default()
        };

        let override_settings = PartialSettings {
            root_dir: Some(PathBuf::from("/override")),
            max_depth: Some(5),
            ..Default::default()
        };

        base.merge_from(override_settings);

        assert_eq!(base.root_dir, Some(PathBuf::from("/override")));
        assert_eq!(base.exclude_patterns, Some(vec!["base".to_string()]));
        assert_eq!(base.max_depth, Some(5));
    }

    #[test]
    fn to_settings_falls_back_to_defaults() {
        let partial = PartialSettings {
            max_depth: Some(3),
            ..Default::default()
        };

        let settings = partial.to_settings();
        assert_eq!(settings.root_dir, PathBuf::from("."));
        assert_eq!(settings.max_depth, Some(3));
        assert!(settings.use_colors);
        assert!(!settings.quiet);
    }

    #[test]
    fn validator_rejects_missing_root() {
        let settings = Settings {
            root_dir: PathBuf::from("/nonexistent/root"),
            ..Default::default()
        };
        assert!(matches!(
            SettingsValidator::validate(&settings),
            Err(ScanError::InvalidPath { .. })
        ));
    }

    #[test]
    fn validator_rejects_zero_depth() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            root_dir: dir.path().to_path_buf(),
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            SettingsValidator::validate(&settings),
            Err(ScanError::Config { .. })
        ));
    }

    #[test]
    fn validator_rejects_bad_pattern() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            root_dir: dir.path().to_path_buf(),
            exclude_patterns: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            SettingsValidator::validate(&settings),
            Err(ScanError::GlobPattern { .. })
        ));
    }

    #[test]
    fn builder_merges_cli_over_file() {
        let dir = tempdir().unwrap();
        let file_settings = PartialSettings {
            root_dir: Some(dir.path().to_path_buf()),
            max_depth: Some(2),
            ..Default::default()
        };
        let cli_settings = PartialSettings {
            max_depth: Some(7),
            ..Default::default()
        };

        let settings = ConfigBuilder::new()
            .merge(file_settings)
            .merge(cli_settings)
            .build()
            .unwrap();

        assert_eq!(settings.max_depth, Some(7));
        assert_eq!(settings.root_dir, dir.path());
    }
}
