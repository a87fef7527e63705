//! Configuration management for importscan

pub mod file;
pub mod settings;

pub use file::{create_default_config, load_config_file};
pub use settings::{ConfigBuilder, PartialSettings, Settings, SettingsValidator, DEFAULT_CONFIG_FILE};
