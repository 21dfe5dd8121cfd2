// crates/jotter-core/src/config.rs - Configuration schema and loading
//
// Configuration sources, highest priority first:
// 1. Command-line arguments (--dir, --config)
// 2. Environment variables (JOTTER_DIR, JOTTER_EDITOR, JOTTER_CONFIG)
// 3. Config file (jotter.toml in the working directory by default)
// 4. Built-in defaults
//
// This module owns layers 3 and 4: the TOML schema, per-field defaults, and
// validation. The CLI's context layer composes the full precedence chain.
// The config file lives outside the notes directory; the store holds note
// files and nothing else.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid TOML syntax in {file}: {error}")]
    Parse { file: String, error: String },

    #[error("invalid configuration value: {0}")]
    Validation(String),

    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema for jotter.
///
/// Every field has a default, so a partial config file (or none at all) is
/// always valid input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Note storage settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Editor integration settings
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Note storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Notes directory, resolved relative to the working directory
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Filename extension for note files (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Editor integration configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Editor command for `jotter edit` (overrides JOTTER_EDITOR and EDITOR)
    #[serde(default)]
    pub command: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file, if it exists.
    ///
    /// A missing file is not an error; the caller falls back to defaults.
    /// Invalid TOML and invalid values fail fast with the offending file or
    /// value named in the message.
    pub fn load(path: &Path) -> ConfigResult<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(Some(config))
    }

    /// Validate configuration values for consistency.
    ///
    /// Catches values that would corrupt the store layout before any
    /// filesystem operation runs.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "store.dir cannot be empty".to_string(),
            ));
        }

        let extension = &self.store.extension;
        if extension.is_empty() {
            return Err(ConfigError::Validation(
                "store.extension cannot be empty".to_string(),
            ));
        }

        // A dot or separator in the extension would break the stem/extension
        // split that note names rely on.
        if extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "store.extension '{}' must not contain '.' or a path separator",
                extension
            )));
        }

        Ok(())
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("notes")
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extension: default_extension(),
        }
    }
}
