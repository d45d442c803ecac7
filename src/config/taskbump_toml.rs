//! Parsing and validation for taskbump.toml configuration files

use crate::document::DEFAULT_INDENT;
use crate::error::ConfigError;
use crate::manifest::MANIFEST_FILE;
use crate::tasks::TASKS_DIR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name, looked up in the project root
pub const CONFIG_FILE: &str = "taskbump.toml";

/// Main configuration struct for taskbump.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output formatting of rewritten JSON
    #[serde(default)]
    pub format: FormatConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load `taskbump.toml` from `root`, falling back to defaults when absent
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::load(path)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=8).contains(&self.format.indent) {
            return Err(ConfigError::Validation {
                field: "format.indent".to_string(),
                message: format!("must be between 1 and 8, got {}", self.format.indent),
            });
        }

        if self.paths.manifest.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                field: "paths.manifest".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.paths.tasks.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                field: "paths.tasks".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// `[paths]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Extension manifest, relative to the project root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Tasks directory, relative to the project root
    #[serde(default = "default_tasks")]
    pub tasks: PathBuf,
}

fn default_manifest() -> PathBuf {
    PathBuf::from(MANIFEST_FILE)
}

fn default_tasks() -> PathBuf {
    PathBuf::from(TASKS_DIR)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            tasks: default_tasks(),
        }
    }
}

/// `[format]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Spaces per indent level in rewritten JSON
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}
