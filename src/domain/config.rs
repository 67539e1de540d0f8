//! # Configuration
//!
//! Manages the loading and parsing of the tool servers' configuration file (`config.yaml`).
//! Defines the structs for command execution, file operation policies and logging.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicitly requested file must exist. Without one, `data/config.yaml` is used
    /// when present and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommandsConfig {
    /// Program used to interpret command lines.
    #[serde(default = "default_shell")]
    pub shell: String,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimeoutConfig {
    #[serde(default = "default_timeout")]
    pub default: u64,
}

impl TimeoutConfig {
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.default)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            default: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_shell() -> String {
    if cfg!(target_os = "windows") {
        "cmd".to_string()
    } else {
        "sh".to_string()
    }
}

/// Policies for the file-domain operations.
#[derive(Debug, Default, Deserialize, Clone, Copy)]
pub struct FilesConfig {
    #[serde(default)]
    pub write: WritePolicy,
    #[serde(default)]
    pub delete: DeletePolicy,
}

/// Whether `write_file` may create a file that does not exist yet.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Create the file and any missing parent directories.
    #[default]
    Create,
    /// Only overwrite files that already exist.
    RequireExisting,
}

/// How `delete_file` treats directories.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Remove the directory and everything below it.
    #[default]
    Recursive,
    /// Only remove empty directories.
    EmptyOnly,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs are also written to `<directory>/<file>`.
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
            file: default_log_file(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "session.log".to_string()
}
