//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then command-line overrides applied by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SKIP_HEADER_ROWS, LOG_LEVELS, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Table input settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Rows dropped from the first non-empty table (column headers)
    pub skip_header_rows: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            skip_header_rows: DEFAULT_SKIP_HEADER_ROWS,
        }
    }
}

/// Waypoint output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file; stdout when unset
    pub path: Option<PathBuf>,

    /// Indent the JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            pretty: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for this crate (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Global configuration for waypoint extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location, e.g. `~/.config/waypoint-extractor/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Defaults, then `config_file` if given, then environment variables
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_vars::SKIP_HEADER_ROWS) {
            self.input.skip_header_rows = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a non-negative integer, got '{}'",
                    env_vars::SKIP_HEADER_ROWS,
                    value
                ))
            })?;
        }

        if let Some(value) = lookup(env_vars::OUTPUT_PATH) {
            if !value.trim().is_empty() {
                self.output.path = Some(PathBuf::from(value));
            }
        }

        if let Some(value) = lookup(env_vars::PRETTY) {
            self.output.pretty = parse_bool(&value).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be true or false, got '{}'",
                    env_vars::PRETTY,
                    value
                ))
            })?;
        }

        Ok(())
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}'. Valid levels: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if let Some(path) = &self.output.path {
            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is a directory: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    pub fn with_skip_header_rows(mut self, rows: usize) -> Self {
        self.input.skip_header_rows = rows;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.path = Some(path.into());
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.output.pretty = pretty;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input.skip_header_rows, 1);
        assert!(config.output.pretty);
        assert!(config.output.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]").unwrap();
        writeln!(file, "skip_header_rows = 2").unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"debug\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.input.skip_header_rows, 2);
        assert_eq!(config.logging.level, "debug");
        assert!(config.output.pretty);
    }

    #[test]
    fn test_invalid_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\nskip_header_rows = \"two\"").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (env_vars::SKIP_HEADER_ROWS, "0"),
            (env_vars::OUTPUT_PATH, "out/waypoints.json"),
            (env_vars::PRETTY, "off"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env_overrides(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.input.skip_header_rows, 0);
        assert_eq!(
            config.output.path,
            Some(PathBuf::from("out/waypoints.json"))
        );
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_bad_env_value() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(|name| {
            (name == env_vars::SKIP_HEADER_ROWS).then(|| "-1".to_string())
        });
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_level_and_directory_output() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let dir = TempDir::new().unwrap();
        let config = Config::default().with_output_path(dir.path());
        assert!(config.validate().is_err());
    }
}
