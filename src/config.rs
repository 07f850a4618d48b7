//! # Configuration Module
//!
//! This module provides configuration support for gl, letting users pin a
//! default author and output path instead of passing them on every run.
//!
//! Configuration can be specified in a `.gl.toml` file in the current
//! directory, via the `GL_CONFIG` environment variable, or with `--config`.
//!
//! ```toml
//! author = "Jane Doe"
//! output = "LICENSE.txt"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".gl.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "GL_CONFIG";

/// Main configuration struct for gl.
///
/// Every field is optional; command-line flags take precedence over it.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Copyright holder used when `--author` is not given.
  #[serde(default)]
  pub author: Option<String>,

  /// Output path used when `--output` is not given.
  #[serde(default)]
  pub output: Option<PathBuf>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// An explicitly requested config file does not exist.
  #[error("Config file '{path}' does not exist")]
  NotFound { path: PathBuf },

  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value is present but unusable.
  #[error("Invalid value for '{key}' in config file: {message}")]
  InvalidValue { key: &'static str, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, is not valid TOML, contains
  /// unknown keys, or fails validation.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(author) = &self.author
      && author.trim().is_empty()
    {
      return Err(ConfigError::InvalidValue {
        key: "author",
        message: "author cannot be empty".to_string(),
      });
    }

    if let Some(output) = &self.output
      && output.as_os_str().is_empty()
    {
      return Err(ConfigError::InvalidValue {
        key: "output",
        message: "output path cannot be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `GL_CONFIG` environment variable
/// 3. `.gl.toml` in `dir`
///
/// The first two must exist when given.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if an explicit or environment path does
/// not exist.
pub fn discover_config_path(explicit_path: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Ok(Some(path.to_path_buf()));
    }
    return Err(ConfigError::NotFound {
      path: path.to_path_buf(),
    });
  }

  if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
    let path = PathBuf::from(env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Ok(Some(path));
    }
    return Err(ConfigError::NotFound { path });
  }

  let local = dir.join(DEFAULT_CONFIG_FILENAME);
  if local.exists() {
    verbose_log!("Using config: {}", local.display());
    return Ok(Some(local));
  }

  verbose_log!("No config file found");
  Ok(None)
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when `no_config` is set or no file is found.
///
/// # Errors
///
/// Returns an error if discovery or loading fails.
pub fn load_config(explicit_path: Option<&Path>, dir: &Path, no_config: bool) -> Result<Option<Config>, ConfigError> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, dir)? {
    Some(path) => Config::load(&path).map(Some),
    None => Ok(None),
  }
}
