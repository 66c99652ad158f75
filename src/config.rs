//! Configuration file handling for imgscii.
//!
//! Loads configuration from `~/.config/imgscii/config.toml` or a custom
//! path. CLI arguments override config values, which override the built-in
//! defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Built-in output width when neither the CLI nor the config file sets one.
pub const DEFAULT_COLUMNS: u32 = 60;

/// Configuration file structure for imgscii.
/// Loaded from ~/.config/imgscii/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ascii: AsciiConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output width in columns
    #[serde(default)]
    pub columns: Option<u32>,
    /// Emit ANSI color codes
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            columns: None,
            color: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AsciiConfig {
    /// Glyph ramp, densest ink first
    #[serde(default)]
    pub ramp: Option<String>,
    /// Reverse the ramp orientation (for dark terminals)
    #[serde(default)]
    pub invert: bool,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("imgscii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/imgscii/config.toml")
        })
}

fn default_true() -> bool {
    true
}
