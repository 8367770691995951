//! Configuration file handling for pic2ascii.
//!
//! Loads configuration from `<config dir>/pic2ascii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Window size used by the windowed mode when nothing else is set.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Output file written when nothing else is set.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Configuration file structure for pic2ascii.
/// Loaded from the user config dir (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ConvertConfig {
    #[serde(default = "default_true")]
    pub compress: bool,
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            compress: true,
            window_size: DEFAULT_WINDOW_SIZE,
            workers: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_output")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// Contents written by `pic2ascii config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# pic2ascii configuration

[convert]
# Average square blocks of pixels into one character
compress = true
# Side of the averaging window (odd, greater than 1)
window_size = 3
# Worker threads (default: available parallelism)
# workers = 4

[output]
# File the ASCII art is written to
path = "output.txt"
"#;

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
            log::debug!("loaded config from {}", path.display());
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
        .map(|d| d.join("pic2ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pic2ascii/config.toml")
        })
}
