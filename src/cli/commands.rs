//! Conversion driver and config subcommand handlers.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction};
use super::enums::ConversionMode;
use crate::ascii::{self, ConversionRequest, ConvertError, ConvertOptions, Mode, Status};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG_TOML};
use crate::normalize::{self, LoadError};

/// Effective conversion settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: ConversionMode,
    pub window_size: usize,
    pub workers: Option<NonZeroUsize>,
    pub output: PathBuf,
}

impl Settings {
    /// CLI flags win over config values, which win over built-in defaults.
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let workers = args
            .workers
            .or_else(|| config.convert.workers.and_then(NonZeroUsize::new));

        Self {
            mode: args
                .mode
                .unwrap_or_else(|| ConversionMode::from(config.convert.compress)),
            window_size: args.window.unwrap_or(config.convert.window_size),
            workers,
            output: args
                .output
                .clone()
                .unwrap_or_else(|| config.output.path.clone()),
        }
    }

    fn request_mode(&self) -> Mode {
        Mode::from_flags(self.mode.compress(), self.window_size)
    }
}

/// Errors surfaced by the conversion driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("no image filename given")]
    NoImage,

    #[error("failed to read image filename: {0}")]
    Prompt(#[source] std::io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("conversion failed with status {status}: {source}")]
    Convert {
        status: Status,
        #[source]
        source: ConvertError,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DriverError {
    /// Status code associated with this failure, if it came from the library.
    pub fn status(&self) -> Option<Status> {
        match self {
            DriverError::Load(e) => Some(e.status()),
            DriverError::Convert { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Ask for an image filename on `output` and read one line from `input`.
pub fn prompt_image_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, DriverError> {
    writeln!(output, "Please, introduce the image filename:").map_err(DriverError::Prompt)?;
    output.flush().map_err(DriverError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(DriverError::Prompt)?;
    let name = line.trim();
    if name.is_empty() {
        return Err(DriverError::NoImage);
    }
    Ok(PathBuf::from(name))
}

/// Load `image`, convert it and write the text to `settings.output`.
///
/// Nothing is written unless the conversion succeeds. Returns the output path.
pub fn run_conversion(image: &Path, settings: &Settings) -> Result<PathBuf, DriverError> {
    let pixels = normalize::load(image)?;
    log::info!(
        "loaded {} ({}x{})",
        image.display(),
        pixels.width(),
        pixels.height()
    );

    let request = ConversionRequest {
        pixels: &pixels,
        mode: settings.request_mode(),
    };
    let options = ConvertOptions {
        workers: settings.workers,
    };
    let rows = ascii::convert_rows(&request, &options).map_err(|e| DriverError::Convert {
        status: e.status(),
        source: e,
    })?;

    std::fs::write(&settings.output, rows.into_text()).map_err(|e| DriverError::Write {
        path: settings.output.clone(),
        source: e,
    })?;
    Ok(settings.output.clone())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) {
    let config_path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = match Config::load(Some(&config_path)) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            println!("Current configuration:");
            println!(
                "  Mode: {}",
                if config.convert.compress { "windowed" } else { "plain" }
            );
            println!("  Window size: {}", config.convert.window_size);
            match config.convert.workers {
                Some(n) => println!("  Workers: {}", n),
                None => println!("  Workers: {} (available parallelism)", ascii::worker_count()),
            }
            println!("  Output: {}", config.output.path.display());
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'pic2ascii config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG_TOML) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}
