//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, and the conversion driver.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use commands::{
    handle_config_action, prompt_image_path, run_conversion, DriverError, Settings,
};
pub use enums::ConversionMode;
