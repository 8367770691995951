//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use super::enums::ConversionMode;

/// Convert pictures to ASCII art
#[derive(Parser, Debug)]
#[command(name = "pic2ascii")]
#[command(version, about = "Convert pictures to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert (prompted for on stdin when omitted)
    pub image: Option<PathBuf>,

    /// Output file (default: output.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Conversion mode
    #[arg(short, long)]
    pub mode: Option<ConversionMode>,

    /// Side of the averaging window in pixels (odd, greater than 1)
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Worker threads (default: available parallelism)
    #[arg(long)]
    pub workers: Option<NonZeroUsize>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
