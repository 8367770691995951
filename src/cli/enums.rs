//! CLI enum types for the conversion mode option.

use clap::ValueEnum;

/// Conversion mode selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConversionMode {
    /// One character per pixel
    Plain,
    /// One character per averaged square window
    #[default]
    Windowed,
}

impl ConversionMode {
    /// Whether this mode averages windows of pixels.
    pub fn compress(&self) -> bool {
        matches!(self, ConversionMode::Windowed)
    }
}

impl From<bool> for ConversionMode {
    fn from(compress: bool) -> Self {
        if compress {
            ConversionMode::Windowed
        } else {
            ConversionMode::Plain
        }
    }
}
