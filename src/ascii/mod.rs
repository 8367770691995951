//! Parallel image to ASCII art conversion.
//!
//! The conversion runs in three stages:
//!
//! 1. **Validation** - window size and geometry are checked up front
//! 2. **Row rendering** - a fixed set of worker threads each render the
//!    output rows they own (`row % workers`)
//! 3. **Assembly** - rows are joined in index order after every worker exits
//!
//! # Modes
//!
//! - [`Mode::Plain`] - one glyph per pixel
//! - [`Mode::Windowed`] - one glyph per odd-sized square block of pixels

mod buffer;
mod convert;
mod error;
mod palette;
mod partition;
pub mod plain;
pub mod windowed;

pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use convert::{
    convert, convert_rows, ConversionRequest, ConversionResult, ConvertOptions, Mode, OutputRows,
    LINE_ENDING,
};
pub use error::{ConvertError, Status};
pub use palette::{glyph_for, luminance, palette_index, ChannelSums, BUCKET_WIDTH, PALETTE};
pub use partition::{row_owner, stripe, worker_count};
pub use windowed::WindowGeometry;
