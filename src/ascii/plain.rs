//! One glyph per pixel conversion.

use super::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use super::palette::glyph_for;

/// Append the glyphs of input row `row` to `line`, left to right.
pub fn render_row(pixels: &PixelBuffer, row: usize, line: &mut String) {
    line.reserve(pixels.width());
    for bgr in pixels.row(row).chunks_exact(BYTES_PER_PIXEL) {
        line.push(glyph_for(
            u64::from(bgr[0]),
            u64::from(bgr[1]),
            u64::from(bgr[2]),
            1,
        ));
    }
}
