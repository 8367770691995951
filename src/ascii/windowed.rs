//! Block-averaging conversion over square windows.
//!
//! Each output glyph summarizes a `window x window` block of pixels. Blocks
//! are laid out from the top-left corner; rows and columns of pixels that do
//! not fill a whole block at the right and bottom borders are dropped.

use super::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use super::error::ConvertError;
use super::palette::ChannelSums;

/// Validated window layout for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    window: usize,
    rows: usize,
    columns: usize,
}

impl WindowGeometry {
    /// Lay out `window_size` blocks over a `width x height` image.
    ///
    /// The window must be odd and greater than 1, and at least one whole
    /// window must fit in each direction.
    pub fn new(width: usize, height: usize, window_size: usize) -> Result<Self, ConvertError> {
        if window_size <= 1 || window_size % 2 == 0 {
            return Err(ConvertError::InvalidWindow { window_size });
        }

        let rows = height / window_size;
        let columns = width / window_size;
        if rows == 0 || columns == 0 {
            return Err(ConvertError::WindowTooLarge {
                window_size,
                width,
                height,
            });
        }

        Ok(Self {
            window: window_size,
            rows,
            columns,
        })
    }

    /// Side of the square window in pixels.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of output rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of glyphs per output row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Pixels averaged per glyph.
    pub fn sample_count(&self) -> u64 {
        self.window as u64 * self.window as u64
    }
}

/// Append the glyphs of output row `out_row` to `line`.
pub fn render_row(pixels: &PixelBuffer, geometry: &WindowGeometry, out_row: usize, line: &mut String) {
    let window = geometry.window();
    let span = window * BYTES_PER_PIXEL;
    let top = out_row * window;
    let samples = geometry.sample_count();

    line.reserve(geometry.columns());
    for column in 0..geometry.columns() {
        let left = column * span;
        let mut sums = ChannelSums::default();
        for y in top..top + window {
            for bgr in pixels.row(y)[left..left + span].chunks_exact(BYTES_PER_PIXEL) {
                sums.add(bgr);
            }
        }
        line.push(sums.glyph(samples));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_window_rejected() {
        assert!(matches!(
            WindowGeometry::new(100, 100, 4),
            Err(ConvertError::InvalidWindow { window_size: 4 })
        ));
    }

    #[test]
    fn test_window_of_one_rejected() {
        assert!(matches!(
            WindowGeometry::new(100, 100, 1),
            Err(ConvertError::InvalidWindow { .. })
        ));
        assert!(matches!(
            WindowGeometry::new(100, 100, 0),
            Err(ConvertError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_window_larger_than_image() {
        assert!(matches!(
            WindowGeometry::new(2, 2, 3),
            Err(ConvertError::WindowTooLarge { .. })
        ));
        // Fits horizontally but not vertically
        assert!(matches!(
            WindowGeometry::new(9, 2, 3),
            Err(ConvertError::WindowTooLarge { .. })
        ));
    }

    #[test]
    fn test_geometry_floors() {
        let geometry = WindowGeometry::new(10, 7, 3).unwrap();
        assert_eq!(geometry.rows(), 2);
        assert_eq!(geometry.columns(), 3);
        assert_eq!(geometry.sample_count(), 9);
    }

    #[test]
    fn test_sample_count_for_huge_window() {
        let geometry = WindowGeometry::new(65_537, 65_537, 65_537).unwrap();
        assert_eq!(geometry.rows(), 1);
        assert_eq!(geometry.sample_count(), 4_295_098_369);
    }

    #[test]
    fn test_render_row_clips_border() {
        // 4x4: left 3x3 block black, clipped column and row white
        let mut data = vec![255u8; 4 * 4 * 3];
        for y in 0..3 {
            for x in 0..3 {
                let i = (y * 4 + x) * 3;
                data[i..i + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
        let pixels = PixelBuffer::from_bgr(data, 4, 4).unwrap();
        let geometry = WindowGeometry::new(4, 4, 3).unwrap();

        let mut line = String::new();
        render_row(&pixels, &geometry, 0, &mut line);
        assert_eq!(line, "#");
    }
}
