//! Canonical pixel buffer shared read-only by conversion workers.

use super::error::ConvertError;

/// Bytes per pixel in the canonical layout (blue, green, red; no alpha).
pub const BYTES_PER_PIXEL: usize = 3;

/// A decoded image in canonical BGR layout, row-major, no padding.
///
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wrap BGR bytes. Fails with `BadInput` unless `data.len() == width * height * 3`.
    pub fn from_bgr(data: Vec<u8>, width: usize, height: usize) -> Result<Self, ConvertError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ConvertError::BadInput {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(ConvertError::BadInput {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// Bytes of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride();
        &self.data[start..start + self.stride()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
