//! Decoding and normalization of source images into [`PixelBuffer`]s.
//!
//! Any decoded image (grayscale, 16-bit, with or without alpha) is flattened
//! to 8-bit BGR before conversion. Translucent pixels are composited over
//! black, so a fully transparent pixel becomes black.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::ascii::{ConvertError, PixelBuffer, Status};

/// Errors that can occur while loading a source image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read image '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("decoded image is not usable: {0}")]
    Buffer(#[from] ConvertError),
}

impl LoadError {
    /// Status code reported for this error.
    pub fn status(&self) -> Status {
        match self {
            LoadError::Io { .. } | LoadError::Decode { .. } => Status::BadInput,
            LoadError::Buffer(e) => e.status(),
        }
    }
}

/// Flatten a decoded image into the canonical BGR layout.
pub fn to_pixel_buffer(image: &DynamicImage) -> Result<PixelBuffer, ConvertError> {
    let (width, height, bgr) = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut bgr = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            bgr.extend_from_slice(&[over_black(b, a), over_black(g, a), over_black(r, a)]);
        }
        (width, height, bgr)
    } else {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let mut bgr = rgb.into_raw();
        for pixel in bgr.chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }
        (width, height, bgr)
    };

    log::debug!("normalized {}x{} image ({:?}) to BGR", width, height, image.color());
    PixelBuffer::from_bgr(bgr, width as usize, height as usize)
}

/// Composite one channel over a black background.
#[inline]
fn over_black(channel: u8, alpha: u8) -> u8 {
    (u16::from(channel) * u16::from(alpha) / 255) as u8
}

/// Decode the image at `path` and normalize it.
pub fn load(path: &Path) -> Result<PixelBuffer, LoadError> {
    let reader = image::ImageReader::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = reader.with_guessed_format().map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let image = reader.decode().map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(to_pixel_buffer(&image)?)
}
