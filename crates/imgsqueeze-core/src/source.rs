//! Source pixel buffers handed to the encoder.

use crate::error::EncodeError;

/// An immutable RGBA8 image, row-major, 4 bytes per pixel.
///
/// Construction validates the dimensions and buffer length, so every
/// `SourceImage` can be handed to any encoder without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a source image from RGBA8 pixel data.
    ///
    /// # Errors
    ///
    /// * [`EncodeError::InvalidDimensions`] if width or height is zero, or
    ///   the buffer size would not fit in `usize`
    /// * [`EncodeError::InvalidPixelData`] if `pixels.len() != width * height * 4`
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EncodeError> {
        let expected = rgba_len(width, height)?;
        if pixels.len() != expected {
            return Err(EncodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, EncodeError> {
        let len = rgba_len(width, height)?;
        let pixels = rgba.repeat(len / 4);
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns true if any pixel is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.pixels.chunks_exact(4).any(|px| px[3] != 255)
    }

    /// RGB8 copy with alpha composited over black.
    ///
    /// Matches what a browser canvas produces when exporting a transparent
    /// image to a format without alpha.
    pub fn to_rgb_over_black(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() / 4 * 3);
        for px in self.pixels.chunks_exact(4) {
            let a = px[3] as u16;
            for &c in &px[..3] {
                // Rounded c * a / 255
                let v = (c as u16 * a + 127) / 255;
                rgb.push(v as u8);
            }
        }
        rgb
    }
}

/// Byte length of a `width x height` RGBA8 buffer.
///
/// Checked so a 32-bit target never wraps to a small length.
fn rgba_len(width: u32, height: u32) -> Result<usize, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|n| n.checked_mul(4))
        .ok_or(EncodeError::InvalidDimensions { width, height })
}
