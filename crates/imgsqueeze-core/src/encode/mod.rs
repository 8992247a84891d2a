//! Format encode adapter.
//!
//! This is the only part of the crate that talks to codec libraries. Each
//! codec lives in its own module behind a cargo feature of the same name:
//!
//! - `jpeg` - `image` crate JPEG encoder
//! - `png` - `image` crate PNG encoder (lossless, quality ignored)
//! - `webp` - libwebp via the `webp` crate (lossy)
//! - `avif` - `image` crate AVIF encoder (ravif)
//!
//! The quality search only sees encoded lengths, through the
//! [`QualityEncoder`] trait.
//!
//! # Examples
//!
//! ```ignore
//! use imgsqueeze_core::{encode_at, Codec, SourceImage};
//!
//! let image = SourceImage::solid(100, 100, [128, 128, 128, 255]).unwrap();
//! let bytes = encode_at(&image, Codec::Jpeg, 90).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

#[cfg(feature = "avif")]
mod avif;
#[cfg(feature = "jpeg")]
mod jpeg;
#[cfg(feature = "png")]
mod png;
#[cfg(feature = "webp")]
mod webp;

use crate::codec::Codec;
use crate::error::EncodeError;
use crate::source::SourceImage;

/// Lowest accepted quality.
pub const MIN_QUALITY: u8 = 1;
/// Highest accepted quality.
pub const MAX_QUALITY: u8 = 100;
/// AVIF encoder speed used when none is configured (1 = slowest, 10 = fastest).
pub const DEFAULT_AVIF_SPEED: u8 = 8;

/// Encodes an image at a given quality.
///
/// Implementations must be deterministic: the same image, codec and quality
/// always produce the same bytes.
pub trait QualityEncoder {
    /// Returns true if `codec` can be encoded.
    fn supports(&self, codec: Codec) -> bool;

    /// Encode `image` with `codec` at `quality` (1-100, ignored for PNG).
    fn encode_at(&self, image: &SourceImage, codec: Codec, quality: u8)
        -> Result<Vec<u8>, EncodeError>;
}

/// The encoder backed by the compiled-in codec libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecEncoder {
    avif_speed: u8,
}

impl Default for CodecEncoder {
    fn default() -> Self {
        Self {
            avif_speed: DEFAULT_AVIF_SPEED,
        }
    }
}

impl CodecEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AVIF encoder speed, clamped to 1-10.
    pub fn with_avif_speed(mut self, speed: u8) -> Self {
        self.avif_speed = speed.clamp(1, 10);
        self
    }

    pub fn avif_speed(&self) -> u8 {
        self.avif_speed
    }
}

impl QualityEncoder for CodecEncoder {
    fn supports(&self, codec: Codec) -> bool {
        codec.is_available()
    }

    fn encode_at(
        &self,
        image: &SourceImage,
        codec: Codec,
        quality: u8,
    ) -> Result<Vec<u8>, EncodeError> {
        let quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);

        match codec {
            #[cfg(feature = "jpeg")]
            Codec::Jpeg => jpeg::encode_jpeg(image, quality),
            #[cfg(feature = "png")]
            Codec::Png => png::encode_png(image),
            #[cfg(feature = "webp")]
            Codec::Webp => self::webp::encode_webp(image, quality),
            #[cfg(feature = "avif")]
            Codec::Avif => avif::encode_avif(image, quality, self.avif_speed),
            #[allow(unreachable_patterns)]
            _ => Err(EncodeError::UnsupportedCodec(codec)),
        }
    }
}

/// Encode `image` with the default [`CodecEncoder`].
///
/// # Errors
///
/// * [`EncodeError::UnsupportedCodec`] if the codec is not compiled in
/// * [`EncodeError::EncodeFailure`] if the codec rejects the image
pub fn encode_at(image: &SourceImage, codec: Codec, quality: u8) -> Result<Vec<u8>, EncodeError> {
    CodecEncoder::default().encode_at(image, codec, quality)
}
