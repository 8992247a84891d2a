//! Lossy WebP encoding through libwebp.
//!
//! The `image` crate only writes lossless WebP, which has no quality knob,
//! so this goes through the `webp` crate instead.

use crate::codec::Codec;
use crate::error::EncodeError;
use crate::source::SourceImage;

/// Largest width or height libwebp accepts.
const MAX_WEBP_DIMENSION: u32 = 16383;

pub(crate) fn encode_webp(image: &SourceImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    if width > MAX_WEBP_DIMENSION || height > MAX_WEBP_DIMENSION {
        return Err(EncodeError::failure(
            Codec::Webp,
            format!("{width}x{height} exceeds the WebP limit of {MAX_WEBP_DIMENSION}"),
        ));
    }

    let encoder = ::webp::Encoder::from_rgba(image.pixels(), width, height);
    let memory = encoder
        .encode_simple(false, quality as f32)
        .map_err(|e| EncodeError::failure(Codec::Webp, format!("{e:?}")))?;

    Ok(memory.to_vec())
}
