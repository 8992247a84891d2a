//! JPEG encoding.
//!
//! Uses the `image` crate's baseline JPEG encoder. JPEG has no alpha
//! channel, so transparent pixels are composited over black first.

use crate::codec::Codec;
use crate::error::EncodeError;
use crate::source::SourceImage;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

/// Largest width or height a baseline JPEG can describe.
const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// Encode an image to JPEG bytes at `quality` (1-100).
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub(crate) fn encode_jpeg(image: &SourceImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(EncodeError::failure(
            Codec::Jpeg,
            format!("{width}x{height} exceeds the JPEG limit of {MAX_JPEG_DIMENSION}"),
        ));
    }

    let rgb = image.to_rgb_over_black();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::failure(Codec::Jpeg, e))?;

    Ok(buffer.into_inner())
}
