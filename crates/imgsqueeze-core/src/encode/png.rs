//! PNG encoding (lossless RGBA8).

use crate::codec::Codec;
use crate::error::EncodeError;
use crate::source::SourceImage;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

/// Encode an image to PNG bytes. PNG has no quality setting.
pub(crate) fn encode_png(image: &SourceImage) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::failure(Codec::Png, e))?;

    Ok(buffer.into_inner())
}
