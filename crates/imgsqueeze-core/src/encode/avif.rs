//! AVIF encoding.
//!
//! Uses the `image` crate's AVIF encoder (ravif/rav1e). The workspace does
//! not enable the `image/rayon` feature, so encoding is single-threaded and
//! the output is reproducible.

use crate::codec::Codec;
use crate::error::EncodeError;
use crate::source::SourceImage;
use image::codecs::avif::AvifEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

pub(crate) fn encode_avif(
    image: &SourceImage,
    quality: u8,
    speed: u8,
) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = AvifEncoder::new_with_speed_quality(&mut buffer, speed, quality);

    encoder
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::failure(Codec::Avif, e))?;

    Ok(buffer.into_inner())
}
