//! imgsqueeze Core - Size-targeted image encoder
//!
//! This crate re-encodes decoded RGBA8 images as JPEG, WebP, AVIF or PNG,
//! either at a fixed quality or at the highest quality that fits a byte
//! budget.
//!
//! # Modules
//!
//! - `source` - Validated RGBA8 input buffers
//! - `codec` - Output formats, MIME types and file extensions
//! - `encode` - Per-codec encoders behind the [`QualityEncoder`] trait
//! - `search` - Quality search against a target size
//! - `result` - Encoded output and download naming
//!
//! # Example
//!
//! ```ignore
//! use imgsqueeze_core::{search, Codec, EncodeRequest, SourceImage};
//!
//! let image = SourceImage::new(width, height, rgba_pixels)?;
//! let req = EncodeRequest::new(Codec::Webp).with_target_kb(300);
//! let result = search(&image, &req)?;
//! if result.target_unreachable() {
//!     eprintln!("could only get down to {} bytes", result.size_bytes());
//! }
//! ```

pub mod codec;
pub mod encode;
pub mod error;
pub mod result;
pub mod search;
pub mod source;

pub use codec::Codec;
pub use encode::{encode_at, CodecEncoder, QualityEncoder};
pub use error::EncodeError;
pub use result::{output_file_name, EncodeResult};
pub use search::{search, search_with, search_with_config, EncodeRequest, SearchConfig};
pub use source::SourceImage;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_thread_safe() {
        assert_send_sync::<SourceImage>();
        assert_send_sync::<EncodeRequest>();
        assert_send_sync::<EncodeResult>();
        assert_send_sync::<SearchConfig>();
        assert_send_sync::<CodecEncoder>();
        assert_send_sync::<EncodeError>();
    }

    #[test]
    fn test_default_request_round_trip() {
        let image = SourceImage::solid(8, 8, [255, 255, 255, 255]).unwrap();
        let Some(codec) = Codec::available().first().copied() else {
            return;
        };

        let result = search(&image, &EncodeRequest::new(codec)).unwrap();
        assert_eq!(result.codec(), codec);
        assert_eq!(result.quality_used(), search::DEFAULT_QUALITY);
        assert_eq!(result.bytes(), encode_at(&image, codec, 80).unwrap());
    }
}
