//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core imgsqueeze types,
//! handling the conversion between Rust and JavaScript data representations.

use imgsqueeze_core::{EncodeError, EncodeResult, SourceImage};
use wasm_bindgen::prelude::*;

/// An RGBA8 source image for JavaScript.
///
/// The UI collaborator fills this from a canvas `ImageData`, whose `data`
/// field is already RGBA8 in row-major order.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. Validation against the
/// dimensions happens when the image is encoded, so construction never throws.
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a new JsSourceImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {}
}

impl JsSourceImage {
    /// Validate and convert to a core SourceImage. Clones the pixel data.
    pub(crate) fn to_source(&self) -> Result<SourceImage, EncodeError> {
        SourceImage::new(self.width, self.height, self.pixels.clone())
    }
}

/// An encoded image returned to JavaScript.
///
/// Wrap `bytes` in a `Blob` with `mime_type` for preview and download.
#[wasm_bindgen]
pub struct JsEncodeResult {
    inner: EncodeResult,
}

#[wasm_bindgen]
impl JsEncodeResult {
    /// Encoded bytes as a `Uint8Array` (copied out of WASM memory).
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.extension().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn quality_used(&self) -> u8 {
        self.inner.quality_used()
    }

    #[wasm_bindgen(getter)]
    pub fn size_bytes(&self) -> usize {
        self.inner.size_bytes()
    }

    /// True when the requested target size could not be reached.
    #[wasm_bindgen(getter)]
    pub fn target_unreachable(&self) -> bool {
        self.inner.target_unreachable()
    }

    /// Download file name derived from the uploaded file's name.
    pub fn file_name(&self, original_name: &str) -> String {
        self.inner.file_name(original_name)
    }
}

impl From<EncodeResult> for JsEncodeResult {
    fn from(inner: EncodeResult) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgsqueeze_core::{search, Codec, EncodeRequest};

    #[test]
    fn test_js_source_image_creation() {
        let img = JsSourceImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_to_source() {
        let img = JsSourceImage::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255]);
        let source = img.to_source().unwrap();
        assert_eq!(source.width(), 2);
        assert_eq!(source.pixels(), &[255, 0, 0, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn test_to_source_rejects_rgb_buffer() {
        let img = JsSourceImage::new(10, 10, vec![0u8; 10 * 10 * 3]);
        assert!(matches!(
            img.to_source(),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_encode_result_wrapper() {
        let Some(codec) = Codec::available().first().copied() else {
            return;
        };
        let source = SourceImage::solid(8, 8, [1, 2, 3, 255]).unwrap();
        let inner = search(&source, &EncodeRequest::new(codec).with_quality(55)).unwrap();
        let expected = inner.bytes().to_vec();

        let result = JsEncodeResult::from(inner);
        assert_eq!(result.bytes(), expected);
        assert_eq!(result.size_bytes(), expected.len());
        assert_eq!(result.quality_used(), 55);
        assert_eq!(result.mime_type(), codec.mime_type());
        assert_eq!(result.extension(), codec.extension());
        assert!(!result.target_unreachable());
        assert_eq!(
            result.file_name("holiday.png"),
            format!("holiday.{}", codec.extension())
        );
    }
}
