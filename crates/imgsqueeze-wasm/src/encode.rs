//! Image conversion WASM bindings.
//!
//! This module exposes the imgsqueeze-core encoder and quality search to
//! JavaScript, backing the converter's "Convert / Compress" and "Download"
//! buttons.
//!
//! # Functions
//!
//! - [`convert`] - Encode with an optional target size (quality search)
//! - [`encode_image`] - Encode once at a fixed quality
//! - [`available_formats`] - MIME types compiled into this build
//! - [`output_file_name`] - Download name for an uploaded file
//!
//! # Example
//!
//! ```typescript
//! import { convert, JsSourceImage } from '@imgsqueeze/wasm';
//!
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const image = new JsSourceImage(data.width, data.height, new Uint8Array(data.data.buffer));
//! const result = convert(image, { format: 'image/webp', quality: 80, targetKB: 300 });
//! const blob = new Blob([result.bytes], { type: result.mime_type });
//! ```

use crate::types::{JsEncodeResult, JsSourceImage};
use imgsqueeze_core::search::DEFAULT_QUALITY;
use imgsqueeze_core::{
    search_with_config, Codec, EncodeError, EncodeRequest, EncodeResult, SearchConfig,
};
use serde::{Deserialize, Deserializer};
use wasm_bindgen::prelude::*;

/// Options object accepted by [`convert`].
///
/// Mirrors the converter's controls: format `<select>`, quality slider and
/// the optional "Target size (KB)" field. Numeric fields also accept the
/// string `.value` of an `<input>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConvertOptions {
    /// MIME type (`image/webp`) or short name (`webp`)
    pub format: String,
    /// Missing or unparsable means the default quality
    #[serde(default, deserialize_with = "lenient_number")]
    pub quality: Option<f64>,
    /// Empty, zero, negative or NaN means no target
    #[serde(default, rename = "targetKB", deserialize_with = "lenient_number")]
    pub target_kb: Option<f64>,
    #[serde(default)]
    pub search: SearchConfig,
}

/// A numeric option as JS may hand it over.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrString {
    Num(f64),
    Str(String),
}

impl NumberOrString {
    pub(crate) fn to_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Num(n) => Some(*n),
            NumberOrString::Str(s) => s.trim().parse().ok(),
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(NumberOrString::to_f64))
}

impl ConvertOptions {
    pub(crate) fn into_request(self) -> Result<(EncodeRequest, SearchConfig), EncodeError> {
        let codec: Codec = self.format.parse()?;

        let quality = match self.quality.filter(|q| q.is_finite()) {
            Some(q) => q.round().clamp(1.0, 100.0) as u8,
            None => DEFAULT_QUALITY,
        };

        let mut request = EncodeRequest::new(codec).with_quality(quality);
        if let Some(kb) = self.target_kb.filter(|kb| kb.is_finite() && *kb > 0.0) {
            // Fractional KB are allowed; never round down to zero bytes
            let bytes = (kb * 1024.0).round().max(1.0) as u64;
            request = request.with_target_bytes(bytes);
        }

        Ok((request, self.search))
    }
}

fn to_js_error(err: impl ToString) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub(crate) fn run_convert(
    image: &JsSourceImage,
    options: ConvertOptions,
) -> Result<EncodeResult, EncodeError> {
    let (request, config) = options.into_request()?;
    let source = image.to_source()?;
    search_with_config(&source, &request, &config)
}

#[cfg(target_arch = "wasm32")]
fn warn_unreachable(result: &EncodeResult) {
    let message = format!(
        "imgsqueeze: target size unreachable, smallest {} output is {} bytes",
        result.codec(),
        result.size_bytes()
    );
    web_sys::console::warn_1(&JsValue::from_str(&message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn_unreachable(_result: &EncodeResult) {}

/// Convert an image, searching for the best quality under `targetKB` if given.
///
/// # Arguments
///
/// * `image` - RGBA source image
/// * `options` - `{ format: string, quality?: number | string, targetKB?: number | string, search?: object }`
///
/// # Returns
///
/// A `JsEncodeResult`. When the target is too small even at the lowest
/// quality, the smallest encoding is returned with `target_unreachable` set
/// and a warning is written to the browser console.
///
/// # Errors
///
/// Returns an error string if:
/// - The options object is malformed or names an unknown format
/// - The format is not compiled into this build
/// - The pixel data length doesn't match width * height * 4
/// - The encoder rejects the image
#[wasm_bindgen]
pub fn convert(image: &JsSourceImage, options: JsValue) -> Result<JsEncodeResult, JsValue> {
    let options: ConvertOptions = serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
    let result = run_convert(image, options).map_err(to_js_error)?;

    if result.target_unreachable() {
        warn_unreachable(&result);
    }
    Ok(result.into())
}

/// Encode an image once at a fixed quality.
///
/// # Arguments
///
/// * `image` - RGBA source image
/// * `format` - MIME type or short name
/// * `quality` - 1-100 (ignored for PNG)
#[wasm_bindgen]
pub fn encode_image(
    image: &JsSourceImage,
    format: &str,
    quality: u8,
) -> Result<JsEncodeResult, JsValue> {
    let options = ConvertOptions {
        format: format.to_string(),
        quality: Some(quality as f64),
        target_kb: None,
        search: SearchConfig::default(),
    };
    run_convert(image, options)
        .map(JsEncodeResult::from)
        .map_err(to_js_error)
}

/// MIME types of the formats compiled into this build, in UI order.
#[wasm_bindgen]
pub fn available_formats() -> js_sys::Array {
    Codec::available()
        .into_iter()
        .map(|codec| JsValue::from_str(codec.mime_type()))
        .collect()
}

/// Download file name for `original_name` converted to `format`.
#[wasm_bindgen]
pub fn output_file_name(original_name: &str, format: &str) -> Result<String, JsValue> {
    let codec: Codec = format.parse().map_err(to_js_error)?;
    Ok(imgsqueeze_core::output_file_name(original_name, codec))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn solid(width: u32, height: u32) -> JsSourceImage {
        let pixels = [30u8, 144, 255, 255].repeat((width * height) as usize);
        JsSourceImage::new(width, height, pixels)
    }

    #[wasm_bindgen_test]
    fn test_convert_from_js_object() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"format".into(), &"image/png".into()).unwrap();
        js_sys::Reflect::set(&options, &"targetKB".into(), &JsValue::from_f64(64.0)).unwrap();

        let result = convert(&solid(16, 16), options.into()).unwrap();
        assert_eq!(result.mime_type(), "image/png");
        assert!(!result.target_unreachable());
    }

    #[wasm_bindgen_test]
    fn test_convert_accepts_form_strings() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"format".into(), &"image/png".into()).unwrap();
        js_sys::Reflect::set(&options, &"quality".into(), &"80".into()).unwrap();
        js_sys::Reflect::set(&options, &"targetKB".into(), &"".into()).unwrap();

        let result = convert(&solid(16, 16), options.into()).unwrap();
        assert!(!result.target_unreachable());
        assert_eq!(result.quality_used(), 80);
    }

    #[wasm_bindgen_test]
    fn test_convert_unknown_format() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"format".into(), &"image/gif".into()).unwrap();

        assert!(convert(&solid(4, 4), options.into()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_image_png() {
        let result = encode_image(&solid(8, 8), "png", 80).unwrap();
        assert_eq!(result.extension(), "png");
    }

    #[wasm_bindgen_test]
    fn test_available_formats_lists_png() {
        let formats = available_formats();
        assert!(formats.includes(&JsValue::from_str("image/png"), 0));
    }

    #[wasm_bindgen_test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("cat.png", "image/webp").unwrap(),
            "cat.webp"
        );
        assert!(output_file_name("cat.png", "image/tiff").is_err());
    }
}
