//! imgsqueeze WASM - WebAssembly bindings for imgsqueeze
//!
//! This crate exposes the imgsqueeze-core encoder to the browser converter
//! UI. The UI decodes the dropped file onto a canvas, hands the RGBA pixels
//! over, and wraps the returned bytes in a `Blob` for preview and download.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for source images and results
//! - `encode` - Conversion bindings (quality search, single-shot encode, naming)
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert, available_formats, JsSourceImage } from '@imgsqueeze/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsSourceImage(width, height, rgba);
//! const result = convert(image, { format: 'image/avif', quality: 70, targetKB: 200 });
//! console.log(`${result.size_bytes} bytes at quality ${result.quality_used}`);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod types;

// Re-export public types
pub use encode::{available_formats, convert, encode_image, output_file_name};
pub use types::{JsEncodeResult, JsSourceImage};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
