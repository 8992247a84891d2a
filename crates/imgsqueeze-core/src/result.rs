//! Encoded output handed back to the caller.

use crate::codec::Codec;

/// Fallback file stem when the uploaded name has none.
const DEFAULT_STEM: &str = "image";

/// The outcome of one successful encode or search.
///
/// Immutable once built; `size_bytes()` always equals `bytes().len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeResult {
    bytes: Vec<u8>,
    codec: Codec,
    quality_used: u8,
    target_unreachable: bool,
}

impl EncodeResult {
    pub(crate) fn new(bytes: Vec<u8>, codec: Codec, quality_used: u8, target_unreachable: bool) -> Self {
        Self {
            bytes,
            codec,
            quality_used,
            target_unreachable,
        }
    }

    /// Encoded bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Quality the returned bytes were encoded at.
    #[inline]
    pub fn quality_used(&self) -> u8 {
        self.quality_used
    }

    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// True when a byte budget was requested and even the smallest
    /// encoding exceeds it. The bytes are then the closest result.
    #[inline]
    pub fn target_unreachable(&self) -> bool {
        self.target_unreachable
    }

    pub fn mime_type(&self) -> &'static str {
        self.codec.mime_type()
    }

    pub fn extension(&self) -> &'static str {
        self.codec.extension()
    }

    /// Download name for this output given the uploaded file's name.
    pub fn file_name(&self, original_name: &str) -> String {
        output_file_name(original_name, self.codec)
    }
}

/// Replace the last extension of `original_name` with the codec's extension.
///
/// `"holiday.final.png"` becomes `"holiday.final.webp"`. Names with nothing
/// before the extension fall back to `"image"`.
pub fn output_file_name(original_name: &str, codec: Codec) -> String {
    let name = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    let stem = match name.rfind('.') {
        Some(dot) if !name[dot + 1..].is_empty() => &name[..dot],
        _ => name,
    };
    let stem = if stem.is_empty() { DEFAULT_STEM } else { stem };

    format!("{stem}.{}", codec.extension())
}
