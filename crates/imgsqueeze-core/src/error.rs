//! Error types for image encoding operations.

use crate::codec::Codec;
use thiserror::Error;

/// Errors that can occur while building a source image or encoding it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The codec is not compiled into this build
    #[error("Unsupported codec: {0} is not available in this build")]
    UnsupportedCodec(Codec),

    /// The underlying encoder rejected the input
    #[error("{codec} encoding failed: {reason}")]
    EncodeFailure { codec: Codec, reason: String },

    /// Width or height is zero, or the image is too large to address
    #[error("Invalid dimensions: {width}x{height} (must be non-zero and fit in memory)")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The encode request is malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A codec name or MIME type could not be parsed
    #[error("Unknown codec: {0:?}")]
    UnknownCodec(String),
}

impl EncodeError {
    pub(crate) fn failure(codec: Codec, reason: impl ToString) -> Self {
        EncodeError::EncodeFailure {
            codec,
            reason: reason.to_string(),
        }
    }
}
