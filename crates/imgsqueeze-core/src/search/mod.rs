//! Quality search against a byte budget.
//!
//! Without a budget the image is encoded once at the requested quality. With
//! a budget and a lossy codec the controller runs a bounded binary search:
//!
//! 1. Probe the top quality. If it fits, done.
//! 2. Probe the bottom quality. If it still doesn't fit, return it flagged
//!    as unreachable.
//! 3. Bisect the qualities in between, keeping the highest one that fits,
//!    until the window is empty or the iteration cap is hit.
//!
//! Encoded size is only assumed to be roughly increasing with quality. The
//! controller never returns a candidate it did not measure, so a fitting
//! result always fits even when the size curve has local bumps.

mod request;

pub use request::{EncodeRequest, SearchConfig, BYTES_PER_KB, DEFAULT_QUALITY};

use crate::codec::Codec;
use crate::encode::{CodecEncoder, QualityEncoder, MAX_QUALITY, MIN_QUALITY};
use crate::error::EncodeError;
use crate::result::EncodeResult;
use crate::source::SourceImage;
use tracing::{debug, trace, warn};

/// Encode `image` as requested using the compiled-in codecs and default tuning.
///
/// # Errors
///
/// * [`EncodeError::UnsupportedCodec`] before any encoding if the codec is missing
/// * [`EncodeError::InvalidRequest`] if the byte budget is zero
/// * [`EncodeError::EncodeFailure`] if the codec rejects the image
///
/// # Example
///
/// ```ignore
/// use imgsqueeze_core::{search, Codec, EncodeRequest, SourceImage};
///
/// let image = SourceImage::solid(64, 64, [200, 40, 40, 255])?;
/// let req = EncodeRequest::new(Codec::Jpeg).with_target_bytes(2000);
/// let result = search(&image, &req)?;
/// assert!(result.size_bytes() <= 2000);
/// ```
pub fn search(image: &SourceImage, req: &EncodeRequest) -> Result<EncodeResult, EncodeError> {
    search_with_config(image, req, &SearchConfig::default())
}

/// Like [`search`], with explicit tuning.
pub fn search_with_config(
    image: &SourceImage,
    req: &EncodeRequest,
    config: &SearchConfig,
) -> Result<EncodeResult, EncodeError> {
    let config = config.normalized();
    let encoder = CodecEncoder::new().with_avif_speed(config.avif_speed);
    search_with(&encoder, image, req, &config)
}

/// Run the search with any [`QualityEncoder`].
pub fn search_with<E>(
    encoder: &E,
    image: &SourceImage,
    req: &EncodeRequest,
    config: &SearchConfig,
) -> Result<EncodeResult, EncodeError>
where
    E: QualityEncoder + ?Sized,
{
    let codec = req.codec;
    if !encoder.supports(codec) {
        return Err(EncodeError::UnsupportedCodec(codec));
    }
    req.validate()?;

    let config = config.normalized();
    let quality_hint = req.quality_hint.clamp(MIN_QUALITY, MAX_QUALITY);
    let mut prober = Prober {
        encoder,
        image,
        codec,
        target: req.target_bytes,
        probes: 0,
    };

    let Some(target) = req.target_bytes else {
        let probe = prober.run(quality_hint)?;
        return Ok(probe.into_result(codec, false));
    };

    if !codec.is_lossy() {
        let probe = prober.run(quality_hint)?;
        let unreachable = !probe.fits;
        if unreachable {
            warn!(
                %codec,
                target_bytes = target,
                size = probe.bytes.len(),
                "lossless output exceeds target size"
            );
        }
        return Ok(probe.into_result(codec, unreachable));
    }

    let upper = prober.run(config.max_quality)?;
    if upper.fits {
        debug!(%codec, target_bytes = target, quality = upper.quality, "top quality fits target");
        return Ok(upper.into_result(codec, false));
    }
    if config.min_quality == config.max_quality {
        warn!(%codec, target_bytes = target, size = upper.bytes.len(), "target size unreachable");
        return Ok(upper.into_result(codec, true));
    }

    let lower = prober.run(config.min_quality)?;
    if !lower.fits {
        warn!(%codec, target_bytes = target, size = lower.bytes.len(), "target size unreachable");
        return Ok(lower.into_result(codec, true));
    }

    let mut best = lower;
    // Both bounds are already measured: min fits, max doesn't.
    let mut lo = config.min_quality + 1;
    let mut hi = config.max_quality - 1;
    let mut iterations = 0;

    while lo <= hi && iterations < config.max_iterations {
        iterations += 1;
        let mid = lo + (hi - lo) / 2;
        let candidate = prober.run(mid)?;

        if candidate.fits {
            if candidate.quality > best.quality {
                best = candidate;
            }
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    debug!(
        %codec,
        target_bytes = target,
        quality = best.quality,
        size = best.bytes.len(),
        probes = prober.probes,
        "quality search finished"
    );
    Ok(best.into_result(codec, false))
}

/// One measured encode.
struct Probe {
    quality: u8,
    bytes: Vec<u8>,
    fits: bool,
}

impl Probe {
    fn into_result(self, codec: Codec, target_unreachable: bool) -> EncodeResult {
        EncodeResult::new(self.bytes, codec, self.quality, target_unreachable)
    }
}

struct Prober<'a, E: ?Sized> {
    encoder: &'a E,
    image: &'a SourceImage,
    codec: Codec,
    target: Option<u64>,
    probes: u32,
}

impl<E: QualityEncoder + ?Sized> Prober<'_, E> {
    fn run(&mut self, quality: u8) -> Result<Probe, EncodeError> {
        let bytes = self.encoder.encode_at(self.image, self.codec, quality)?;
        self.probes += 1;

        let fits = self.target.map_or(true, |t| bytes.len() as u64 <= t);
        trace!(codec = %self.codec, quality, size = bytes.len(), fits, "probe");

        Ok(Probe {
            quality,
            bytes,
            fits,
        })
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
