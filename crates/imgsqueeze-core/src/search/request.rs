//! Request and tuning types for the quality search.

use crate::codec::Codec;
use crate::encode::{DEFAULT_AVIF_SPEED, MAX_QUALITY, MIN_QUALITY};
use crate::error::EncodeError;
use serde::{Deserialize, Serialize};

/// Quality used when the caller doesn't pick one.
pub const DEFAULT_QUALITY: u8 = 80;

/// Bytes per kilobyte for [`EncodeRequest::with_target_kb`].
pub const BYTES_PER_KB: u64 = 1024;

/// What to encode and how hard to squeeze it.
///
/// `quality_hint` is always present. Without a target it is the quality
/// used; with a target the search looks for the highest quality that fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeRequest {
    pub codec: Codec,
    pub quality_hint: u8,
    pub target_bytes: Option<u64>,
}

impl EncodeRequest {
    /// A request for `codec` at the default quality with no byte budget.
    pub fn new(codec: Codec) -> Self {
        Self {
            codec,
            quality_hint: DEFAULT_QUALITY,
            target_bytes: None,
        }
    }

    /// Set the quality, clamped to 1-100.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality_hint = quality.clamp(MIN_QUALITY, MAX_QUALITY);
        self
    }

    /// Set the byte budget the output must not exceed.
    pub fn with_target_bytes(mut self, target_bytes: u64) -> Self {
        self.target_bytes = Some(target_bytes);
        self
    }

    /// Set the byte budget in kilobytes (1 KB = 1024 bytes).
    pub fn with_target_kb(self, kb: u64) -> Self {
        self.with_target_bytes(kb.saturating_mul(BYTES_PER_KB))
    }

    /// Check the request before any encoding happens.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.target_bytes == Some(0) {
            return Err(EncodeError::InvalidRequest(
                "target size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tunable constants of the quality search.
///
/// The defaults search the full 1-100 range with at most nine midpoint
/// probes, which is enough to pin down a single quality step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Lowest quality the search may return.
    pub min_quality: u8,
    /// Quality probed first; returned directly if it fits.
    pub max_quality: u8,
    /// Cap on midpoint probes after the two bound probes.
    pub max_iterations: u32,
    /// AVIF encoder speed (1 = slowest/best, 10 = fastest).
    pub avif_speed: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_quality: MIN_QUALITY,
            max_quality: MAX_QUALITY,
            // ceil(log2(100)) + 2
            max_iterations: 9,
            avif_speed: DEFAULT_AVIF_SPEED,
        }
    }
}

impl SearchConfig {
    /// Clamp every field into range and order the quality bounds.
    pub fn normalized(self) -> Self {
        let a = self.min_quality.clamp(MIN_QUALITY, MAX_QUALITY);
        let b = self.max_quality.clamp(MIN_QUALITY, MAX_QUALITY);
        Self {
            min_quality: a.min(b),
            max_quality: a.max(b),
            max_iterations: self.max_iterations,
            avif_speed: self.avif_speed.clamp(1, 10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = EncodeRequest::new(Codec::Webp);
        assert_eq!(req.quality_hint, 80);
        assert_eq!(req.target_bytes, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_quality_clamped() {
        assert_eq!(EncodeRequest::new(Codec::Jpeg).with_quality(0).quality_hint, 1);
        assert_eq!(
            EncodeRequest::new(Codec::Jpeg).with_quality(200).quality_hint,
            100
        );
    }

    #[test]
    fn test_target_bytes() {
        let req = EncodeRequest::new(Codec::Avif)
            .with_quality(60)
            .with_target_bytes(4096);
        assert_eq!(req.quality_hint, 60);
        assert_eq!(req.target_bytes, Some(4096));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_target_kb() {
        let req = EncodeRequest::new(Codec::Jpeg).with_target_kb(300);
        assert_eq!(req.target_bytes, Some(300 * 1024));

        let req = EncodeRequest::new(Codec::Jpeg).with_target_kb(u64::MAX);
        assert_eq!(req.target_bytes, Some(u64::MAX));
    }

    #[test]
    fn test_zero_target_rejected() {
        let req = EncodeRequest::new(Codec::Jpeg).with_target_bytes(0);
        assert!(matches!(req.validate(), Err(EncodeError::InvalidRequest(_))));
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.min_quality, 1);
        assert_eq!(config.max_quality, 100);
        assert_eq!(config.max_iterations, 9);
        assert_eq!(config.normalized(), config);
    }

    #[test]
    fn test_config_normalized() {
        let mut config = SearchConfig::default();
        config.min_quality = 90;
        config.max_quality = 0;
        config.avif_speed = 0;

        let config = config.normalized();
        assert_eq!(config.min_quality, 1);
        assert_eq!(config.max_quality, 90);
        assert_eq!(config.avif_speed, 1);
    }
}
