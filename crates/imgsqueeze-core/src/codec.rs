//! Output codecs and their naming conventions.

use crate::error::EncodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    /// Baseline JPEG (lossy, no alpha).
    Jpeg,
    /// Lossy WebP.
    Webp,
    /// AVIF (AV1 still image, lossy).
    Avif,
    /// PNG (lossless, quality is ignored).
    Png,
}

impl Codec {
    /// Every codec this crate knows about, in the order the UI lists them.
    pub const ALL: [Codec; 4] = [Codec::Webp, Codec::Jpeg, Codec::Avif, Codec::Png];

    /// Returns true if the codec has a quality knob.
    #[inline]
    pub fn is_lossy(self) -> bool {
        !matches!(self, Codec::Png)
    }

    /// MIME type string.
    pub fn mime_type(self) -> &'static str {
        match self {
            Codec::Jpeg => "image/jpeg",
            Codec::Webp => "image/webp",
            Codec::Avif => "image/avif",
            Codec::Png => "image/png",
        }
    }

    /// File extension without the dot.
    ///
    /// This is the MIME subtype, so JPEG output is named `.jpeg`.
    pub fn extension(self) -> &'static str {
        match self {
            Codec::Jpeg => "jpeg",
            Codec::Webp => "webp",
            Codec::Avif => "avif",
            Codec::Png => "png",
        }
    }

    /// Parse a MIME type such as `image/webp` (case-insensitive).
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(Codec::Jpeg),
            "image/webp" => Some(Codec::Webp),
            "image/avif" => Some(Codec::Avif),
            "image/png" => Some(Codec::Png),
            _ => None,
        }
    }

    /// Returns true if an encoder for this codec is compiled in.
    pub fn is_available(self) -> bool {
        match self {
            Codec::Jpeg => cfg!(feature = "jpeg"),
            Codec::Webp => cfg!(feature = "webp"),
            Codec::Avif => cfg!(feature = "avif"),
            Codec::Png => cfg!(feature = "png"),
        }
    }

    /// Codecs compiled into this build.
    pub fn available() -> Vec<Codec> {
        Self::ALL.into_iter().filter(|c| c.is_available()).collect()
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Codec::Jpeg => "JPEG",
            Codec::Webp => "WEBP",
            Codec::Avif => "AVIF",
            Codec::Png => "PNG",
        };
        f.write_str(name)
    }
}

impl FromStr for Codec {
    type Err = EncodeError;

    /// Accepts a short name (`jpg`, `jpeg`, `webp`, `avif`, `png`) or a MIME type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(codec) = Codec::from_mime(s) {
            return Ok(codec);
        }
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "jpe" | "jfif" => Ok(Codec::Jpeg),
            "webp" => Ok(Codec::Webp),
            "avif" => Ok(Codec::Avif),
            "png" => Ok(Codec::Png),
            _ => Err(EncodeError::UnknownCodec(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_round_trip() {
        for codec in Codec::ALL {
            assert_eq!(Codec::from_mime(codec.mime_type()), Some(codec));
        }
    }

    #[test]
    fn test_from_mime_variants() {
        assert_eq!(Codec::from_mime("image/jpg"), Some(Codec::Jpeg));
        assert_eq!(Codec::from_mime(" IMAGE/WEBP "), Some(Codec::Webp));
        assert_eq!(Codec::from_mime("image/gif"), None);
        assert_eq!(Codec::from_mime(""), None);
    }

    #[test]
    fn test_extension_matches_mime_subtype() {
        for codec in Codec::ALL {
            let subtype = codec.mime_type().split('/').nth(1).unwrap();
            assert_eq!(codec.extension(), subtype);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("jpg".parse::<Codec>().unwrap(), Codec::Jpeg);
        assert_eq!(".PNG".parse::<Codec>().unwrap(), Codec::Png);
        assert_eq!("image/avif".parse::<Codec>().unwrap(), Codec::Avif);
        assert!(matches!(
            "bmp".parse::<Codec>(),
            Err(EncodeError::UnknownCodec(_))
        ));
    }

    #[test]
    fn test_only_png_is_lossless() {
        assert!(Codec::Jpeg.is_lossy());
        assert!(Codec::Webp.is_lossy());
        assert!(Codec::Avif.is_lossy());
        assert!(!Codec::Png.is_lossy());
    }

    #[test]
    fn test_available_matches_features() {
        let available = Codec::available();
        for codec in Codec::ALL {
            assert_eq!(available.contains(&codec), codec.is_available());
        }
        #[cfg(feature = "jpeg")]
        assert!(available.contains(&Codec::Jpeg));
    }

    #[test]
    fn test_serde_lowercase() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;

        let de: StrDeserializer<'_, Error> = "webp".into_deserializer();
        let codec = Codec::deserialize(de).unwrap();
        assert_eq!(codec, Codec::Webp);
    }
}
