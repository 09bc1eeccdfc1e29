//! Explicit format dispatch: decoding only accepts formats listed in a [`CodecRegistry`].

use std::fmt;

use image::ImageFormat;

/// Image encodings lumascii knows how to decode.
///
/// PNG is always compiled in; the others follow the cargo features of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Png,
    Jpeg,
    Bmp,
    Gif,
}

impl Codec {
    pub const ALL: [Codec; 4] = [Codec::Png, Codec::Jpeg, Codec::Bmp, Codec::Gif];

    #[must_use]
    pub fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Bmp => Some(Self::Bmp),
            ImageFormat::Gif => Some(Self::Gif),
            _ => None,
        }
    }

    #[must_use]
    pub fn format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Bmp => ImageFormat::Bmp,
            Self::Gif => ImageFormat::Gif,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
        }
    }

    /// Whether the decoder for this codec was built into the binary.
    #[must_use]
    pub fn is_compiled(self) -> bool {
        match self {
            Self::Png => true,
            Self::Jpeg => cfg!(feature = "jpeg"),
            Self::Bmp => cfg!(feature = "bmp"),
            Self::Gif => cfg!(feature = "gif"),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of codecs a decode call may dispatch to.
///
/// # Example
/// ```
/// use la_source::codec::{Codec, CodecRegistry};
/// use image::ImageFormat;
///
/// let registry = CodecRegistry::new([Codec::Png]);
/// assert!(registry.supports(ImageFormat::Png));
/// assert!(!registry.supports(ImageFormat::Jpeg));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecRegistry {
    codecs: Vec<Codec>,
}

impl CodecRegistry {
    /// Registry holding exactly `codecs` (duplicates dropped, order kept).
    pub fn new(codecs: impl IntoIterator<Item = Codec>) -> Self {
        let mut list: Vec<Codec> = Vec::new();
        for codec in codecs {
            if !list.contains(&codec) {
                list.push(codec);
            }
        }
        Self { codecs: list }
    }

    /// Every codec compiled into this build.
    #[must_use]
    pub fn enabled() -> Self {
        Self::new(Codec::ALL.into_iter().filter(|c| c.is_compiled()))
    }

    #[must_use]
    pub fn supports(&self, format: ImageFormat) -> bool {
        self.codecs.iter().any(|c| c.format() == format)
    }

    #[must_use]
    pub fn codecs(&self) -> &[Codec] {
        &self.codecs
    }

    /// Comma-separated codec names, for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        self.codecs
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_always_enabled() {
        let registry = CodecRegistry::enabled();
        assert!(registry.supports(ImageFormat::Png));
        assert_eq!(registry.codecs()[0], Codec::Png);
    }

    #[test]
    fn enabled_follows_features() {
        let registry = CodecRegistry::enabled();
        assert_eq!(
            registry.supports(ImageFormat::Jpeg),
            cfg!(feature = "jpeg")
        );
        assert_eq!(registry.supports(ImageFormat::Gif), cfg!(feature = "gif"));
    }

    #[test]
    fn unknown_formats_unsupported() {
        let registry = CodecRegistry::new(Codec::ALL);
        assert!(!registry.supports(ImageFormat::Tiff));
        assert!(!registry.supports(ImageFormat::WebP));
    }

    #[test]
    fn duplicates_dropped() {
        let registry = CodecRegistry::new([Codec::Png, Codec::Gif, Codec::Png]);
        assert_eq!(registry.codecs(), &[Codec::Png, Codec::Gif]);
        assert_eq!(registry.describe(), "png, gif");
    }

    #[test]
    fn format_round_trip() {
        for codec in Codec::ALL {
            assert_eq!(Codec::from_format(codec.format()), Some(codec));
        }
    }
}
