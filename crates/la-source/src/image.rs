//! Image decoding from byte streams and files.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use la_core::grid::PixelGrid;

use crate::codec::{Codec, CodecRegistry};
use crate::error::{DecodeError, SourceError};

/// Decode an encoded image from a byte stream.
///
/// The format is sniffed from the leading bytes and must be listed in `codecs`.
/// The result is straight-alpha RGBA8; wider channels are rescaled to 8 bits.
///
/// # Errors
/// [`SourceError::Decode`] if the stream cannot be read, is not a known format,
/// is a format missing from `codecs`, or holds corrupt data.
///
/// # Example
/// ```no_run
/// use la_source::codec::CodecRegistry;
/// use la_source::image::decode;
/// let grid = decode(std::io::stdin(), &CodecRegistry::enabled()).unwrap();
/// ```
pub fn decode<R: Read>(mut reader: R, codecs: &CodecRegistry) -> Result<PixelGrid, SourceError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(DecodeError::Read)?;
    decode_bytes(&bytes, codecs)
}

/// [`decode`] for an in-memory buffer.
///
/// # Errors
/// Same as [`decode`].
pub fn decode_bytes(bytes: &[u8], codecs: &CodecRegistry) -> Result<PixelGrid, SourceError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::Unrecognized)?;
    if !codecs.supports(format) {
        return Err(DecodeError::Unsupported {
            format: Codec::from_format(format)
                .map_or_else(|| format!("{format:?}").to_lowercase(), |c| c.name().to_string()),
            enabled: codecs.describe(),
        }
        .into());
    }

    let img =
        image::load_from_memory_with_format(bytes, format).map_err(DecodeError::Malformed)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("decoded {format:?} image {width}x{height}");

    Ok(PixelGrid::from_rgba(width, height, rgba.into_raw())?)
}

/// Open `path` and decode it.
///
/// # Errors
/// [`SourceError::FileOpen`] with the underlying I/O cause if the file cannot be opened,
/// otherwise the errors of [`decode`].
pub fn load_image(path: &Path, codecs: &CodecRegistry) -> Result<PixelGrid, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("reading {}", path.display());
    decode(BufReader::new(file), codecs)
}
