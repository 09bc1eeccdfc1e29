use std::io;
use std::path::PathBuf;

/// Errors from loading, decoding or resampling a source image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("resize to {width}x{height} failed: {reason}")]
    Resize {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error(transparent)]
    Grid(#[from] la_core::CoreError),
}

/// The byte stream is not an image any enabled codec can decode.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to read image stream")]
    Read(#[source] io::Error),

    #[error("unrecognized image format")]
    Unrecognized,

    #[error("{format} images are not supported (enabled: {enabled})")]
    Unsupported { format: String, enabled: String },

    #[error("invalid image data")]
    Malformed(#[source] image::ImageError),
}
