//! Image sources for lumascii: codec registry, decoding and resampling.

pub mod codec;
pub mod error;
pub mod image;
pub mod resize;

pub use codec::{Codec, CodecRegistry};
pub use error::{DecodeError, SourceError};
