//! Shared types for lumascii: glyph ramp, pixel grid, validated configuration and errors.

pub mod config;
pub mod error;
pub mod grid;
pub mod ramp;

pub use config::{RenderConfig, ResizeTarget};
pub use error::CoreError;
pub use grid::{Bounds, PixelGrid};
pub use ramp::GlyphRamp;
