//! Luminance-to-glyph mapping for lumascii.

pub mod luminance;
pub mod render;

pub use luminance::luminosity;
pub use render::{lines, render_to_string, write_ascii};
