use crate::config::Axis;

/// Errors raised while validating a run or addressing shared types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("missing required argument --{name}")]
    MissingArgument { name: &'static str },

    #[error("invalid {axis} {value}: must be zero or a positive integer")]
    InvalidDimension { axis: Axis, value: i64 },

    #[error("output of {width}x{height} exceeds the {max} pixel limit", max = crate::config::MAX_OUTPUT_PIXELS)]
    OutputTooLarge { width: u64, height: u64 },

    #[error("glyph index {index} outside a ramp of {len} glyphs")]
    QuantizationBounds { index: usize, len: usize },

    #[error("glyph ramp needs at least 2 glyphs, got {len}")]
    InvalidRamp { len: usize },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    PixelBuffer { expected: usize, actual: usize },
}
