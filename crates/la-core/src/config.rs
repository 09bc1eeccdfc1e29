use std::fmt;
use std::path::PathBuf;

use crate::error::CoreError;

/// Default output width in characters (fits a standard terminal).
pub const DEFAULT_WIDTH: u32 = 80;

/// Default output height: 0 = derived from the width, aspect ratio preserved.
pub const DEFAULT_HEIGHT: u32 = 0;

/// Largest output grid a resize may produce (64 Mi pixels, 256 MiB of RGBA8).
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 26;

/// Which dimension a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Requested output size. A zero dimension means "derive from the other one".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeTarget {
    pub width: u32,
    pub height: u32,
}

impl Default for ResizeTarget {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ResizeTarget {
    /// Validate user-supplied dimensions.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimension`] for a negative value (width is checked first)
    /// or one that does not fit in a `u32`.
    ///
    /// # Example
    /// ```
    /// use la_core::config::ResizeTarget;
    /// assert!(ResizeTarget::from_signed(80, 0).is_ok());
    /// assert!(ResizeTarget::from_signed(-1, 0).is_err());
    /// ```
    pub fn from_signed(width: i64, height: i64) -> Result<Self, CoreError> {
        let check = |axis: Axis, value: i64| {
            u32::try_from(value).map_err(|_| CoreError::InvalidDimension { axis, value })
        };
        Ok(Self {
            width: check(Axis::Width, width)?,
            height: check(Axis::Height, height)?,
        })
    }

    /// Target size for a `src_width × src_height` source, or `None` when no resampling is needed.
    ///
    /// - both zero: skip resizing
    /// - one zero: derived from the other, aspect ratio preserved, rounded, at least 1
    /// - both positive: exact size, aspect ratio not preserved
    ///
    /// A plan equal to the source size, or an empty source, also yields `None`.
    ///
    /// # Errors
    /// [`CoreError::OutputTooLarge`] if a derived dimension does not fit in a `u32`
    /// or the output would exceed [`MAX_OUTPUT_PIXELS`].
    ///
    /// # Example
    /// ```
    /// use la_core::config::ResizeTarget;
    /// let target = ResizeTarget { width: 80, height: 0 };
    /// assert_eq!(target.plan(200, 100).unwrap(), Some((80, 40)));
    /// ```
    pub fn plan(&self, src_width: u32, src_height: u32) -> Result<Option<(u32, u32)>, CoreError> {
        if src_width == 0 || src_height == 0 {
            return Ok(None);
        }
        let scaled = |value: u32, num: u32, den: u32| -> u64 {
            let v = (f64::from(value) * f64::from(num) / f64::from(den)).round();
            (v as u64).max(1)
        };
        let (width, height) = match (self.width, self.height) {
            (0, 0) => return Ok(None),
            (w, 0) => (u64::from(w), scaled(src_height, w, src_width)),
            (0, h) => (scaled(src_width, h, src_height), u64::from(h)),
            (w, h) => (u64::from(w), u64::from(h)),
        };
        let too_large = || CoreError::OutputTooLarge { width, height };
        let pixels = width.checked_mul(height).ok_or_else(too_large)?;
        if pixels > MAX_OUTPUT_PIXELS {
            return Err(too_large());
        }
        let planned = (
            u32::try_from(width).map_err(|_| too_large())?,
            u32::try_from(height).map_err(|_| too_large())?,
        );
        Ok((planned != (src_width, src_height)).then_some(planned))
    }
}

/// Validated run configuration, built once from the command line and passed by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Source image, relative to the current working directory.
    pub image: PathBuf,
    pub target: ResizeTarget,
}

impl RenderConfig {
    /// # Errors
    /// [`CoreError::MissingArgument`] if no image is given (or the path is empty),
    /// [`CoreError::InvalidDimension`] for negative dimensions.
    pub fn new(image: Option<PathBuf>, width: i64, height: i64) -> Result<Self, CoreError> {
        let image = image
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(CoreError::MissingArgument { name: "image" })?;
        let target = ResizeTarget::from_signed(width, height)?;
        log::debug!(
            "config: image={} target={}x{}",
            image.display(),
            target.width,
            target.height
        );
        Ok(Self { image, target })
    }
}
