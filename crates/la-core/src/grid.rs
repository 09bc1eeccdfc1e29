use crate::error::CoreError;

/// Half-open rectangle `[min_x, max_x) × [min_y, max_y)` in pixel coordinates.
///
/// Grids do not have to start at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    /// Bounds of a `width × height` grid anchored at (0, 0).
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: width,
            max_y: height,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.min_x..self.max_x).contains(&x) && (self.min_y..self.max_y).contains(&y)
    }
}

/// Decoded image: straight-alpha RGBA8 samples, row-major.
///
/// Immutable once built; the mapper only reads it.
///
/// # Example
/// ```
/// use la_core::grid::PixelGrid;
/// let grid = PixelGrid::from_rgba(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
/// assert_eq!(grid.pixel(1, 0), (255, 255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    bounds: Bounds,
    data: Vec<u8>,
}

impl PixelGrid {
    pub const CHANNELS: usize = 4;

    /// Wrap an RGBA8 buffer covering `bounds`.
    ///
    /// # Errors
    /// Returns [`CoreError::PixelBuffer`] if `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn new(bounds: Bounds, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = bounds.width() as usize * bounds.height() as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(CoreError::PixelBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { bounds, data })
    }

    /// Wrap an RGBA8 buffer anchored at the origin.
    ///
    /// # Errors
    /// Same as [`PixelGrid::new`].
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        Self::new(Bounds::from_size(width, height), data)
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// RGBA sample at absolute coordinates `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside [`PixelGrid::bounds`].
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(self.bounds.contains(x, y), "({x}, {y}) hors de {:?}", self.bounds);
        let idx = self.offset(x, y);
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Raw RGBA bytes of row `y` (absolute coordinate).
    #[must_use]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.offset(self.bounds.min_x, y);
        let len = self.bounds.width() as usize * Self::CHANNELS;
        &self.data[start..start + len]
    }

    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        let local_x = (x - self.bounds.min_x) as usize;
        let local_y = (y - self.bounds.min_y) as usize;
        (local_y * self.bounds.width() as usize + local_x) * Self::CHANNELS
    }
}
