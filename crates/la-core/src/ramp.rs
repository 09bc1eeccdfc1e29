use crate::error::CoreError;

/// 70 caractères, Paul Bourke, dense→clair. Index 0 is the darkest-looking glyph,
/// the last one is a space.
pub const STANDARD_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Ordered glyphs used to quantize luminosity into brightness buckets.
///
/// The bucket width (`step`) is derived from the ramp length, so a luminosity of
/// exactly 255 always lands on the last glyph.
///
/// # Example
/// ```
/// use la_core::ramp::GlyphRamp;
/// let ramp = GlyphRamp::standard();
/// assert_eq!(ramp.len(), 70);
/// assert_eq!(ramp.glyph_for(0.0), '$');
/// assert_eq!(ramp.glyph_for(255.0), ' ');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    step: f32,
}

impl GlyphRamp {
    /// Build a ramp from a string ordered densest→lightest.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRamp`] if the ramp has fewer than 2 glyphs.
    ///
    /// # Example
    /// ```
    /// use la_core::ramp::GlyphRamp;
    /// let ramp = GlyphRamp::new("@#. ").unwrap();
    /// assert_eq!(ramp.glyph_for(128.0), '.');
    /// assert!(GlyphRamp::new("@").is_err());
    /// ```
    pub fn new(glyphs: &str) -> Result<Self, CoreError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(CoreError::InvalidRamp { len: glyphs.len() });
        }
        let step = 256.0 / glyphs.len() as f32;
        Ok(Self { glyphs, step })
    }

    /// The 70-glyph reference ramp ([`STANDARD_RAMP`]).
    #[must_use]
    pub fn standard() -> Self {
        let glyphs: Vec<char> = STANDARD_RAMP.chars().collect();
        let step = 256.0 / glyphs.len() as f32;
        Self { glyphs, step }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a ramp holds at least two glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Luminosity span covered by one bucket.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Bucket index for a luminosity in [0, 255].
    ///
    /// Out-of-range input is clamped first, and the index never exceeds `len() - 1`.
    #[inline(always)]
    #[must_use]
    pub fn bucket(&self, luminosity: f32) -> usize {
        let lum = if luminosity.is_nan() {
            0.0
        } else {
            luminosity.clamp(0.0, 255.0)
        };
        ((lum / self.step) as usize).min(self.glyphs.len() - 1)
    }

    /// Glyph for a luminosity in [0, 255].
    #[inline(always)]
    #[must_use]
    pub fn glyph_for(&self, luminosity: f32) -> char {
        self.glyphs[self.bucket(luminosity)]
    }

    /// Glyph at an explicit bucket index.
    ///
    /// # Errors
    /// Returns [`CoreError::QuantizationBounds`] if `index` is past the end of the ramp.
    pub fn glyph_at(&self, index: usize) -> Result<char, CoreError> {
        self.glyphs
            .get(index)
            .copied()
            .ok_or(CoreError::QuantizationBounds {
                index,
                len: self.glyphs.len(),
            })
    }

    #[must_use]
    pub fn densest(&self) -> char {
        self.glyphs[0]
    }

    #[must_use]
    pub fn lightest(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::standard()
    }
}
