use la_core::grid::PixelGrid;
use la_core::ramp::GlyphRamp;

/// Rec. 709 relative luminance weights (R, G, B).
pub const REC709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Perceptual brightness of a straight-alpha RGBA8 sample, in [0, 255].
///
/// Fully transparent pixels count as maximum brightness so they render as blank
/// glyphs instead of black.
///
/// # Example
/// ```
/// use la_ascii::luminance::luminosity;
/// assert_eq!(luminosity(0, 0, 0, 255), 0.0);
/// assert_eq!(luminosity(0, 0, 0, 0), 255.0);
/// ```
#[inline(always)]
#[must_use]
pub fn luminosity(r: u8, g: u8, b: u8, a: u8) -> f32 {
    if a == 0 {
        return 255.0;
    }
    let lum = REC709[0] * f32::from(r) + REC709[1] * f32::from(g) + REC709[2] * f32::from(b);
    lum.min(255.0)
}

/// Glyph for the pixel at absolute coordinates `(x, y)`.
#[inline(always)]
#[must_use]
pub fn glyph_at_pixel(grid: &PixelGrid, ramp: &GlyphRamp, x: u32, y: u32) -> char {
    let (r, g, b, a) = grid.pixel(x, y);
    ramp.glyph_for(luminosity(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert_eq!(luminosity(0, 0, 0, 255), 0.0);
        assert!((luminosity(255, 255, 255, 255) - 255.0).abs() < 1e-3);
        assert!(luminosity(255, 255, 255, 255) <= 255.0);
    }

    #[test]
    fn green_weighs_most() {
        let r = luminosity(255, 0, 0, 255);
        let g = luminosity(0, 255, 0, 255);
        let b = luminosity(0, 0, 255, 255);
        assert!(g > r && r > b);
        assert!((g - 182.376).abs() < 1e-2);
    }

    #[test]
    fn transparent_pixels_are_blank() {
        let ramp = GlyphRamp::standard();
        for rgb in [(0, 0, 0), (255, 0, 0), (12, 200, 40)] {
            let lum = luminosity(rgb.0, rgb.1, rgb.2, 0);
            assert_eq!(ramp.glyph_for(lum), ' ');
        }
    }

    #[test]
    fn partial_alpha_uses_color() {
        assert_eq!(luminosity(0, 0, 0, 1), 0.0);
    }

    #[test]
    fn brighter_pixels_never_get_denser_glyphs() {
        let ramp = GlyphRamp::standard();
        let mut samples: Vec<f32> = (0..=255u8)
            .flat_map(|v| [luminosity(v, 0, 0, 255), luminosity(0, v, 0, 255), luminosity(v, v, v, 255)])
            .collect();
        samples.sort_by(f32::total_cmp);
        for pair in samples.windows(2) {
            assert!(ramp.bucket(pair[1]) >= ramp.bucket(pair[0]));
        }
    }

    #[test]
    fn pixel_lookup() {
        let grid = PixelGrid::from_rgba(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
        let ramp = GlyphRamp::standard();
        assert_eq!(glyph_at_pixel(&grid, &ramp, 0, 0), '$');
        assert_eq!(glyph_at_pixel(&grid, &ramp, 1, 0), ' ');
    }
}
