//! Row-major emission of glyph lines.
//!
//! Rows are produced top to bottom and glyphs left to right; swapping the two
//! loops would rotate the picture.

use std::io::{self, Write};

use la_core::grid::PixelGrid;
use la_core::ramp::GlyphRamp;
use rayon::prelude::*;

use crate::luminance::glyph_at_pixel;

/// Grids with at least this many pixels are mapped with [`render_rows_par`].
pub const PARALLEL_THRESHOLD: u64 = 128 * 128;

/// Lazy iterator over the glyph lines of a grid, one `String` per row, without the newline.
///
/// # Example
/// ```
/// use la_core::grid::PixelGrid;
/// use la_core::ramp::GlyphRamp;
/// use la_ascii::render::lines;
///
/// let grid = PixelGrid::from_rgba(2, 1, vec![0, 0, 0, 255, 0, 0, 0, 0]).unwrap();
/// let ramp = GlyphRamp::standard();
/// let rows: Vec<String> = lines(&grid, &ramp).collect();
/// assert_eq!(rows, vec!["$ ".to_string()]);
/// ```
pub struct AsciiLines<'a> {
    grid: &'a PixelGrid,
    ramp: &'a GlyphRamp,
    next_y: u32,
    end_y: u32,
}

impl Iterator for AsciiLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next_y >= self.end_y {
            return None;
        }
        let line = row_text(self.grid, self.ramp, self.next_y);
        self.next_y += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.end_y - self.next_y) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AsciiLines<'_> {}

#[must_use]
pub fn lines<'a>(grid: &'a PixelGrid, ramp: &'a GlyphRamp) -> AsciiLines<'a> {
    let bounds = grid.bounds();
    let end_y = if bounds.is_empty() {
        bounds.min_y
    } else {
        bounds.max_y
    };
    AsciiLines {
        grid,
        ramp,
        next_y: bounds.min_y,
        end_y,
    }
}

/// Glyphs of row `y` (absolute coordinate), left to right.
#[must_use]
pub fn row_text(grid: &PixelGrid, ramp: &GlyphRamp, y: u32) -> String {
    let bounds = grid.bounds();
    (bounds.min_x..bounds.max_x)
        .map(|x| glyph_at_pixel(grid, ramp, x, y))
        .collect()
}

/// All rows mapped in parallel, returned in row order.
#[must_use]
pub fn render_rows_par(grid: &PixelGrid, ramp: &GlyphRamp) -> Vec<String> {
    let bounds = grid.bounds();
    if bounds.is_empty() {
        return Vec::new();
    }
    (bounds.min_y..bounds.max_y)
        .into_par_iter()
        .map(|y| row_text(grid, ramp, y))
        .collect()
}

/// Write every row followed by `\n`.
///
/// Large grids are mapped with [`render_rows_par`]; the bytes written are the same either way.
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_ascii<W: Write>(grid: &PixelGrid, ramp: &GlyphRamp, out: &mut W) -> io::Result<()> {
    let pixels = u64::from(grid.width()) * u64::from(grid.height());
    if pixels >= PARALLEL_THRESHOLD {
        log::debug!("mapping {pixels} pixels on the rayon pool");
        for line in render_rows_par(grid, ramp) {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
    } else {
        for line in lines(grid, ramp) {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()
}

/// The whole rendering as one string, newline after each row.
#[must_use]
pub fn render_to_string(grid: &PixelGrid, ramp: &GlyphRamp) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for line in lines(grid, ramp) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
