//! Lanczos resampling of decoded grids.

use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use la_core::config::{MAX_OUTPUT_PIXELS, ResizeTarget};
use la_core::grid::PixelGrid;

use crate::error::SourceError;

/// Resample `grid` to exactly `width × height` with a Lanczos3 filter.
///
/// Alpha is multiplied into the color channels before filtering and divided back out
/// afterwards, so the result is straight-alpha like the input.
///
/// # Errors
/// [`SourceError::Resize`] if either the source or the target is empty, or the target
/// exceeds [`MAX_OUTPUT_PIXELS`].
///
/// # Example
/// ```
/// use la_core::grid::PixelGrid;
/// use la_source::resize::resize;
/// let grid = PixelGrid::from_rgba(4, 4, vec![255; 64]).unwrap();
/// let small = resize(&grid, 2, 2).unwrap();
/// assert_eq!((small.width(), small.height()), (2, 2));
/// ```
pub fn resize(grid: &PixelGrid, width: u32, height: u32) -> Result<PixelGrid, SourceError> {
    let fail = |reason: String| SourceError::Resize {
        width,
        height,
        reason,
    };
    if width == 0 || height == 0 || grid.bounds().is_empty() {
        return Err(fail(format!(
            "cannot resample {}x{} to an empty image",
            grid.width(),
            grid.height()
        )));
    }
    if u64::from(width) * u64::from(height) > MAX_OUTPUT_PIXELS {
        return Err(fail(format!(
            "output exceeds the {MAX_OUTPUT_PIXELS} pixel limit"
        )));
    }

    let src = ImageRef::new(grid.width(), grid.height(), grid.as_raw(), PixelType::U8x4)
        .map_err(|e| fail(e.to_string()))?;
    let mut dst = Image::new(width, height, PixelType::U8x4);
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    Resizer::new()
        .resize(&src, &mut dst, &options)
        .map_err(|e| fail(e.to_string()))?;

    Ok(PixelGrid::from_rgba(width, height, dst.into_vec())?)
}

/// Apply a [`ResizeTarget`], passing the grid through untouched when no resampling is planned.
///
/// # Errors
/// [`la_core::CoreError::OutputTooLarge`] (as [`SourceError::Grid`]) for an oversized plan,
/// otherwise the errors of [`resize`].
pub fn apply_target(grid: PixelGrid, target: ResizeTarget) -> Result<PixelGrid, SourceError> {
    match target.plan(grid.width(), grid.height())? {
        Some((width, height)) => {
            log::info!(
                "resizing {}x{} -> {width}x{height}",
                grid.width(),
                grid.height()
            );
            resize(&grid, width, height)
        }
        None => {
            log::debug!("no resize for {}x{}", grid.width(), grid.height());
            Ok(grid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PixelGrid {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        PixelGrid::from_rgba(width, height, data).unwrap()
    }

    #[test]
    fn width_only_target_keeps_aspect() {
        let grid = solid(200, 100, [0, 0, 0, 255]);
        let out = apply_target(
            grid,
            ResizeTarget {
                width: 80,
                height: 0,
            },
        )
        .unwrap();
        assert_eq!((out.width(), out.height()), (80, 40));
    }

    #[test]
    fn exact_target_ignores_aspect() {
        let grid = solid(200, 100, [0, 0, 0, 255]);
        let out = apply_target(
            grid,
            ResizeTarget {
                width: 10,
                height: 30,
            },
        )
        .unwrap();
        assert_eq!((out.width(), out.height()), (10, 30));
    }

    #[test]
    fn zero_target_is_passthrough() {
        let grid = solid(7, 3, [1, 2, 3, 4]);
        let out = apply_target(
            grid.clone(),
            ResizeTarget {
                width: 0,
                height: 0,
            },
        )
        .unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn solid_color_survives_resampling() {
        let grid = solid(64, 32, [0, 0, 0, 255]);
        let out = resize(&grid, 16, 8).unwrap();
        for y in 0..out.height() {
            for x in 0..out.width() {
                let (r, g, b, a) = out.pixel(x, y);
                assert!(r <= 1 && g <= 1 && b <= 1, "({x}, {y}) = {r},{g},{b}");
                assert!(a >= 254, "({x}, {y}) alpha = {a}");
            }
        }
    }

    #[test]
    fn oversized_target_fails_cleanly() {
        let grid = solid(1, 1, [0, 0, 0, 255]);
        let err = apply_target(
            grid.clone(),
            ResizeTarget {
                width: u32::MAX,
                height: u32::MAX,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SourceError::Grid(la_core::CoreError::OutputTooLarge { .. })
        ));

        assert!(matches!(
            resize(&grid, u32::MAX, u32::MAX),
            Err(SourceError::Resize { .. })
        ));
        assert!(resize(&grid, 100_000, 100_000).is_err());
    }

    #[test]
    fn empty_target_rejected() {
        let grid = solid(4, 4, [0, 0, 0, 255]);
        assert!(matches!(
            resize(&grid, 0, 4),
            Err(SourceError::Resize { width: 0, .. })
        ));
    }
}
