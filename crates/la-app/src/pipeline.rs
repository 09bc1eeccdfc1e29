use std::io::Write;

use anyhow::Context;
use la_core::config::RenderConfig;
use la_core::grid::PixelGrid;
use la_core::ramp::GlyphRamp;
use la_source::codec::CodecRegistry;

/// Decode the configured image and apply the resize target.
///
/// # Errors
/// Returns an error if the file cannot be opened, decoded or resampled.
pub fn load_source(config: &RenderConfig, codecs: &CodecRegistry) -> anyhow::Result<PixelGrid> {
    log::info!(
        "loading {} (codecs: {})",
        config.image.display(),
        codecs.describe()
    );
    let grid = la_source::image::load_image(&config.image, codecs)?;
    let grid = la_source::resize::apply_target(grid, config.target)
        .with_context(|| format!("cannot resize {}", config.image.display()))?;
    Ok(grid)
}

/// Run the whole transform and write the art to `out`.
///
/// Nothing reaches `out` unless decoding and resizing both succeeded.
///
/// # Errors
/// Returns an error if loading fails or `out` cannot be written.
///
/// # Example
/// ```no_run
/// use la_app::pipeline::run;
/// use la_core::config::RenderConfig;
///
/// let config = RenderConfig::new(Some("cat.png".into()), 80, 0).unwrap();
/// run(config, &mut std::io::stdout().lock()).unwrap();
/// ```
pub fn run<W: Write>(config: RenderConfig, out: &mut W) -> anyhow::Result<()> {
    let codecs = CodecRegistry::enabled();
    let grid = load_source(&config, &codecs)?;
    let ramp = GlyphRamp::standard();
    log::info!(
        "rendering {}x{} with a {}-glyph ramp",
        grid.width(),
        grid.height(),
        ramp.len()
    );
    la_ascii::write_ascii(&grid, &ramp, out).context("failed to write ASCII art")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use image::{Rgba, RgbaImage};

    use super::*;

    fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> std::path::PathBuf {
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn black_square() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(
            dir.path(),
            "black.png",
            &RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])),
        );
        let config = RenderConfig::new(Some(path), 2, 2).unwrap();
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "$$\n$$\n");
    }

    #[test]
    fn failed_decode_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"not a png").unwrap();
        let config = RenderConfig::new(Some(path), 80, 0).unwrap();
        let mut out = Vec::new();
        assert!(run(config, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn default_width_scales_height() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(
            dir.path(),
            "wide.png",
            &RgbaImage::from_pixel(200, 100, Rgba([255, 255, 255, 255])),
        );
        let config = RenderConfig::new(Some(path), 80, 0).unwrap();
        let grid = load_source(&config, &CodecRegistry::enabled()).unwrap();
        assert_eq!((grid.width(), grid.height()), (80, 40));
    }
}
