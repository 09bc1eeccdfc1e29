use std::path::PathBuf;

use clap::{ArgAction, Parser};
use la_core::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderConfig};
use la_core::error::CoreError;

/// lumascii: turn an image into luminance-graded ASCII art.
#[derive(Parser, Debug, Clone)]
#[command(name = "lumascii", version, about)]
pub struct Cli {
    /// Image to convert (PNG, plus JPEG/BMP/GIF when built with those features).
    /// Relative paths resolve against the current directory.
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Output width in characters. 0 = derive from --height.
    #[arg(long, value_name = "INT", default_value_t = i64::from(DEFAULT_WIDTH), allow_negative_numbers = true)]
    pub width: i64,

    /// Output height in lines. 0 = derive from --width, keeping the aspect ratio.
    #[arg(long, value_name = "INT", default_value_t = i64::from(DEFAULT_HEIGHT), allow_negative_numbers = true)]
    pub height: i64,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate the raw arguments into a [`RenderConfig`].
    ///
    /// # Errors
    /// `MissingArgument` without `--image`, `InvalidDimension` for negative sizes.
    pub fn into_config(self) -> Result<RenderConfig, CoreError> {
        RenderConfig::new(self.image, self.width, self.height)
    }

    /// Log filter implied by `-v`.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use la_core::config::{Axis, ResizeTarget};

    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["lumascii", "--image", "cat.png"]).unwrap();
        assert_eq!(cli.width, 80);
        assert_eq!(cli.height, 0);
        assert_eq!(cli.log_filter(), "warn");
        let config = cli.into_config().unwrap();
        assert_eq!(config.target, ResizeTarget::default());
    }

    #[test]
    fn explicit_dimensions() {
        let cli = Cli::try_parse_from([
            "lumascii", "--image", "cat.png", "--width", "120", "--height", "30",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(
            config.target,
            ResizeTarget {
                width: 120,
                height: 30
            }
        );
    }

    #[test]
    fn negative_width_parses_then_fails_validation() {
        let cli =
            Cli::try_parse_from(["lumascii", "--image", "cat.png", "--width", "-1"]).unwrap();
        assert_eq!(cli.width, -1);
        assert!(matches!(
            cli.into_config(),
            Err(CoreError::InvalidDimension {
                axis: Axis::Width,
                value: -1
            })
        ));
    }

    #[test]
    fn missing_image_fails_validation() {
        let cli = Cli::try_parse_from(["lumascii"]).unwrap();
        assert!(matches!(
            cli.into_config(),
            Err(CoreError::MissingArgument { name: "image" })
        ));
    }

    #[test]
    fn verbosity_levels() {
        let cli = Cli::try_parse_from(["lumascii", "-vv"]).unwrap();
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn non_numeric_width_rejected_by_parser() {
        assert!(Cli::try_parse_from(["lumascii", "--image", "a.png", "--width", "wide"]).is_err());
    }
}
