use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::lighting::DEFAULT_GLOSS_MULTIPLIER;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Textured, lit cube viewer")]
pub struct Args {
    /// Initial window width in logical pixels
    #[arg(long, short = 'W', default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, short = 'H', default_value_t = 600)]
    pub height: u32,

    /// Texture atlas: three 16x16 tiles stacked vertically
    #[arg(long, default_value = "assets/texture.png")]
    pub texture: PathBuf,

    /// Milliseconds between texture tile changes
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(u64).range(1..))]
    pub texture_interval_ms: u64,

    /// Milliseconds between 1 degree spin steps while animating
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    pub spin_interval_ms: u64,

    /// Strength of the gloss highlight (0.5 and 1.5 are the usual variants)
    #[arg(long, default_value_t = DEFAULT_GLOSS_MULTIPLIER)]
    pub gloss_multiplier: f32,

    /// Start with the gloss highlight switched off
    #[arg(long)]
    pub no_gloss: bool,

    /// Start with the cube spinning
    #[arg(long)]
    pub animate: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub window_size: (u32, u32),
    pub texture_path: PathBuf,
    pub texture_interval: Duration,
    pub spin_interval: Duration,
    pub gloss_multiplier: f32,
    pub gloss_enabled: bool,
    pub animation_enabled: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: (800, 600),
            texture_path: PathBuf::from("assets/texture.png"),
            texture_interval: crate::animation::DEFAULT_TEXTURE_INTERVAL,
            spin_interval: crate::animation::DEFAULT_SPIN_INTERVAL,
            gloss_multiplier: DEFAULT_GLOSS_MULTIPLIER,
            gloss_enabled: true,
            animation_enabled: false,
        }
    }
}

impl From<Args> for ViewerConfig {
    fn from(args: Args) -> Self {
        Self {
            window_size: (args.width.max(1), args.height.max(1)),
            texture_path: args.texture,
            texture_interval: Duration::from_millis(args.texture_interval_ms),
            spin_interval: Duration::from_millis(args.spin_interval_ms),
            gloss_multiplier: args.gloss_multiplier,
            gloss_enabled: !args.no_gloss,
            animation_enabled: args.animate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer_defaults() {
        let args = Args::try_parse_from(["textured-cube-viewer"]).unwrap();
        assert_eq!(ViewerConfig::from(args), ViewerConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "textured-cube-viewer",
            "-W",
            "1024",
            "--texture",
            "other.png",
            "--gloss-multiplier",
            "1.5",
            "--no-gloss",
            "--animate",
            "--texture-interval-ms",
            "250",
        ])
        .unwrap();
        let config = ViewerConfig::from(args);
        assert_eq!(config.window_size, (1024, 600));
        assert_eq!(config.texture_path, PathBuf::from("other.png"));
        assert_eq!(config.gloss_multiplier, 1.5);
        assert!(!config.gloss_enabled);
        assert!(config.animation_enabled);
        assert_eq!(config.texture_interval, Duration::from_millis(250));
    }

    #[test]
    fn zero_intervals_are_rejected() {
        assert!(Args::try_parse_from(["textured-cube-viewer", "--spin-interval-ms", "0"]).is_err());
    }
}
