use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::raster::MAX_COORD;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub circle: CircleConfig,
    pub fan: FanConfig,
    pub pattern: PatternConfig,
    pub colors: Palette,
    /// Image drawn underneath the pattern, scaled to the canvas.
    pub backdrop: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: 400, height: 400 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub radius: f64,
    pub bindings: usize,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self { radius: 180.0, bindings: 64 }
    }
}

/// The anchor fan: lines through `pivot`, the first one heading to `toward`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    pub pivot: [f64; 2],
    pub toward: [f64; 2],
    pub lines: usize,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self { pivot: [0.0, 0.0], toward: [1.0, 0.0], lines: 32 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Each point is tied to the one `skip` places further along.
    pub skip: usize,
    pub line_width: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self { skip: 25, line_width: 1.0 }
    }
}

/// Colours as [R, G, B].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub frame: [u8; 3],
    pub binding: [u8; 3],
    pub thread: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [16, 16, 24],
            frame: [90, 90, 110],
            binding: [255, 204, 51],
            thread: [230, 230, 230],
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pattern cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::InvalidArgument(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        let radius = self.circle.radius;
        if !(radius.is_finite() && radius > 0.0 && radius <= MAX_COORD) {
            return Err(Error::InvalidArgument(format!(
                "radius must be in (0, {MAX_COORD}], got {radius}"
            )));
        }
        if self.circle.bindings == 0 {
            return Err(Error::InvalidArgument("at least one binding is required".into()));
        }
        if self.fan.lines == 0 {
            return Err(Error::InvalidArgument("the fan needs at least one line".into()));
        }
        if self.pattern.skip == 0 {
            return Err(Error::InvalidArgument("skip must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!((config.canvas.width, config.canvas.height), (400, 400));
        assert!(config.backdrop.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            backdrop = "photo.png"

            [circle]
            bindings = 16

            [fan]
            pivot = [5.0, -5.0]

            [colors]
            thread = [255, 0, 0]
            "#,
        )
        .unwrap();
        assert_eq!(config.circle.bindings, 16);
        assert_eq!(config.circle.radius, 180.0);
        assert_eq!(config.fan.pivot, [5.0, -5.0]);
        assert_eq!(config.fan.lines, 32);
        assert_eq!(config.colors.thread, [255, 0, 0]);
        assert_eq!(config.backdrop.as_deref(), Some(Path::new("photo.png")));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let config = Config::from_toml("[circle]\nbindings = \"many\"");
        assert!(matches!(config, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_values_rejected() {
        for content in [
            "[circle]\nbindings = 0",
            "[fan]\nlines = 0",
            "[canvas]\nwidth = 0",
            "[circle]\nradius = -3.0",
        ] {
            let config = Config::from_toml(content);
            assert!(matches!(config, Err(Error::InvalidArgument(_))), "{content}");
        }
    }

    #[test]
    fn test_huge_radius_rejected() {
        let mut config = Config::default();
        config.circle.radius = 1e19;
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
        config.circle.radius = f64::NAN;
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
        let config = Config::from_toml("[circle]\nradius = 1e19");
        assert!(matches!(config, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_file() {
        let config = Config::load(Path::new("/no/such/threadcircle.toml"));
        assert!(matches!(config, Err(Error::Config(_))));
    }
}
