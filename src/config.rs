//! Picker configuration (huepick.yaml).
//!
//! Defines widget sizes, the host layout gap, an optional initial base hue
//! for the palette, and output settings for the CLI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::render::scaled_size;
use crate::types::Colour;

/// Standard config filename.
pub const CONFIG_FILENAME: &str = "huepick.yaml";

/// Fixed pixel size of one widget surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

/// Picker configuration loaded from huepick.yaml.
///
/// Every field is optional in the file; missing fields take the values from
/// `Config::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hue slider surface size.
    pub slider: SurfaceConfig,

    /// Palette surface size.
    pub palette: SurfaceConfig,

    /// Horizontal space between the palette and the slider on the host.
    pub gap: u32,

    /// Palette base hue before the slider supplies one. Opaque white if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_hue: Option<Colour>,

    /// Output directory for rendered PNGs.
    pub output: PathBuf,

    /// Integer upscale factor for PNG output.
    pub scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slider: SurfaceConfig {
                width: 30,
                height: 150,
            },
            palette: SurfaceConfig {
                width: 150,
                height: 150,
            },
            gap: 10,
            base_hue: None,
            output: PathBuf::from("dist"),
            scale: 1,
        }
    }
}

impl Config {
    /// Load config from a huepick.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PickerError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| PickerError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `huepick.yaml` from `dir`, or fall back to defaults if absent.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            log::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PickerError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Reject surfaces and layouts that cannot be built or written.
    ///
    /// Surfaces must be non-zero, the host layout width must fit in `u32`, and
    /// every surface upscaled by `scale` must too.
    pub fn validate(&self) -> Result<()> {
        for (name, surface) in [("slider", self.slider), ("palette", self.palette)] {
            if surface.width == 0 || surface.height == 0 {
                return Err(PickerError::Config {
                    message: format!(
                        "{} size must be non-zero, got {}x{}",
                        name, surface.width, surface.height
                    ),
                    help: Some(format!("Set {}.width and {}.height to at least 1", name, name)),
                });
            }
        }

        let host_width = self
            .palette
            .width
            .checked_add(self.gap)
            .and_then(|w| w.checked_add(self.slider.width));
        if host_width.is_none() {
            return Err(PickerError::Config {
                message: format!(
                    "palette width {} + gap {} + slider width {} is too large",
                    self.palette.width, self.gap, self.slider.width
                ),
                help: Some("Reduce gap or the widget widths".to_string()),
            });
        }

        self.validate_scale(self.scale)
    }

    /// Check that both surfaces can be upscaled by `scale` for PNG output.
    pub fn validate_scale(&self, scale: u32) -> Result<()> {
        for surface in [self.slider, self.palette] {
            scaled_size(surface.width, surface.height, scale)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full() {
        let yaml = r#"
slider:
  width: 20
  height: 200
palette:
  width: 256
  height: 128
gap: 4
base_hue: "rgba(255, 0, 0, 1)"
output: build/picker
scale: 2
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.slider, SurfaceConfig { width: 20, height: 200 });
        assert_eq!(config.palette, SurfaceConfig { width: 256, height: 128 });
        assert_eq!(config.gap, 4);
        assert_eq!(config.base_hue, Some(Colour::RED));
        assert_eq!(config.output, PathBuf::from("build/picker"));
        assert_eq!(config.scale, 2);
    }

    #[test]
    fn test_parse_hex_base_hue() {
        let config = Config::parse("base_hue: \"#00FF00\"").unwrap();
        assert_eq!(config.base_hue, Some(Colour::GREEN));
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = Config::parse("gap: 0").unwrap();
        assert_eq!(config.gap, 0);
        assert_eq!(config.slider, Config::default().slider);
        assert_eq!(config.scale, 1);
    }

    #[test]
    fn test_parse_rejects_zero_size() {
        let err = Config::parse("slider:\n  width: 0\n  height: 10\n").unwrap_err();
        assert!(matches!(err, PickerError::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_overflowing_scale() {
        let err = Config::parse("scale: 4294967295").unwrap_err();
        assert!(matches!(err, PickerError::Config { .. }));

        // 150 * 28633116 is the first multiple of 150 past u32::MAX.
        assert!(Config::parse("scale: 28633116").is_err());
        assert!(Config::parse("scale: 28633115").is_ok());
    }

    #[test]
    fn test_parse_rejects_overflowing_gap() {
        let err = Config::parse("gap: 4294967295").unwrap_err();
        assert!(matches!(err, PickerError::Config { .. }));
        assert!(Config::parse("gap: 4294967116").is_err());
        assert!(Config::parse("gap: 4294967115").is_ok());
    }

    #[test]
    fn test_validate_scale_override() {
        let config = Config::default();
        assert!(config.validate_scale(4).is_ok());
        assert!(config.validate_scale(u32::MAX).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_colour() {
        assert!(Config::parse("base_hue: not-a-colour").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            base_hue: Some(Colour::MAGENTA),
            ..Config::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_discover_missing_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "scale: 3\n").unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap().scale, 3);
    }
}
