//! Stamp configuration files
//!
//! Provides configuration file handling and validation for stamp renders.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! A configuration holds the values a user edits in a front end:
//! - Legends (top text, bottom text)
//! - Font (display label or family name) and size in points
//! - Shape preset and canvas size
//! - Ink color as a hex string

use crate::error::{SettingsError, SettingsResult};
use crate::fonts::{label_for, resolve_font};
use sealkit_core::params::{MAX_FONT_SIZE_PT, MAX_STAMP_SIDE, MIN_FONT_SIZE_PT, MIN_STAMP_SIDE};
use sealkit_core::{Rgb, StampParameters, StampShape};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "sealkit";
/// File name used when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Default config location, `<config dir>/sealkit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(DEFAULT_CONFIG_FILE))
}

/// Editable stamp settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    /// Legend along the top arc
    pub top_text: String,
    /// Bottom code (circle) or caption (oval)
    pub bottom_text: String,
    /// Display label such as `宋体`, or a family name such as `SimSun`
    pub font: String,
    /// Font size in points
    pub font_size: u32,
    pub shape: StampShape,
    pub width: u32,
    pub height: u32,
    /// Ink color, `#rrggbb`
    pub color: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self::from_parameters(&StampParameters::default())
    }
}

impl StampConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(params: &StampParameters) -> Self {
        Self {
            top_text: params.top_text.clone(),
            bottom_text: params.bottom_text.clone(),
            font: label_for(params.font_family).to_string(),
            font_size: params.font_size_pt,
            shape: params.shape,
            width: params.width,
            height: params.height,
            color: params.stroke_color.to_hex(),
        }
    }

    /// Switch shape and reset the canvas to that shape's preset size
    pub fn apply_preset(&mut self, shape: StampShape) {
        let (width, height) = shape.default_size();
        self.shape = shape;
        self.width = width;
        self.height = height;
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded stamp config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved stamp config to {}", path.display());
        Ok(())
    }

    /// Validate configuration against the ranges a front end offers
    pub fn validate(&self) -> SettingsResult<()> {
        let sides = MIN_STAMP_SIDE..=MAX_STAMP_SIDE;
        if !sides.contains(&self.width) {
            return Err(SettingsError::invalid(
                "width",
                format!(
                    "{} is outside {}-{}",
                    self.width, MIN_STAMP_SIDE, MAX_STAMP_SIDE
                ),
            ));
        }
        if !sides.contains(&self.height) {
            return Err(SettingsError::invalid(
                "height",
                format!(
                    "{} is outside {}-{}",
                    self.height, MIN_STAMP_SIDE, MAX_STAMP_SIDE
                ),
            ));
        }

        if !(MIN_FONT_SIZE_PT..=MAX_FONT_SIZE_PT).contains(&self.font_size) {
            return Err(SettingsError::invalid(
                "font_size",
                format!(
                    "{} is outside {}-{}",
                    self.font_size, MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT
                ),
            ));
        }

        self.font_family()?;
        self.ink()?;
        Ok(())
    }

    fn font_family(&self) -> SettingsResult<sealkit_core::FontFamily> {
        resolve_font(&self.font)
            .ok_or_else(|| SettingsError::invalid("font", format!("unknown font '{}'", self.font)))
    }

    fn ink(&self) -> SettingsResult<Rgb> {
        self.color
            .parse()
            .map_err(|e: String| SettingsError::invalid("color", e))
    }

    /// Validated render parameters
    pub fn to_parameters(&self) -> SettingsResult<StampParameters> {
        self.validate()?;
        Ok(StampParameters {
            top_text: self.top_text.clone(),
            bottom_text: self.bottom_text.clone(),
            font_family: self.font_family()?,
            font_size_pt: self.font_size,
            shape: self.shape,
            width: self.width,
            height: self.height,
            stroke_color: self.ink()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealkit_core::FontFamily;

    #[test]
    fn test_defaults() {
        let config = StampConfig::default();
        assert_eq!(config.top_text, "广州顺丰速运有限公司");
        assert_eq!(config.bottom_text, "");
        assert_eq!(config.font, "宋体");
        assert_eq!(config.font_size, 30);
        assert_eq!(config.shape, StampShape::Circle);
        assert_eq!((config.width, config.height), (300, 300));
        assert_eq!(config.color, "#ff0000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_preset() {
        let mut config = StampConfig::default();
        config.apply_preset(StampShape::Oval);
        assert_eq!((config.width, config.height), (400, 280));
        config.apply_preset(StampShape::Circle);
        assert_eq!((config.width, config.height), (300, 300));
    }

    #[test]
    fn test_validate_ranges() {
        let mut config = StampConfig::default();
        config.width = 99;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { ref key, .. }) if key == "width"
        ));

        let mut config = StampConfig::default();
        config.height = 1001;
        assert!(config.validate().is_err());

        let mut config = StampConfig::default();
        config.font_size = 9;
        assert!(config.validate().is_err());
        config.font_size = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_font_and_color() {
        let mut config = StampConfig::default();
        config.font = "Papyrus".to_string();
        assert!(config.validate().is_err());

        let mut config = StampConfig::default();
        config.color = "#12345".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_parameters() {
        let config = StampConfig {
            font: "楷体".to_string(),
            color: "#0000ff".to_string(),
            ..StampConfig::default()
        };
        let params = config.to_parameters().unwrap();
        assert_eq!(params.font_family, FontFamily::KaiTi);
        assert_eq!(params.stroke_color, Rgb::new(0, 0, 255));
        assert_eq!(params.font_size_pt, 30);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/seal.JSON")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("seal.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("seal.yaml")),
            Err(SettingsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("sealkit/config.toml"));
        }
    }
}
