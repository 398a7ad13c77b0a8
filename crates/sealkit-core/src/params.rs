//! Render parameters
//!
//! [`StampParameters`] is the frozen input of one render. It is built by the
//! producer (settings file, command line) and handed to the composer by
//! reference; nothing downstream mutates it.

use crate::types::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest width/height the producer accepts
pub const MIN_STAMP_SIDE: u32 = 100;
/// Largest width/height the producer accepts
pub const MAX_STAMP_SIDE: u32 = 1000;
/// Smallest font size the producer accepts
pub const MIN_FONT_SIZE_PT: u32 = 10;
/// Largest font size the producer accepts
pub const MAX_FONT_SIZE_PT: u32 = 100;

/// Outline of the seal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampShape {
    /// Round seal; top legend and bottom code both follow the ring
    Circle,
    /// Oval seal; curved top legend, straight bottom caption
    Oval,
}

impl Default for StampShape {
    fn default() -> Self {
        Self::Circle
    }
}

impl StampShape {
    /// Canvas size a fresh stamp of this shape starts with
    pub fn default_size(&self) -> (u32, u32) {
        match self {
            Self::Circle => (300, 300),
            Self::Oval => (400, 280),
        }
    }
}

impl fmt::Display for StampShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Oval => write!(f, "oval"),
        }
    }
}

impl FromStr for StampShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" | "round" | "圆形" => Ok(Self::Circle),
            "oval" | "ellipse" | "椭圆" => Ok(Self::Oval),
            _ => Err(format!("Unknown stamp shape: {}", s)),
        }
    }
}

/// Typefaces offered for seal legends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    SimSun,
    KaiTi,
    MicrosoftYaHei,
    SimHei,
    FangSong,
    LiSu,
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::SimSun
    }
}

impl FontFamily {
    pub const ALL: [FontFamily; 6] = [
        Self::SimSun,
        Self::KaiTi,
        Self::MicrosoftYaHei,
        Self::SimHei,
        Self::FangSong,
        Self::LiSu,
    ];

    /// Family name handed to font backends
    pub fn family_name(&self) -> &'static str {
        match self {
            Self::SimSun => "SimSun",
            Self::KaiTi => "KaiTi",
            Self::MicrosoftYaHei => "Microsoft YaHei",
            Self::SimHei => "SimHei",
            Self::FangSong => "FangSong",
            Self::LiSu => "LiSu",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family_name())
    }
}

impl FromStr for FontFamily {
    type Err = String;

    /// Matches family names case-insensitively, ignoring spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.split_whitespace().collect::<String>().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.family_name().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown font family: {}", s))
    }
}

/// Everything one render depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampParameters {
    /// Legend along the top arc
    pub top_text: String,
    /// Code along the bottom arc (circle) or straight caption (oval)
    pub bottom_text: String,
    pub font_family: FontFamily,
    /// Glyph size in points
    pub font_size_pt: u32,
    pub shape: StampShape,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Ink used for border, star and glyphs
    pub stroke_color: Rgb,
}

impl Default for StampParameters {
    fn default() -> Self {
        Self::for_shape(StampShape::Circle)
    }
}

impl StampParameters {
    /// Defaults for `shape`, including its preset canvas size
    pub fn for_shape(shape: StampShape) -> Self {
        let (width, height) = shape.default_size();
        Self {
            top_text: "广州顺丰速运有限公司".to_string(),
            bottom_text: String::new(),
            font_family: FontFamily::default(),
            font_size_pt: 30,
            shape,
            width,
            height,
            stroke_color: Rgb::RED,
        }
    }

    pub fn with_texts(mut self, top: impl Into<String>, bottom: impl Into<String>) -> Self {
        self.top_text = top.into();
        self.bottom_text = bottom.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_font(mut self, family: FontFamily, size_pt: u32) -> Self {
        self.font_family = family;
        self.font_size_pt = size_pt;
        self
    }

    /// Width and height both inside the producer range
    pub fn size_in_range(&self) -> bool {
        let range = MIN_STAMP_SIDE..=MAX_STAMP_SIDE;
        range.contains(&self.width) && range.contains(&self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_presets() {
        let circle = StampParameters::for_shape(StampShape::Circle);
        assert_eq!((circle.width, circle.height), (300, 300));

        let oval = StampParameters::for_shape(StampShape::Oval);
        assert_eq!((oval.width, oval.height), (400, 280));
        assert_eq!(oval.stroke_color, Rgb::RED);
        assert_eq!(oval.font_family, FontFamily::SimSun);
    }

    #[test]
    fn test_font_family_parse() {
        assert_eq!("simsun".parse::<FontFamily>().unwrap(), FontFamily::SimSun);
        assert_eq!(
            "Microsoft YaHei".parse::<FontFamily>().unwrap(),
            FontFamily::MicrosoftYaHei
        );
        assert_eq!(
            "microsoftyahei".parse::<FontFamily>().unwrap(),
            FontFamily::MicrosoftYaHei
        );
        assert!("Comic Sans".parse::<FontFamily>().is_err());
    }

    #[test]
    fn test_shape_parse() {
        assert_eq!("Oval".parse::<StampShape>().unwrap(), StampShape::Oval);
        assert_eq!("圆形".parse::<StampShape>().unwrap(), StampShape::Circle);
        assert!("square".parse::<StampShape>().is_err());
    }

    #[test]
    fn test_size_in_range() {
        let p = StampParameters::default();
        assert!(p.size_in_range());
        assert!(!p.clone().with_size(99, 300).size_in_range());
        assert!(!p.with_size(300, 1001).size_in_range());
    }
}
