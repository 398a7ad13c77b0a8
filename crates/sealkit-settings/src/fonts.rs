//! Font display labels
//!
//! Front ends show Chinese labels; drawing surfaces need the family name.

use sealkit_core::FontFamily;

/// Display label and family of every selectable font, in menu order
pub const FONT_LABELS: [(&str, FontFamily); 6] = [
    ("宋体", FontFamily::SimSun),
    ("楷体", FontFamily::KaiTi),
    ("微软雅黑", FontFamily::MicrosoftYaHei),
    ("黑体", FontFamily::SimHei),
    ("仿宋", FontFamily::FangSong),
    ("隶书", FontFamily::LiSu),
];

/// Family for a display label such as `宋体`
pub fn font_for_label(label: &str) -> Option<FontFamily> {
    FONT_LABELS
        .iter()
        .find(|(l, _)| *l == label.trim())
        .map(|(_, family)| *family)
}

pub fn label_for(family: FontFamily) -> &'static str {
    FONT_LABELS
        .iter()
        .find(|(_, f)| *f == family)
        .map(|(label, _)| *label)
        .unwrap_or("宋体")
}

/// Accept either a display label or a family name
pub fn resolve_font(name: &str) -> Option<FontFamily> {
    font_for_label(name).or_else(|| name.parse().ok())
}
