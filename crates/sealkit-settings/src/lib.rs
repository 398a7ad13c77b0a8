//! SealKit Settings Crate
//!
//! Handles stamp configuration files, producer-side validation, font labels
//! and shape presets.

pub mod config;
pub mod error;
pub mod fonts;

pub use config::{default_config_path, ConfigFormat, StampConfig};
pub use error::{SettingsError, SettingsResult};
pub use fonts::{font_for_label, label_for, resolve_font, FONT_LABELS};
