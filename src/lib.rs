//! # SealKit
//!
//! A parametric renderer for official seals with support for:
//! - Round seals with legends along the top and bottom arcs
//! - Oval seals with a legend along the upper arc and a straight caption
//! - A filled five-pointed star in the middle
//! - PNG, SVG and command-log output
//!
//! ## Architecture
//!
//! SealKit is organized as a workspace with multiple crates:
//!
//! 1. **sealkit-core** - Value types, errors, ellipse math, star polygon
//! 2. **sealkit-designer** - Text layout, stamp composer, drawing surfaces
//! 3. **sealkit-settings** - Configuration files, validation, presets
//! 4. **sealkit** - Logging setup, exporters and the command-line binary

use anyhow::{bail, Context};
use std::path::Path;
use tracing::info;

pub use sealkit_designer as designer;
pub use sealkit_settings as settings;

pub use sealkit_core::{Error, FontFamily, Result, Rgb, StampError, StampParameters, StampShape};
pub use sealkit_designer::{
    render_stamp, render_svg, DrawingSurface, RasterSurface, RecordingSurface, StampLayout,
    SvgSurface,
};
pub use sealkit_settings::{default_config_path, SettingsError, StampConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// File formats a stamp can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    /// Recorded drawing commands as JSON
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "Cannot infer output format from {} (use .png, .svg or .json)",
                path.display()
            ),
        }
    }
}

/// Render `params` once and write the result to `path`
pub fn export_stamp(params: &StampParameters, path: &Path) -> anyhow::Result<()> {
    let format = OutputFormat::from_path(path)?;
    match format {
        OutputFormat::Png => {
            let mut surface = RasterSurface::for_params(params)?;
            render_stamp(params, &mut surface)?;
            surface.save_png(path)?;
        }
        OutputFormat::Svg => {
            let svg = render_svg(params)?;
            std::fs::write(path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        OutputFormat::Json => {
            let mut surface = RecordingSurface::new();
            render_stamp(params, &mut surface)?;
            std::fs::write(path, surface.to_json()?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }
    info!(
        "Exported {} stamp {}x{} to {}",
        params.shape,
        params.width,
        params.height,
        path.display()
    );
    Ok(())
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so rendered SVG can go to stdout
/// - RUST_LOG environment variable support, INFO otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
