//! # SealKit Designer
//!
//! Lays out and draws official seals. It combines curved text layout, stamp
//! composition and the surfaces a stamp can be drawn on.
//!
//! ## Core Components
//!
//! - **Layout**: character placement along circles and ellipses
//! - **Composer**: border, star and legends of a stamp in drawing order
//! - **Surfaces**: command recording, SVG markup and raster pixels
//! - **Fonts**: system font lookup for raster glyph outlines
//!
//! ## Architecture
//!
//! ```text
//! StampParameters
//!   └── StampLayout::compute (validation, geometry)
//!         └── StampLayout::draw
//!               ├── RecordingSurface (command log)
//!               ├── SvgSurface (markup)
//!               └── RasterSurface (tiny-skia pixmap, PNG)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sealkit_core::StampParameters;
//! use sealkit_designer::{render_stamp, RasterSurface};
//!
//! let params = StampParameters::default();
//! let mut surface = RasterSurface::for_params(&params)?;
//! render_stamp(&params, &mut surface)?;
//! surface.save_png("seal.png")?;
//! ```

pub mod composer;
pub mod font_manager;
pub mod layout;
pub mod renderer;
pub mod shapes;
pub mod surface;
pub mod svg_renderer;
pub mod transform;

pub use composer::{render_stamp, Border, BottomText, StampLayout};
pub use layout::{
    circular_span, layout_circular_text, layout_elliptical_arc, layout_elliptical_text,
    GlyphPlacement, TextBand,
};
pub use renderer::RasterSurface;
pub use surface::{Alignment, DrawCommand, DrawingSurface, FontSpec, RecordingSurface};
pub use svg_renderer::SvgSurface;
pub use transform::{CanvasTransform, TransformStack};

/// Render `params` to a standalone SVG document
pub fn render_svg(params: &sealkit_core::StampParameters) -> sealkit_core::Result<String> {
    let layout = StampLayout::compute(params)?;
    let mut surface = SvgSurface::new(layout.width, layout.height);
    layout.draw(&mut surface)?;
    Ok(surface.finish())
}
