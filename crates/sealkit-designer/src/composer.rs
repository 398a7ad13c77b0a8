//! Stamp composer
//!
//! Turns a [`StampParameters`] value into drawing commands. Composition runs
//! in two steps:
//!
//! 1. [`StampLayout::compute`] validates the parameters and derives every
//!    piece of geometry (border, star, glyph placements, caption box). It is
//!    pure and is the only step that can reject the input.
//! 2. [`StampLayout::draw`] replays that geometry onto a surface.
//!
//! Because all validation happens before the first command, a rejected render
//! leaves the caller's surface untouched.

use crate::layout::{layout_circular_text, layout_elliptical_text, GlyphPlacement, TextBand};
use crate::surface::{Alignment, DrawingSurface, FontSpec};
use sealkit_core::{
    build_star, Pen, Point, Rect, Result, Rgb, StampError, StampParameters, StampShape,
};
use tracing::{debug, warn};

/// Gap between the canvas edge and the border line
pub const BORDER_MARGIN: f64 = 10.0;
/// Border line width
pub const BORDER_STROKE_WIDTH: f64 = 5.0;
/// Distance from the border to the text ring on round seals
pub const CIRCLE_TEXT_INSET: f64 = 30.0;
/// Distance from the border to the text ring on oval seals, per axis
pub const OVAL_TEXT_INSET: f64 = 25.0;
/// Star tip radius is `min(width, height) / STAR_RADIUS_DIVISOR`
pub const STAR_RADIUS_DIVISOR: f64 = 8.0;
/// Side of the square box each curved glyph is centered in
pub const GLYPH_BOX_SIZE: f64 = 100.0;
/// Height of the straight caption box on oval seals
pub const CAPTION_BOX_HEIGHT: f64 = 40.0;
/// Widths and heights at or below this leave no room for the border
pub const MIN_DRAWABLE_SIDE: u32 = 20;

/// Outer ring of the seal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub pen: Pen,
}

/// What goes under the star
#[derive(Debug, Clone, PartialEq)]
pub enum BottomText {
    None,
    /// Circle seals: glyphs on the lower arc
    Curved(Vec<GlyphPlacement>),
    /// Oval seals: one straight line centered in `rect`
    Caption { rect: Rect, text: String },
}

/// Fully resolved geometry of one stamp
#[derive(Debug, Clone, PartialEq)]
pub struct StampLayout {
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
    pub font: FontSpec,
    pub border: Border,
    pub star: [Point; 10],
    pub top: Vec<GlyphPlacement>,
    pub bottom: BottomText,
}

fn positive_inset(name: &str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(StampError::invalid(
            name,
            format!("stamp too small for text (inset radius {:.1})", value),
        )
        .into())
    }
}

impl StampLayout {
    /// Validate `params` and derive all geometry.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for a zero font size, a side of 20 px or less, or
    ///   a non-empty legend whose text ring would have a non-positive radius
    /// - `DomainError` from the ellipse math
    pub fn compute(params: &StampParameters) -> Result<Self> {
        if params.font_size_pt == 0 {
            return Err(StampError::invalid("font_size_pt", "must be greater than 0").into());
        }
        if params.width <= MIN_DRAWABLE_SIDE {
            return Err(StampError::invalid(
                "width",
                format!("{} is not greater than {}", params.width, MIN_DRAWABLE_SIDE),
            )
            .into());
        }
        if params.height <= MIN_DRAWABLE_SIDE {
            return Err(StampError::invalid(
                "height",
                format!("{} is not greater than {}", params.height, MIN_DRAWABLE_SIDE),
            )
            .into());
        }
        if !params.size_in_range() {
            warn!(
                "Stamp size {}x{} is outside the supported 100-1000 range",
                params.width, params.height
            );
        }

        let w = params.width as f64;
        let h = params.height as f64;
        let center = Point::new(w / 2.0, h / 2.0);
        let pen = Pen::new(params.stroke_color, BORDER_STROKE_WIDTH);

        let (border, text_rx, text_ry) = match params.shape {
            StampShape::Circle => {
                let radius = w.min(h) / 2.0 - BORDER_MARGIN;
                let border = Border {
                    center,
                    rx: radius,
                    ry: radius,
                    pen,
                };
                let inset = radius - CIRCLE_TEXT_INSET;
                (border, inset, inset)
            }
            StampShape::Oval => {
                let border = Border {
                    center,
                    rx: w / 2.0 - BORDER_MARGIN,
                    ry: h / 2.0 - BORDER_MARGIN,
                    pen,
                };
                (
                    border,
                    border.rx - OVAL_TEXT_INSET,
                    border.ry - OVAL_TEXT_INSET,
                )
            }
        };

        let star = build_star(center.x, center.y, w.min(h) / STAR_RADIUS_DIVISOR);

        let top = if params.top_text.is_empty() {
            Vec::new()
        } else {
            match params.shape {
                StampShape::Circle => layout_circular_text(
                    &params.top_text,
                    center.x,
                    center.y,
                    positive_inset("top_text", text_rx)?,
                    TextBand::Top,
                ),
                StampShape::Oval => layout_elliptical_text(
                    &params.top_text,
                    center.x,
                    center.y,
                    positive_inset("top_text", text_rx)?,
                    positive_inset("top_text", text_ry)?,
                )?,
            }
        };

        let bottom = if params.bottom_text.is_empty() {
            BottomText::None
        } else {
            match params.shape {
                StampShape::Circle => BottomText::Curved(layout_circular_text(
                    &params.bottom_text,
                    center.x,
                    center.y,
                    positive_inset("bottom_text", text_rx)?,
                    TextBand::Bottom,
                )),
                StampShape::Oval => BottomText::Caption {
                    rect: Rect::new(
                        0.0,
                        center.y + h / 4.0 - CAPTION_BOX_HEIGHT / 2.0,
                        w,
                        CAPTION_BOX_HEIGHT,
                    ),
                    text: params.bottom_text.clone(),
                },
            }
        };

        debug!(
            "Stamp layout: {} {}x{}, {} top glyphs, border rx={:.1} ry={:.1}",
            params.shape,
            params.width,
            params.height,
            top.len(),
            border.rx,
            border.ry
        );

        Ok(Self {
            width: params.width,
            height: params.height,
            color: params.stroke_color,
            font: FontSpec::bold(params.font_family, params.font_size_pt as f64),
            border,
            star,
            top,
            bottom,
        })
    }

    pub fn has_text(&self) -> bool {
        !self.top.is_empty() || !matches!(self.bottom, BottomText::None)
    }

    /// Issue the drawing commands for this layout.
    ///
    /// The font is selected before anything is drawn; if the surface rejects
    /// it, nothing has been drawn yet.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        if self.has_text() {
            surface.set_font(&self.font)?;
        }

        let b = &self.border;
        surface.stroke_ellipse(b.center, b.rx, b.ry, &b.pen);
        surface.fill_polygon(&self.star, self.color);

        for glyph in &self.top {
            draw_glyph(surface, glyph, self.color);
        }

        match &self.bottom {
            BottomText::None => {}
            BottomText::Curved(glyphs) => {
                for glyph in glyphs {
                    draw_glyph(surface, glyph, self.color);
                }
            }
            BottomText::Caption { rect, text } => {
                surface.draw_text(*rect, Alignment::Center, text, self.color);
            }
        }

        Ok(())
    }
}

/// Draw one glyph centered on its anchor in its rotated frame
fn draw_glyph<S: DrawingSurface + ?Sized>(surface: &mut S, glyph: &GlyphPlacement, color: Rgb) {
    let half = GLYPH_BOX_SIZE / 2.0;
    let mut buf = [0u8; 4];

    surface.save();
    surface.translate(glyph.position.x, glyph.position.y);
    surface.rotate(glyph.rotation_degrees);
    surface.draw_text(
        Rect::new(-half, -half, GLYPH_BOX_SIZE, GLYPH_BOX_SIZE),
        Alignment::Center,
        glyph.character.encode_utf8(&mut buf),
        color,
    );
    surface.restore();
}

/// Render a stamp onto `surface`.
///
/// This is the single entry point used by front ends. The same parameters
/// always produce the same command sequence.
pub fn render_stamp<S: DrawingSurface + ?Sized>(
    params: &StampParameters,
    surface: &mut S,
) -> Result<()> {
    StampLayout::compute(params)?.draw(surface)
}
