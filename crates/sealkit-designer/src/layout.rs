//! Curved text layout
//!
//! Places each character of a legend on a circle or ellipse. Every character
//! gets one fixed angular slot; there is no kerning and no shaping. The
//! result is closed-form per glyph: a canvas-space anchor plus the rotation of
//! the glyph's local frame.
//!
//! ```text
//!            -90° (top band center)
//!               |
//!   180° ------ + ------ 0°
//!               |
//!            +90° (bottom band center)
//! ```

use sealkit_core::{
    deg_to_rad, ellipse_radius_at, ellipse_tangent_angle_at, polar_point, Point, StampError,
};
use serde::{Deserialize, Serialize};

/// Nominal arc per character on a circle
pub const CIRCLE_DEGREES_PER_CHAR: f64 = 25.0;
/// Circular legends never span more than this
pub const CIRCLE_MAX_SPAN_DEGREES: f64 = 240.0;
/// Oval legends always span this much of the upper arc
pub const ELLIPSE_SPAN_DEGREES: f64 = 140.0;

/// Which half of the ring a circular legend follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBand {
    /// Centered at -90°, glyph feet toward the center
    Top,
    /// Centered at +90°, glyph heads toward the center
    Bottom,
}

impl TextBand {
    pub fn center_degrees(&self) -> f64 {
        match self {
            Self::Top => -90.0,
            Self::Bottom => 90.0,
        }
    }

    /// Glyph rotation for a character sitting at polar angle `theta_degrees`
    pub fn glyph_rotation(&self, theta_degrees: f64) -> f64 {
        match self {
            Self::Top => theta_degrees + 90.0,
            Self::Bottom => theta_degrees - 90.0,
        }
    }
}

/// Where and how one character is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    pub character: char,
    /// Glyph center in canvas coordinates
    pub position: Point,
    /// Rotation of the glyph frame, clockwise on screen
    pub rotation_degrees: f64,
    /// Polar angle of the slot the glyph occupies
    pub arc_angle_degrees: f64,
}

/// Total arc a circular legend of `char_count` characters spans
pub fn circular_span(char_count: usize) -> f64 {
    (char_count as f64 * CIRCLE_DEGREES_PER_CHAR).min(CIRCLE_MAX_SPAN_DEGREES)
}

/// Polar angles of `count` evenly spaced slots centered on `center_degrees`.
///
/// The span is divided into `count + 1` steps so half a step of margin stays
/// free at either end. Angles are measured from the middle slot so that the
/// middle glyph of an odd-length legend lands exactly on the center.
fn slot_angles(count: usize, center_degrees: f64, span_degrees: f64) -> impl Iterator<Item = f64> {
    let per_char = span_degrees / (count as f64 + 1.0);
    let middle = (count as f64 + 1.0) / 2.0;
    (0..count).map(move |i| center_degrees + ((i + 1) as f64 - middle) * per_char)
}

/// Lay `text` out along a circle of `radius` around `(center_x, center_y)`.
///
/// Each slot is centered on `θᵢ = band_center − span/2 + (i+1)·span/(n+1)`
/// with `span = min(n·25°, 240°)`. Top band glyphs are rotated by `θᵢ + 90°`,
/// bottom band glyphs by `θᵢ − 90°`.
pub fn layout_circular_text(
    text: &str,
    center_x: f64,
    center_y: f64,
    radius: f64,
    band: TextBand,
) -> Vec<GlyphPlacement> {
    let count = text.chars().count();
    let center = Point::new(center_x, center_y);

    text.chars()
        .zip(slot_angles(count, band.center_degrees(), circular_span(count)))
        .map(|(character, theta)| GlyphPlacement {
            character,
            position: polar_point(center, radius, deg_to_rad(theta)),
            rotation_degrees: band.glyph_rotation(theta),
            arc_angle_degrees: theta,
        })
        .collect()
}

/// Lay `text` out along the upper arc of an ellipse, spanning `span_degrees`
/// around -90°.
///
/// The anchor of each glyph sits on the ellipse at its slot angle; the glyph
/// is rotated to the local tangent so it stands on the outward normal.
///
/// # Errors
///
/// Propagates `DomainError` from the ellipse math for degenerate axes.
pub fn layout_elliptical_arc(
    text: &str,
    center_x: f64,
    center_y: f64,
    rx: f64,
    ry: f64,
    span_degrees: f64,
) -> Result<Vec<GlyphPlacement>, StampError> {
    let count = text.chars().count();
    let center = Point::new(center_x, center_y);

    text.chars()
        .zip(slot_angles(count, TextBand::Top.center_degrees(), span_degrees))
        .map(|(character, theta)| {
            let rad = deg_to_rad(theta);
            let r = ellipse_radius_at(rx, ry, rad)?;
            Ok(GlyphPlacement {
                character,
                position: polar_point(center, r, rad),
                rotation_degrees: ellipse_tangent_angle_at(rx, ry, rad)?,
                arc_angle_degrees: theta,
            })
        })
        .collect()
}

/// Lay `text` out along the upper arc of an ellipse over the fixed 140° span
/// used by oval seals.
pub fn layout_elliptical_text(
    text: &str,
    center_x: f64,
    center_y: f64,
    rx: f64,
    ry: f64,
) -> Result<Vec<GlyphPlacement>, StampError> {
    layout_elliptical_arc(text, center_x, center_y, rx, ry, ELLIPSE_SPAN_DEGREES)
}
