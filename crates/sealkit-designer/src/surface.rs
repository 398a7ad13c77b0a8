//! Drawing surface abstraction
//!
//! The composer never owns pixels. It issues a short list of commands against
//! a [`DrawingSurface`]; concrete surfaces turn them into SVG markup, raster
//! pixels, or a plain command log.
//!
//! # Graphics state
//!
//! Surfaces keep a current transform and a stack of saved transforms.
//! `translate`/`rotate` modify the current transform so that later commands
//! are interpreted in the moved frame; `save`/`restore` scope those changes.

use crate::transform::{map_point, rotation_degrees, CanvasTransform, TransformStack};
use sealkit_core::{FontFamily, Pen, Point, Rect, Result, Rgb};
use serde::{Deserialize, Serialize};

/// Placement of text inside its layout rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    /// Centered horizontally and vertically
    Center,
    /// Left edge, vertically centered
    Left,
    /// Right edge, vertically centered
    Right,
}

/// Font selection for glyph commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size_pt: f64,
    pub bold: bool,
}

impl FontSpec {
    /// Seal legends are always set in bold
    pub fn bold(family: FontFamily, size_pt: f64) -> Self {
        Self {
            family,
            size_pt,
            bold: true,
        }
    }
}

/// Trait for surfaces a stamp can be drawn on.
///
/// Every method except [`set_font`](DrawingSurface::set_font) is infallible;
/// the composer selects the font before issuing the first drawing command so
/// that a missing face can abort a render without leaving partial output.
pub trait DrawingSurface {
    /// Push the current transform onto the stack.
    fn save(&mut self);

    /// Pop the most recently saved transform. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Move the origin of the current frame.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate the current frame clockwise by `degrees`.
    fn rotate(&mut self, degrees: f64);

    /// Stroke an axis-aligned ellipse.
    fn stroke_ellipse(&mut self, center: Point, rx: f64, ry: f64, pen: &Pen);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Rgb);

    /// Select the font used by subsequent `draw_text` calls.
    fn set_font(&mut self, font: &FontSpec) -> Result<()>;

    /// Draw `text` inside `rect` using `alignment`, in the current frame.
    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, color: Rgb);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        degrees: f64,
    },
    StrokeEllipse {
        center: Point,
        rx: f64,
        ry: f64,
        pen: Pen,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Rgb,
    },
    SetFont {
        font: FontSpec,
    },
    DrawText {
        rect: Rect,
        alignment: Alignment,
        text: String,
        color: Rgb,
        /// Canvas-space transform in effect when the text was drawn, as
        /// `[m11, m12, m21, m22, m31, m32]`
        transform: [f64; 6],
    },
}

/// A text command resolved into canvas space
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedText {
    pub text: String,
    /// Center of the layout rectangle in canvas coordinates
    pub anchor: Point,
    /// Net rotation of the text frame in degrees
    pub rotation_degrees: f64,
}

/// Surface that records every call instead of drawing.
///
/// Used for determinism checks and for inspecting what the composer emitted.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    transforms: TransformStack,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of `draw_text` calls recorded
    pub fn text_draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawText { .. }))
            .count()
    }

    /// Text commands with their anchors mapped into canvas space
    pub fn resolved_texts(&self) -> Vec<ResolvedText> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText {
                    rect,
                    text,
                    transform,
                    ..
                } => {
                    let transform = CanvasTransform::from_array(*transform);
                    Some(ResolvedText {
                        text: text.clone(),
                        anchor: map_point(&transform, rect.center()),
                        rotation_degrees: rotation_degrees(&transform),
                    })
                }
                _ => None,
            })
            .collect()
    }

    /// Serialize the command log; identical renders give identical bytes
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.commands)
            .map_err(|e| sealkit_core::Error::other(format!("Failed to serialize commands: {}", e)))
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.transforms.save();
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.transforms.restore();
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transforms.translate(dx, dy);
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f64) {
        self.transforms.rotate(degrees);
        self.commands.push(DrawCommand::Rotate { degrees });
    }

    fn stroke_ellipse(&mut self, center: Point, rx: f64, ry: f64, pen: &Pen) {
        self.commands.push(DrawCommand::StrokeEllipse {
            center,
            rx,
            ry,
            pen: *pen,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn set_font(&mut self, font: &FontSpec) -> Result<()> {
        self.commands.push(DrawCommand::SetFont { font: font.clone() });
        Ok(())
    }

    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::DrawText {
            rect,
            alignment,
            text: text.to_string(),
            color,
            transform: self.transforms.current().to_array(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_resolves_scoped_transforms() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.translate(100.0, 50.0);
        surface.rotate(90.0);
        surface.draw_text(
            Rect::new(-50.0, -50.0, 100.0, 100.0),
            Alignment::Center,
            "A",
            Rgb::RED,
        );
        surface.restore();
        surface.draw_text(
            Rect::new(0.0, 0.0, 20.0, 10.0),
            Alignment::Center,
            "B",
            Rgb::RED,
        );

        let texts = surface.resolved_texts();
        assert_eq!(texts.len(), 2);
        assert!((texts[0].anchor.x - 100.0).abs() < 1e-9);
        assert!((texts[0].anchor.y - 50.0).abs() < 1e-9);
        assert!((texts[0].rotation_degrees - 90.0).abs() < 1e-9);
        assert_eq!(texts[1].anchor, Point::new(10.0, 5.0));
        assert_eq!(texts[1].rotation_degrees, 0.0);
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.restore();
        surface.translate(5.0, 5.0);
        surface.draw_text(
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Alignment::Left,
            "x",
            Rgb::RED,
        );
        assert_eq!(surface.resolved_texts()[0].anchor, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_command_json_is_tagged() {
        let mut surface = RecordingSurface::new();
        surface.fill_polygon(&[Point::new(0.0, 0.0)], Rgb::new(1, 2, 3));
        let json = surface.to_json().unwrap();
        assert!(json.starts_with(r#"[{"op":"fill_polygon""#));
    }
}
