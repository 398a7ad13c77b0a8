//! SVG surface
//! Emits each drawing command as one SVG element.
//!
//! The surface keeps its own transform stack; every element carries the full
//! canvas transform as a `matrix(...)` attribute, so the document has no
//! nested groups and identical renders give identical markup.

use crate::surface::{Alignment, DrawingSurface, FontSpec};
use crate::transform::TransformStack;
use sealkit_core::{format_points, Pen, Point, Rect, Result, Rgb};
use std::fmt::Write as _;

/// Format a coordinate with at most three decimals and no trailing zeros
fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape text for use in element content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn transform_attr(transforms: &TransformStack) -> String {
    if transforms.is_identity() {
        return String::new();
    }
    let terms = transforms
        .current()
        .to_array()
        .iter()
        .map(|v| num(*v))
        .collect::<Vec<_>>()
        .join(" ");
    format!(r#" transform="matrix({})""#, terms)
}

/// Surface that builds an SVG document in memory
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
    transforms: TransformStack,
    font: Option<FontSpec>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            transforms: TransformStack::default(),
            font: None,
        }
    }

    /// Elements emitted so far, without the `<svg>` wrapper
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Complete SVG document
    pub fn finish(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
{body}</svg>
"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl DrawingSurface for SvgSurface {
    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) {
        self.transforms.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transforms.translate(dx, dy);
    }

    fn rotate(&mut self, degrees: f64) {
        self.transforms.rotate(degrees);
    }

    fn stroke_ellipse(&mut self, center: Point, rx: f64, ry: f64, pen: &Pen) {
        let _ = writeln!(
            self.body,
            r#"  <ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
            num(center.x),
            num(center.y),
            num(rx),
            num(ry),
            pen.color.to_hex(),
            num(pen.width),
            transform_attr(&self.transforms)
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        let points = points
            .iter()
            .map(|p| format!("{},{}", num(p.x), num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.body,
            r#"  <polygon points="{}" fill="{}"{}/>"#,
            points,
            color.to_hex(),
            transform_attr(&self.transforms)
        );
    }

    fn set_font(&mut self, font: &FontSpec) -> Result<()> {
        self.font = Some(font.clone());
        Ok(())
    }

    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, color: Rgb) {
        let (x, anchor) = match alignment {
            Alignment::Center => (rect.x + rect.width / 2.0, "middle"),
            Alignment::Left => (rect.x, "start"),
            Alignment::Right => (rect.x + rect.width, "end"),
        };
        let y = rect.y + rect.height / 2.0;

        let font_attrs = match &self.font {
            Some(font) => format!(
                r#" font-family="{}" font-size="{}"{}"#,
                escape_xml(font.family.family_name()),
                format_points(font.size_pt),
                if font.bold { r#" font-weight="bold""# } else { "" }
            ),
            None => String::new(),
        };

        let _ = writeln!(
            self.body,
            r#"  <text x="{}" y="{}" text-anchor="{}" dominant-baseline="central"{} fill="{}"{}>{}</text>"#,
            num(x),
            num(y),
            anchor,
            font_attrs,
            color.to_hex(),
            transform_attr(&self.transforms),
            escape_xml(text)
        );
    }
}
