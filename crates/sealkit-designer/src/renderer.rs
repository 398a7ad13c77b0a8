//! Raster surface
//! Draws stamps into a tiny-skia pixmap with a transparent background.
//!
//! Features:
//! - Anti-aliased strokes and fills
//! - Glyph outlines filled as paths, so rotated text stays smooth
//! - PNG export through the `image` crate

use crate::font_manager;
use crate::shapes::{ellipse_path, polygon_path, to_skia_path};
use crate::surface::{Alignment, DrawingSurface, FontSpec};
use crate::transform::{CanvasTransform, TransformStack};
use image::{ImageFormat, Rgba, RgbaImage};
use rusttype::{point as rt_point, Font, OutlineBuilder, Scale};
use sealkit_core::{
    pt_to_px, Error, Pen, Point, Rect, Result, Rgb, StampError, StampParameters,
    DEFAULT_DPI,
};
use std::fmt;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{debug, warn};

fn paint_for(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(color.r, color.g, color.b, 255));
    paint.anti_alias = true;
    paint
}

fn skia_transform(t: &CanvasTransform) -> Transform {
    Transform::from_row(
        t.m11 as f32,
        t.m12 as f32,
        t.m21 as f32,
        t.m22 as f32,
        t.m31 as f32,
        t.m32 as f32,
    )
}

/// Collects glyph outlines into one tiny-skia path
struct GlyphPathBuilder {
    pb: PathBuilder,
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.pb.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.pb.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.pb.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.pb.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.pb.close();
    }
}

/// Advance width of `text` laid out on one line
fn text_width(font: &Font<'_>, scale: Scale, text: &str) -> f32 {
    font.layout(text, scale, rt_point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Pixel surface backed by a [`Pixmap`]
pub struct RasterSurface {
    pixmap: Pixmap,
    transforms: TransformStack,
    font: Option<&'static Font<'static>>,
    font_px: f32,
    dpi: f64,
}

impl RasterSurface {
    /// Create a fully transparent surface.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            StampError::invalid("size", format!("cannot allocate a {}x{} pixmap", width, height))
        })?;
        Ok(Self {
            pixmap,
            transforms: TransformStack::default(),
            font: None,
            font_px: 0.0,
            dpi: DEFAULT_DPI,
        })
    }

    /// Surface sized to the stamp described by `params`
    pub fn for_params(params: &StampParameters) -> Result<Self> {
        Self::new(params.width, params.height)
    }

    /// Resolution used to convert font sizes from points
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    /// Write the surface as a PNG, keeping the transparent background
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_rgba_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::Image(format!("Failed to write {}: {}", path.display(), e)))?;
        debug!("Wrote {}x{} PNG to {}", self.width(), self.height(), path.display());
        Ok(())
    }
}

impl fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("transforms", &self.transforms)
            .field("font_loaded", &self.font.is_some())
            .field("font_px", &self.font_px)
            .field("dpi", &self.dpi)
            .finish()
    }
}

impl DrawingSurface for RasterSurface {
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
        let Some(path) = to_skia_path(&ellipse_path(center, rx, ry)) else {
            return;
        };
        let stroke = Stroke {
            width: pen.width as f32,
            ..Default::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(pen.color),
            &stroke,
            skia_transform(&self.transforms.current()),
            None,
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        let Some(path) = to_skia_path(&polygon_path(points)) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            skia_transform(&self.transforms.current()),
            None,
        );
    }

    fn set_font(&mut self, font: &FontSpec) -> Result<()> {
        let face = font_manager::get_font_for(font.family, font.bold).ok_or_else(|| {
            StampError::FontUnavailable {
                family: font.family.family_name().to_string(),
            }
        })?;
        self.font = Some(face);
        self.font_px = pt_to_px(font.size_pt, self.dpi) as f32;
        Ok(())
    }

    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, color: Rgb) {
        let Some(font) = self.font else {
            warn!("draw_text called before set_font, skipping {:?}", text);
            return;
        };
        let scale = Scale::uniform(self.font_px);
        let v_metrics = font.v_metrics(scale);
        let width = text_width(font, scale, text);

        let x = match alignment {
            Alignment::Center => rect.x as f32 + (rect.width as f32 - width) / 2.0,
            Alignment::Left => rect.x as f32,
            Alignment::Right => (rect.x + rect.width) as f32 - width,
        };
        // Vertically center the ascent-to-descent box
        let text_height = v_metrics.ascent - v_metrics.descent;
        let baseline = rect.y as f32 + (rect.height as f32 - text_height) / 2.0 + v_metrics.ascent;

        let mut builder = GlyphPathBuilder {
            pb: PathBuilder::new(),
        };
        for glyph in font.layout(text, scale, rt_point(x, baseline)) {
            glyph.build_outline(&mut builder);
        }
        let Some(path) = builder.pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            skia_transform(&self.transforms.current()),
            None,
        );
    }
}
