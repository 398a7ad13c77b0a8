//! Vector paths for seal outlines.
//!
//! Outlines are built as lyon paths and converted to tiny-skia paths by the
//! raster surface.

use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use sealkit_core::Point;

/// Closed axis-aligned ellipse
pub fn ellipse_path(center: Point, rx: f64, ry: f64) -> Path {
    let mut builder = Path::builder();
    builder.add_ellipse(
        point(center.x as f32, center.y as f32),
        vector(rx as f32, ry as f32),
        Angle::radians(0.0),
        Winding::Positive,
    );
    builder.build()
}

/// Closed polygon through `points`; empty input gives an empty path
pub fn polygon_path(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    if let Some((first, rest)) = points.split_first() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in rest {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.close();
    }
    builder.build()
}

/// Convert a lyon path to a tiny-skia path
pub fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => pb.move_to(at.x, at.y),
            lyon::path::Event::Line { to, .. } => pb.line_to(to.x, to.y),
            lyon::path::Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}
