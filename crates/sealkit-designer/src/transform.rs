//! Canvas transform state shared by the drawing surfaces.
//!
//! Transforms are lyon's euclid `Transform2D` in f64. `translate`/`rotate`
//! are applied before the current transform, so later commands are
//! interpreted in the moved frame.

use lyon::geom::euclid::{default::Transform2D, point2, vec2, Angle};
use sealkit_core::{rad_to_deg, Point};

/// Current canvas transform of a surface
pub type CanvasTransform = Transform2D<f64>;

/// Map `p` through `t`
pub fn map_point(t: &CanvasTransform, p: Point) -> Point {
    let q = t.transform_point(point2(p.x, p.y));
    Point::new(q.x, q.y)
}

/// Rotation component in degrees, assuming no shear
pub fn rotation_degrees(t: &CanvasTransform) -> f64 {
    rad_to_deg(t.m12.atan2(t.m11))
}

/// Current transform plus the stack of saved ones
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: CanvasTransform,
    saved: Vec<CanvasTransform>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            current: CanvasTransform::identity(),
            saved: Vec::new(),
        }
    }
}

impl TransformStack {
    pub fn current(&self) -> CanvasTransform {
        self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced calls leave the current transform unchanged
    pub fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.current = self.current.pre_translate(vec2(dx, dy));
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.current = self.current.pre_rotate(Angle::degrees(degrees));
    }

    pub fn is_identity(&self) -> bool {
        self.current == CanvasTransform::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_translate_then_rotate_is_local() {
        let mut stack = TransformStack::default();
        stack.translate(100.0, 50.0);
        stack.rotate(90.0);
        let p = map_point(&stack.current(), Point::new(10.0, 0.0));
        assert!((p.x - 100.0).abs() < EPS);
        assert!((p.y - 60.0).abs() < EPS);
        assert!((rotation_degrees(&stack.current()) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_save_restore() {
        let mut stack = TransformStack::default();
        stack.save();
        stack.translate(5.0, 5.0);
        stack.rotate(30.0);
        assert!(!stack.is_identity());
        stack.restore();
        assert!(stack.is_identity());
        stack.restore();
        assert!(stack.is_identity());
    }

    #[test]
    fn test_array_order_is_svg_matrix_order() {
        let mut stack = TransformStack::default();
        stack.translate(50.0, 20.0);
        assert_eq!(stack.current().to_array(), [1.0, 0.0, 0.0, 1.0, 50.0, 20.0]);
    }
}
