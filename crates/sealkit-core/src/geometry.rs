//! Geometry utilities
//!
//! Angle conversion, polar ellipse radius and ellipse tangent direction.
//!
//! Angles follow canvas conventions: 0° points right and 90° points down,
//! so positive rotation is clockwise on screen.

use crate::error::StampError;
use crate::types::Point;

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

fn check_axes(rx: f64, ry: f64) -> Result<(), StampError> {
    if !rx.is_finite() || !ry.is_finite() {
        return Err(StampError::domain(format!(
            "ellipse axes must be finite (rx={}, ry={})",
            rx, ry
        )));
    }
    if rx < 0.0 || ry < 0.0 {
        return Err(StampError::domain(format!(
            "ellipse axes must not be negative (rx={}, ry={})",
            rx, ry
        )));
    }
    if rx == 0.0 && ry == 0.0 {
        return Err(StampError::domain("both ellipse axes are zero"));
    }
    Ok(())
}

/// Distance from the center of an ellipse to its boundary along `theta`.
///
/// `r = (rx·ry) / sqrt((ry·cos θ)² + (rx·sin θ)²)`. For `rx == ry` this is
/// the circle radius.
///
/// # Errors
///
/// `DomainError` when both axes are zero, an axis is negative or not finite,
/// or the direction hits a zero-length axis.
pub fn ellipse_radius_at(rx: f64, ry: f64, theta: f64) -> Result<f64, StampError> {
    check_axes(rx, ry)?;
    let (sin, cos) = theta.sin_cos();
    let denom = (ry * cos).hypot(rx * sin);
    if denom <= f64::EPSILON * rx.max(ry) {
        return Err(StampError::domain(format!(
            "ellipse radius undefined at {:.3}° for rx={}, ry={}",
            rad_to_deg(theta),
            rx,
            ry
        )));
    }
    Ok(rx * ry / denom)
}

/// Direction of the ellipse tangent at parameter `theta`, in degrees.
///
/// The ellipse is parametrized as `x = rx·cos θ, y = ry·sin θ`; the tangent
/// is `atan2(ry·cos θ, −rx·sin θ)`. Rotating a glyph by this angle aligns its
/// local up axis with the outward normal on the upper arc.
pub fn ellipse_tangent_angle_at(rx: f64, ry: f64, theta: f64) -> Result<f64, StampError> {
    check_axes(rx, ry)?;
    let (sin, cos) = theta.sin_cos();
    Ok(rad_to_deg((ry * cos).atan2(-rx * sin)))
}

/// Point on a circle or ellipse boundary at polar angle `theta` (radians)
pub fn polar_point(center: Point, radius: f64, theta: f64) -> Point {
    let (sin, cos) = theta.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Wrap an angle in degrees into `(-180, 180]`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d <= -180.0 {
        d += 360.0;
    } else if d > 180.0 {
        d -= 360.0;
    }
    d
}
