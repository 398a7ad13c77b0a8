//! Five-pointed star outline
//!
//! The star sits in the middle of every seal. Its outline is a closed
//! ten-vertex polygon alternating outer tips and inner notches, first tip
//! pointing straight up.

use crate::geometry::{deg_to_rad, polar_point};
use crate::types::Point;

/// Inner notch radius as a fraction of the tip radius.
///
/// Close to the regular pentagram ratio; changing it changes the look of the
/// seal.
pub const STAR_INNER_RATIO: f64 = 0.382;

/// Angle of the first tip (straight up on a y-down canvas)
pub const STAR_FIRST_TIP_DEGREES: f64 = -90.0;

/// Angular distance between consecutive tips
pub const STAR_TIP_STEP_DEGREES: f64 = 72.0;

/// Build the star polygon: `[tip0, notch0, tip1, notch1, ..., tip4, notch4]`.
///
/// Tip `i` lies at `-90° + i·72°` on `outer_radius`; each notch lies 36°
/// further on `outer_radius × 0.382`.
pub fn build_star(center_x: f64, center_y: f64, outer_radius: f64) -> [Point; 10] {
    let center = Point::new(center_x, center_y);
    let inner_radius = outer_radius * STAR_INNER_RATIO;
    let mut points = [center; 10];

    for i in 0..5 {
        let outer_angle = STAR_FIRST_TIP_DEGREES + i as f64 * STAR_TIP_STEP_DEGREES;
        let inner_angle = outer_angle + STAR_TIP_STEP_DEGREES / 2.0;
        points[2 * i] = polar_point(center, outer_radius, deg_to_rad(outer_angle));
        points[2 * i + 1] = polar_point(center, inner_radius, deg_to_rad(inner_angle));
    }

    points
}
