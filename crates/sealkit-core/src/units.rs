//! Typographic unit conversion
//!
//! Font sizes travel through the API in points. Raster surfaces work in
//! device pixels, so they convert at a fixed logical resolution.

/// Logical resolution used when a surface does not specify one
pub const DEFAULT_DPI: f64 = 96.0;

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert a size in points to device pixels
///
/// * `points` - Size in typographic points
/// * `dpi` - Device resolution in dots per inch
pub fn pt_to_px(points: f64, dpi: f64) -> f64 {
    points * dpi / POINTS_PER_INCH
}

/// Convert a size in device pixels to points
pub fn px_to_pt(pixels: f64, dpi: f64) -> f64 {
    pixels * POINTS_PER_INCH / dpi
}

/// Format a point size for display, e.g. `30pt`
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{}pt", points as i64)
    } else {
        format!("{:.2}pt", points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_px_conversion() {
        // 30pt at 96 dpi is 40px
        assert_eq!(pt_to_px(30.0, DEFAULT_DPI), 40.0);
        assert_eq!(px_to_pt(40.0, DEFAULT_DPI), 30.0);

        // At 72 dpi points and pixels coincide
        assert_eq!(pt_to_px(12.0, 72.0), 12.0);
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(30.0), "30pt");
        assert_eq!(format_points(10.5), "10.50pt");
    }
}
