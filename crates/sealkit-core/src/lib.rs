//! # SealKit Core
//!
//! Core types, errors and geometry for SealKit.
//! Provides the pieces every other crate builds on: value types for points,
//! rectangles and colors, the ellipse math behind curved text, and the star
//! polygon placed in the middle of each seal.

pub mod error;
pub mod geometry;
pub mod params;
pub mod star;
pub mod types;
pub mod units;

pub use error::{Error, Result, StampError};
pub use geometry::{
    deg_to_rad, ellipse_radius_at, ellipse_tangent_angle_at, normalize_degrees, polar_point,
    rad_to_deg,
};
pub use params::{FontFamily, StampParameters, StampShape};
pub use star::{build_star, STAR_INNER_RATIO};
pub use types::{Pen, Point, Rect, Rgb};
pub use units::{format_points, pt_to_px, px_to_pt, DEFAULT_DPI};
