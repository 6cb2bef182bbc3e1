//! Affine transforms on point lists.
//!
//! Each operation maps every input point independently, preserves order and
//! length, and returns a new vector. Rotation and scaling work in `f64`
//! relative to a pivot and round back with
//! [`round_to_i32`](crate::geometry::round_to_i32).

use log::debug;

use crate::geometry::Point;

/// Translate every point by `(dx, dy)`. Exact.
#[must_use]
pub fn translate(points: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    debug!("translate {} points by ({dx}, {dy})", points.len());
    points.iter().map(|p| p.offset(dx, dy)).collect()
}

/// Rotate clockwise by `degrees` about `pivot`.
///
/// Pivot-relative coordinates map as
/// `(x, y) -> (x·cosθ + y·sinθ, −x·sinθ + y·cosθ)`, which is clockwise when
/// y grows upward (the canvas convention of this crate).
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::transform::rotate;
///
/// let rotated = rotate(&[Point::new(10, 0)], Point::ORIGIN, 90.0);
/// assert_eq!(rotated, vec![Point::new(0, -10)]);
/// ```
#[must_use]
pub fn rotate(points: &[Point], pivot: Point, degrees: f64) -> Vec<Point> {
    debug!("rotate {} points by {degrees} deg about {pivot}", points.len());

    let (sin, cos) = degrees.to_radians().sin_cos();
    let (cx, cy) = pivot.to_f64();

    points
        .iter()
        .map(|p| {
            let (x, y) = p.to_f64();
            let (rx, ry) = (x - cx, y - cy);
            Point::from_f64(rx * cos + ry * sin + cx, -rx * sin + ry * cos + cy)
        })
        .collect()
}

/// Scale uniformly by `factor` about `pivot`.
#[must_use]
pub fn scale(points: &[Point], pivot: Point, factor: f64) -> Vec<Point> {
    debug!("scale {} points by {factor} about {pivot}", points.len());

    let (cx, cy) = pivot.to_f64();

    points
        .iter()
        .map(|p| {
            let (x, y) = p.to_f64();
            Point::from_f64((x - cx) * factor + cx, (y - cy) * factor + cy)
        })
        .collect()
}
