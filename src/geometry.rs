//! Geometric primitives for rasterization.
//!
//! Provides the integer pixel-space point, the axis-aligned clip window and
//! the single float-to-pixel rounding rule used throughout the crate.

use std::fmt;

/// A pixel-space point with integer coordinates.
///
/// Ordering is lexicographic on `(x, y)`, which is the order ellipse output
/// is returned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from real coordinates, rounding each axis with
    /// [`round_to_i32`].
    #[must_use]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(round_to_i32(x), round_to_i32(y))
    }

    /// Coordinates as `f64`.
    #[must_use]
    pub fn to_f64(self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }

    /// Offset by integer deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Convert a real coordinate to a pixel coordinate.
///
/// Rounds to nearest with ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
/// Every float-to-pixel conversion in the crate goes through here.
#[inline]
#[must_use]
pub fn round_to_i32(v: f64) -> i32 {
    v.round() as i32
}

/// Axis-aligned clipping window with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipWindow {
    /// Left bound.
    pub x_min: i32,
    /// Bottom bound.
    pub y_min: i32,
    /// Right bound.
    pub x_max: i32,
    /// Top bound.
    pub y_max: i32,
}

impl ClipWindow {
    /// Create a window from explicit bounds.
    #[must_use]
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Create a window from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Check if a point lies inside the window or on its border.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ordering_is_lexicographic() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, -1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, -1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round_to_i32(2.5), 3);
        assert_eq!(round_to_i32(-2.5), -3);
        assert_eq!(round_to_i32(0.49), 0);
        assert_eq!(round_to_i32(-0.51), -1);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Point::from_f64(1.5, -1.5), Point::new(2, -2));
    }

    #[test]
    fn test_window_from_corners() {
        let w = ClipWindow::from_corners(Point::new(10, 0), Point::new(0, 10));
        assert_eq!(w, ClipWindow::new(0, 0, 10, 10));
        assert!(w.contains(Point::new(10, 10)));
        assert!(!w.contains(Point::new(11, 10)));
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(Point::from((3, 4)), Point::new(3, 4));
        assert_eq!(Point::from([3, 4]), Point::new(3, 4));
        assert_eq!(Point::new(3, 4).offset(-3, 1), Point::new(0, 5));
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
    }
}
