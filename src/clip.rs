//! Line segment clipping against an axis-aligned window.
//!
//! Both algorithms return either the two endpoints of the visible part of
//! the segment or an empty vector. They agree on trivially accepted and
//! trivially rejected segments. A segment that only touches the window in a
//! single point is kept by Cohen-Sutherland as a degenerate segment and
//! dropped by Liang-Barsky, which needs a parameter interval `t0 < t1`.
//!
//! # References
//!
//! - Sproull, R. F., & Sutherland, I. E. (1968). "A clipping divider."
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."
//!   *ACM Transactions on Graphics*, 3(1), 1-22.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point};

/// Inside the window.
pub const INSIDE: u8 = 0b0000;
/// Left of the window (`x < x_min`).
pub const LEFT: u8 = 0b0001;
/// Right of the window (`x > x_max`).
pub const RIGHT: u8 = 0b0010;
/// Below the window (`y < y_min`).
pub const BOTTOM: u8 = 0b0100;
/// Above the window (`y > y_max`).
pub const TOP: u8 = 0b1000;

/// Upper bound on Cohen-Sutherland boundary substitutions: each endpoint
/// crosses at most one vertical and one horizontal boundary before the
/// segment is accepted or rejected.
const MAX_BOUNDARY_RESOLUTIONS: usize = 4;

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipAlgorithm {
    /// Outcode based iterative clipping.
    CohenSutherland,
    /// Parametric clipping.
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Tag as written in command scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        }
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Cohen-Sutherland" => Ok(Self::CohenSutherland),
            "Liang-Barsky" => Ok(Self::LiangBarsky),
            _ => Err(Error::UnsupportedAlgorithm {
                kind: "clip",
                name: s.to_string(),
                expected: "Cohen-Sutherland, Liang-Barsky",
            }),
        }
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcode of `(x, y)` relative to `window`, a combination of [`LEFT`],
/// [`RIGHT`], [`BOTTOM`] and [`TOP`].
#[must_use]
pub fn outcode(x: f64, y: f64, window: &ClipWindow) -> u8 {
    let mut code = INSIDE;
    if x < f64::from(window.x_min) {
        code |= LEFT;
    }
    if x > f64::from(window.x_max) {
        code |= RIGHT;
    }
    if y < f64::from(window.y_min) {
        code |= BOTTOM;
    }
    if y > f64::from(window.y_max) {
        code |= TOP;
    }
    code
}

/// Clip the segment `p0 -> p1` to `window`.
///
/// Returns `[p0', p1']` for the visible part (the original endpoints when the
/// segment is entirely inside) or an empty vector when nothing is visible.
///
/// # Example
///
/// ```
/// use trueno_raster::clip::{clip_line, ClipAlgorithm};
/// use trueno_raster::geometry::{ClipWindow, Point};
///
/// let clipped = clip_line(
///     Point::new(-5, 5),
///     Point::new(15, 5),
///     ClipWindow::new(0, 0, 10, 10),
///     ClipAlgorithm::CohenSutherland,
/// );
/// assert_eq!(clipped, vec![Point::new(0, 5), Point::new(10, 5)]);
/// ```
#[must_use]
pub fn clip_line(p0: Point, p1: Point, window: ClipWindow, algorithm: ClipAlgorithm) -> Vec<Point> {
    debug!("clip_line {p0} -> {p1} to {window:?} using {algorithm}");
    match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland(p0, p1, &window),
        ClipAlgorithm::LiangBarsky => liang_barsky(p0, p1, &window),
    }
}

// ============================================================================
// Cohen-Sutherland
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipState {
    /// Compute both outcodes and decide.
    Testing,
    /// Move the endpoint at this index onto one violated boundary.
    Substituting(usize),
    Accepted,
    Rejected,
}

fn cohen_sutherland(p0: Point, p1: Point, window: &ClipWindow) -> Vec<Point> {
    // Intersections are always taken on the line through the original
    // integer endpoints; moved endpoints stay unrounded until accepted.
    let (x0, y0) = p0.to_f64();
    let (x1, y1) = p1.to_f64();
    let (dx, dy) = (x1 - x0, y1 - y0);

    let mut ends = [(x0, y0), (x1, y1)];
    let mut resolutions = 0;
    let mut state = ClipState::Testing;

    loop {
        trace!("cohen-sutherland {state:?} ends={ends:?}");
        state = match state {
            ClipState::Testing => {
                let c0 = outcode(ends[0].0, ends[0].1, window);
                let c1 = outcode(ends[1].0, ends[1].1, window);
                if c0 | c1 == INSIDE {
                    ClipState::Accepted
                } else if c0 & c1 != INSIDE {
                    ClipState::Rejected
                } else if resolutions == MAX_BOUNDARY_RESOLUTIONS {
                    warn!("cohen-sutherland did not converge for {p0} -> {p1}, rejecting");
                    ClipState::Rejected
                } else {
                    ClipState::Substituting(usize::from(c0 == INSIDE))
                }
            }
            ClipState::Substituting(i) => {
                let (x, y) = ends[i];
                let code = outcode(x, y, window);
                ends[i] = if code & (LEFT | RIGHT) != INSIDE {
                    let bound = f64::from(if code & LEFT != INSIDE {
                        window.x_min
                    } else {
                        window.x_max
                    });
                    let y = if dx == 0.0 { y } else { y0 + dy * (bound - x0) / dx };
                    (bound, y)
                } else {
                    let bound = f64::from(if code & BOTTOM != INSIDE {
                        window.y_min
                    } else {
                        window.y_max
                    });
                    let x = if dy == 0.0 { x } else { x0 + dx * (bound - y0) / dy };
                    (x, bound)
                };
                resolutions += 1;
                ClipState::Testing
            }
            ClipState::Accepted => {
                return ends.iter().map(|&(x, y)| Point::from_f64(x, y)).collect();
            }
            ClipState::Rejected => return Vec::new(),
        };
    }
}

// ============================================================================
// Liang-Barsky
// ============================================================================

fn liang_barsky(p0: Point, p1: Point, window: &ClipWindow) -> Vec<Point> {
    let (x0, y0) = p0.to_f64();
    let (x1, y1) = p1.to_f64();
    let (dx, dy) = (x1 - x0, y1 - y0);

    let p = [-dx, dx, -dy, dy];
    let q = [
        x0 - f64::from(window.x_min),
        f64::from(window.x_max) - x0,
        y0 - f64::from(window.y_min),
        f64::from(window.y_max) - y0,
    ];

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (pk, qk) in p.into_iter().zip(q) {
        if pk == 0.0 {
            if qk < 0.0 {
                // Parallel to and outside this boundary
                return Vec::new();
            }
            continue;
        }
        let t = qk / pk;
        if pk < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
    }

    if t0 >= t1 {
        return Vec::new();
    }

    vec![
        Point::from_f64(x0 + t0 * dx, y0 + t0 * dy),
        Point::from_f64(x0 + t1 * dx, y0 + t1 * dy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: ClipWindow = ClipWindow::new(0, 0, 10, 10);
    const BOTH: [ClipAlgorithm; 2] = [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky];

    fn clip(a: (i32, i32), b: (i32, i32), alg: ClipAlgorithm) -> Vec<Point> {
        clip_line(a.into(), b.into(), WINDOW, alg)
    }

    #[test]
    fn test_horizontal_through_window() {
        for alg in BOTH {
            assert_eq!(
                clip((-5, 5), (15, 5), alg),
                vec![Point::new(0, 5), Point::new(10, 5)],
                "{alg}"
            );
        }
    }

    #[test]
    fn test_inside_is_unmodified() {
        for alg in BOTH {
            assert_eq!(clip((1, 2), (9, 7), alg), vec![Point::new(1, 2), Point::new(9, 7)]);
        }
    }

    #[test]
    fn test_outside_is_empty() {
        for alg in BOTH {
            assert!(clip((50, 0), (60, 10), alg).is_empty());
            assert!(clip((-3, -1), (-3, 20), alg).is_empty());
        }
    }

    #[test]
    fn test_vertical_crossing() {
        for alg in BOTH {
            assert_eq!(clip((4, -20), (4, 30), alg), vec![Point::new(4, 0), Point::new(4, 10)]);
        }
    }

    #[test]
    fn test_diagonal_corner_to_corner() {
        for alg in BOTH {
            assert_eq!(clip((-5, -5), (15, 15), alg), vec![Point::new(0, 0), Point::new(10, 10)]);
        }
    }

    #[test]
    fn test_direction_preserved() {
        for alg in BOTH {
            assert_eq!(clip((15, 5), (-5, 5), alg), vec![Point::new(10, 5), Point::new(0, 5)]);
        }
    }

    #[test]
    fn test_two_boundaries_on_one_endpoint() {
        // p0 is left and below; the line enters through the left edge
        for alg in BOTH {
            assert_eq!(clip((-4, -1), (6, 4), alg), vec![Point::new(0, 1), Point::new(6, 4)]);
        }
    }

    #[test]
    fn test_corner_regions() {
        for alg in BOTH {
            // Crosses x = 0 below the window, enters through the bottom edge
            assert_eq!(clip((-3, -4), (3, 2), alg), vec![Point::new(1, 0), Point::new(3, 2)]);
            // x + y = -3 never reaches the window
            assert!(clip((-6, 3), (3, -6), alg).is_empty());
        }
    }

    #[test]
    fn test_single_point_touch() {
        let cs = ClipAlgorithm::CohenSutherland;
        assert_eq!(clip((-1, 1), (1, -1), cs), vec![Point::new(0, 0), Point::new(0, 0)]);
        assert_eq!(clip((0, 5), (-5, 5), cs), vec![Point::new(0, 5), Point::new(0, 5)]);

        // Liang-Barsky needs a non-empty parameter interval
        let lb = ClipAlgorithm::LiangBarsky;
        assert!(clip((-1, 1), (1, -1), lb).is_empty());
        assert!(clip((-5, 5), (5, -5), lb).is_empty());
        assert!(clip((0, 5), (-5, 5), lb).is_empty());
        assert!(clip((10, 10), (14, 12), lb).is_empty());
    }

    #[test]
    fn test_degenerate_segment() {
        for alg in BOTH {
            assert_eq!(clip((3, 3), (3, 3), alg), vec![Point::new(3, 3), Point::new(3, 3)]);
            assert!(clip((30, 3), (30, 3), alg).is_empty());
        }
    }

    #[test]
    fn test_segment_on_boundary() {
        for alg in BOTH {
            assert_eq!(clip((-2, 10), (12, 10), alg), vec![Point::new(0, 10), Point::new(10, 10)]);
        }
    }

    #[test]
    fn test_outcode_bits() {
        assert_eq!(outcode(-1.0, 5.0, &WINDOW), LEFT);
        assert_eq!(outcode(11.0, 11.0, &WINDOW), RIGHT | TOP);
        assert_eq!(outcode(5.0, -0.5, &WINDOW), BOTTOM);
        assert_eq!(outcode(0.0, 10.0, &WINDOW), INSIDE);
    }

    #[test]
    fn test_algorithm_tags() {
        assert_eq!(
            "Cohen-Sutherland".parse::<ClipAlgorithm>().unwrap(),
            ClipAlgorithm::CohenSutherland
        );
        assert_eq!("Liang-Barsky".parse::<ClipAlgorithm>().unwrap(), ClipAlgorithm::LiangBarsky);
        assert!("Sutherland-Hodgman".parse::<ClipAlgorithm>().is_err());
    }
}
