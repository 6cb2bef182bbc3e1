//! Line segment rasterization.
//!
//! Implements three incremental algorithms that turn a segment into the
//! sequence of pixels covering it, inclusive of both endpoints.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Line (and polygon edge) rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Slope sampling along the x axis with truncation. Leaves gaps on steep
    /// segments; kept as a reference.
    Naive,
    /// Digital differential analyzer.
    Dda,
    /// Bresenham's integer-only midpoint algorithm.
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    const EXPECTED: &'static str = "Naive, DDA, Bresenham";

    /// Tag as written in command scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        }
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Naive" => Ok(Self::Naive),
            "DDA" => Ok(Self::Dda),
            "Bresenham" => Ok(Self::Bresenham),
            _ => Err(Error::UnsupportedAlgorithm {
                kind: "line",
                name: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rasterize the segment from `p0` to `p1`.
///
/// The result starts at `p0`, ends at `p1` and contains no duplicates.
/// Every algorithm sweeps from the lexicographically smaller endpoint and the
/// sequence is reversed when `p1 < p0`, so swapping the endpoints yields
/// exactly the reversed sequence.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::raster::{rasterize_line, LineAlgorithm};
///
/// let pixels = rasterize_line(Point::new(0, 0), Point::new(3, 2), LineAlgorithm::Bresenham);
/// assert_eq!(
///     pixels,
///     vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1), Point::new(3, 2)]
/// );
/// ```
#[must_use]
pub fn rasterize_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<Point> {
    debug!("rasterize_line {p0} -> {p1} using {algorithm}");

    if p0 == p1 {
        return vec![p0];
    }

    if p1 < p0 {
        let mut pixels = sweep(p1, p0, algorithm);
        pixels.reverse();
        return pixels;
    }

    sweep(p0, p1, algorithm)
}

fn sweep(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<Point> {
    match algorithm {
        LineAlgorithm::Naive => naive(p0, p1),
        LineAlgorithm::Dda => dda(p0, p1),
        LineAlgorithm::Bresenham => bresenham(p0, p1),
    }
}

fn naive(p0: Point, p1: Point) -> Vec<Point> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    if dx == 0 {
        let step = dy.signum();
        return (0..=dy.abs()).map(|i| Point::new(p0.x, p0.y + i * step)).collect();
    }

    let step = dx.signum();
    (0..=dx.abs())
        .map(|i| {
            let x = p0.x + i * step;
            // k * (x - x0) with k = dy / dx, evaluated as one division so the
            // far endpoint lands exactly. Truncation toward zero, not
            // round_to_i32.
            let rise = (i64::from(dy) * i64::from(x - p0.x)) as f64 / f64::from(dx);
            Point::new(x, (f64::from(p0.y) + rise) as i32)
        })
        .collect()
}

fn dda(p0: Point, p1: Point) -> Vec<Point> {
    let dx = i64::from(p1.x) - i64::from(p0.x);
    let dy = i64::from(p1.y) - i64::from(p0.y);
    let steps = dx.abs().max(dy.abs());

    let (x0, y0) = p0.to_f64();
    let n = steps as f64;

    // Position i is p0 + i * (dx, dy) / steps, computed from the exact
    // product instead of a running sum so no error accumulates.
    (0..=steps)
        .map(|i| Point::from_f64(x0 + (dx * i) as f64 / n, y0 + (dy * i) as f64 / n))
        .collect()
}

fn bresenham(p0: Point, p1: Point) -> Vec<Point> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let x_step = dx.signum();
    let y_step = dy.signum();
    let dx_abs = i64::from(dx.abs());
    let dy_abs = i64::from(dy.abs());

    let mut x = p0.x;
    let mut y = p0.y;
    let mut pixels = Vec::with_capacity(dx_abs.max(dy_abs) as usize + 1);
    pixels.push(Point::new(x, y));

    // Vertical
    if dx_abs == 0 {
        for _ in 0..dy_abs {
            y += y_step;
            pixels.push(Point::new(x, y));
        }
        return pixels;
    }

    // Horizontal
    if dy_abs == 0 {
        for _ in 0..dx_abs {
            x += x_step;
            pixels.push(Point::new(x, y));
        }
        return pixels;
    }

    if dx_abs > dy_abs {
        let mut p = 2 * dy_abs - dx_abs;
        for _ in 0..dx_abs {
            x += x_step;
            if p >= 0 {
                y += y_step;
                p += 2 * (dy_abs - dx_abs);
            } else {
                p += 2 * dy_abs;
            }
            pixels.push(Point::new(x, y));
        }
    } else {
        let mut p = 2 * dx_abs - dy_abs;
        for _ in 0..dy_abs {
            y += y_step;
            if p >= 0 {
                x += x_step;
                p += 2 * (dx_abs - dy_abs);
            } else {
                p += 2 * dx_abs;
            }
            pixels.push(Point::new(x, y));
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_bresenham_shallow() {
        let pixels = rasterize_line(Point::new(0, 0), Point::new(3, 2), LineAlgorithm::Bresenham);
        assert_eq!(pixels, pts(&[(0, 0), (1, 1), (2, 1), (3, 2)]));
    }

    #[test]
    fn test_bresenham_steep() {
        let pixels = rasterize_line(Point::new(0, 0), Point::new(1, 3), LineAlgorithm::Bresenham);
        assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
        assert_eq!(pixels.last(), Some(&Point::new(1, 3)));
        assert_eq!(pixels.len(), 4);
        // One pixel per row on the major axis
        for (i, p) in pixels.iter().enumerate() {
            assert_eq!(p.y, i as i32);
        }
    }

    #[test]
    fn test_single_point() {
        for alg in [LineAlgorithm::Naive, LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
            assert_eq!(rasterize_line(Point::new(4, -2), Point::new(4, -2), alg), pts(&[(4, -2)]));
        }
    }

    #[test]
    fn test_vertical_downward() {
        let pixels = rasterize_line(Point::new(2, 3), Point::new(2, 0), LineAlgorithm::Bresenham);
        assert_eq!(pixels, pts(&[(2, 3), (2, 2), (2, 1), (2, 0)]));
    }

    #[test]
    fn test_horizontal_leftward() {
        let pixels = rasterize_line(Point::new(1, 5), Point::new(-2, 5), LineAlgorithm::Dda);
        assert_eq!(pixels, pts(&[(1, 5), (0, 5), (-1, 5), (-2, 5)]));
    }

    #[test]
    fn test_dda_rounds_half_away_from_zero() {
        // y steps by 0.5: 0, 0.5, 1
        let pixels = rasterize_line(Point::new(0, 0), Point::new(2, 1), LineAlgorithm::Dda);
        assert_eq!(pixels, pts(&[(0, 0), (1, 1), (2, 1)]));
    }

    #[test]
    fn test_dda_diagonal() {
        let pixels = rasterize_line(Point::new(0, 0), Point::new(-3, -3), LineAlgorithm::Dda);
        assert_eq!(pixels, pts(&[(0, 0), (-1, -1), (-2, -2), (-3, -3)]));
    }

    #[test]
    fn test_bresenham_reverse_is_symmetric() {
        // Tie case where a direction-sensitive Bresenham would pick
        // different pixels
        let forward = rasterize_line(Point::new(0, 0), Point::new(2, 1), LineAlgorithm::Bresenham);
        let mut backward =
            rasterize_line(Point::new(2, 1), Point::new(0, 0), LineAlgorithm::Bresenham);
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward, pts(&[(0, 0), (1, 1), (2, 1)]));
    }

    #[test]
    fn test_naive_truncates() {
        let pixels = rasterize_line(Point::new(0, 0), Point::new(3, 2), LineAlgorithm::Naive);
        // y = 2/3 * x truncated: 0, 0, 1, 2
        assert_eq!(pixels, pts(&[(0, 0), (1, 0), (2, 1), (3, 2)]));
    }

    #[test]
    fn test_naive_vertical_both_directions() {
        let up = rasterize_line(Point::new(0, 0), Point::new(0, 2), LineAlgorithm::Naive);
        let down = rasterize_line(Point::new(0, 2), Point::new(0, 0), LineAlgorithm::Naive);
        assert_eq!(up, pts(&[(0, 0), (0, 1), (0, 2)]));
        assert_eq!(down, pts(&[(0, 2), (0, 1), (0, 0)]));
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("DDA".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Dda);
        assert_eq!("Bresenham".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Bresenham);
        assert_eq!("Naive".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Naive);
        assert!(matches!(
            "Wu".parse::<LineAlgorithm>(),
            Err(Error::UnsupportedAlgorithm { kind: "line", .. })
        ));
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for alg in [LineAlgorithm::Naive, LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
            assert_eq!(alg.to_string().parse::<LineAlgorithm>().unwrap(), alg);
        }
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
