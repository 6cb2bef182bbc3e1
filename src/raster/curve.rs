//! Parametric curve rasterization.
//!
//! Two evaluators over an ordered control polygon:
//!
//! - **Bézier**: piecewise cubic, one segment per window of four consecutive
//!   control points, cubic Bernstein blend.
//! - **B-spline**: clamped cubic uniform B-spline over all control points,
//!   evaluated with De Boor's recursion.
//!
//! Curve samples are rounded per axis with
//! [`round_to_i32`](crate::geometry::round_to_i32). The output is the sampled
//! point sequence, not a connected pixel path.
//!
//! # References
//!
//! - de Boor, C. (1972). "On calculating with B-splines."
//!   *Journal of Approximation Theory*, 6(1), 50-62.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Parameter samples per curve segment.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 50;

/// Minimum number of control points for either evaluator.
pub const MIN_CONTROL_POINTS: usize = 4;

/// B-spline degree.
const DEGREE: usize = 3;

/// Knot spans narrower than this are treated as empty.
const KNOT_EPSILON: f64 = 1e-6;

/// Curve evaluation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveAlgorithm {
    /// Piecewise cubic Bézier.
    Bezier,
    /// Clamped cubic uniform B-spline.
    BSpline,
}

impl CurveAlgorithm {
    /// Tag as written in command scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        }
    }
}

impl FromStr for CurveAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Bezier" => Ok(Self::Bezier),
            "B-spline" => Ok(Self::BSpline),
            _ => Err(Error::UnsupportedAlgorithm {
                kind: "curve",
                name: s.to_string(),
                expected: "Bezier, B-spline",
            }),
        }
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rasterize a curve with [`DEFAULT_SAMPLES_PER_SEGMENT`] samples per
/// segment.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if fewer than four control points are
/// given.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::raster::{rasterize_curve, CurveAlgorithm};
///
/// let ctrl = [Point::new(0, 0), Point::new(10, 30), Point::new(30, 30), Point::new(40, 0)];
/// let pixels = rasterize_curve(&ctrl, CurveAlgorithm::Bezier).unwrap();
/// assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
/// assert_eq!(pixels.last(), Some(&Point::new(40, 0)));
/// ```
pub fn rasterize_curve(control_points: &[Point], algorithm: CurveAlgorithm) -> Result<Vec<Point>> {
    rasterize_curve_with_samples(control_points, algorithm, DEFAULT_SAMPLES_PER_SEGMENT)
}

/// Rasterize a curve with an explicit sample density.
///
/// A density of zero is treated as one sample per segment.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if fewer than four control points are
/// given.
pub fn rasterize_curve_with_samples(
    control_points: &[Point],
    algorithm: CurveAlgorithm,
    samples_per_segment: usize,
) -> Result<Vec<Point>> {
    let n = control_points.len();
    if n < MIN_CONTROL_POINTS {
        return Err(Error::InvalidInput(format!(
            "{algorithm} curve needs at least {MIN_CONTROL_POINTS} control points, got {n}"
        )));
    }

    let samples = samples_per_segment.max(1);
    debug!("rasterize_curve with {n} control points using {algorithm}, {samples} samples/segment");

    Ok(match algorithm {
        CurveAlgorithm::Bezier => bezier(control_points, samples),
        CurveAlgorithm::BSpline => bspline(control_points, samples),
    })
}

// ============================================================================
// Bézier
// ============================================================================

fn bezier(points: &[Point], samples: usize) -> Vec<Point> {
    let segments = points.len() - 3;
    let mut pixels = Vec::with_capacity(segments * samples + 1);

    for (i, window) in points.windows(4).enumerate() {
        // t = 0 of every later window is skipped
        let first = usize::from(i > 0);
        for j in first..=samples {
            let t = j as f64 / samples as f64;
            pixels.push(cubic_bezier(window, t));
        }
    }

    pixels
}

fn cubic_bezier(ctrl: &[Point], t: f64) -> Point {
    let mt = 1.0 - t;
    let weights = [mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t];

    let (x, y) = ctrl
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(x, y), (p, w)| (x + w * f64::from(p.x), y + w * f64::from(p.y)));

    Point::from_f64(x, y)
}

// ============================================================================
// B-spline
// ============================================================================

/// Clamped uniform knot vector for `n` control points: `DEGREE + 1` zeros,
/// interior knots `(i - DEGREE) / (n - DEGREE)`, `DEGREE + 1` ones.
fn clamped_knots(n: usize) -> Vec<f64> {
    let k = DEGREE;
    (0..=n + k)
        .map(|i| {
            if i <= k {
                0.0
            } else if i >= n {
                1.0
            } else {
                (i - k) as f64 / (n - k) as f64
            }
        })
        .collect()
}

/// Index `d` with `knots[d] <= t < knots[d + 1]`, restricted to the valid
/// spans `DEGREE..n`. The domain end `t == knots[n]` maps to span `n - 1`.
fn find_span(knots: &[f64], n: usize, t: f64) -> usize {
    if t >= knots[n] {
        return n - 1;
    }
    (DEGREE..n)
        .find(|&d| knots[d] <= t && t < knots[d + 1])
        .unwrap_or(n - 1)
}

fn de_boor(points: &[Point], knots: &[f64], span: usize, t: f64) -> (f64, f64) {
    let k = DEGREE;
    let mut d = [(0.0, 0.0); DEGREE + 1];
    for (j, slot) in d.iter_mut().enumerate() {
        *slot = points[j + span - k].to_f64();
    }

    for r in 1..=k {
        for j in (r..=k).rev() {
            let left = knots[j + span - k];
            let right = knots[j + 1 + span - r];
            let denom = right - left;
            let alpha = if denom.abs() < KNOT_EPSILON {
                0.0
            } else {
                (t - left) / denom
            };
            d[j] = (
                (1.0 - alpha) * d[j - 1].0 + alpha * d[j].0,
                (1.0 - alpha) * d[j - 1].1 + alpha * d[j].1,
            );
        }
    }

    d[k]
}

fn bspline(points: &[Point], samples: usize) -> Vec<Point> {
    let n = points.len();
    let knots = clamped_knots(n);
    let (start, end) = (knots[DEGREE], knots[n]);
    let total = samples * (n - DEGREE);

    (0..=total)
        .map(|j| {
            let t = start + (end - start) * (j as f64 / total as f64);
            let span = find_span(&knots, n, t);
            let (x, y) = de_boor(points, &knots, span, t);
            Point::from_f64(x, y)
        })
        .collect()
}
