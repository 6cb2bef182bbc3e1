//! Tagged primitive descriptions.
//!
//! A [`Primitive`] carries exactly the parameters its kind needs and knows
//! how to rasterize, transform and clip itself by delegating to the kernel
//! modules.

use crate::clip::{clip_line, ClipAlgorithm};
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point};
use crate::raster::{
    rasterize_curve_with_samples, rasterize_ellipse, rasterize_line, rasterize_polygon,
    CurveAlgorithm, LineAlgorithm, DEFAULT_SAMPLES_PER_SEGMENT, MIN_CONTROL_POINTS,
};
use crate::transform;

/// Minimum number of polygon vertices.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Line segment.
    Line {
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
        /// Rasterization algorithm.
        algorithm: LineAlgorithm,
    },
    /// Closed polygon outline.
    Polygon {
        /// Vertices in drawing order; the closing edge is implicit.
        vertices: Vec<Point>,
        /// Edge rasterization algorithm.
        algorithm: LineAlgorithm,
    },
    /// Axis-aligned ellipse given by its bounding box.
    Ellipse {
        /// One bounding box corner.
        corner0: Point,
        /// The opposite corner.
        corner1: Point,
    },
    /// Parametric curve.
    Curve {
        /// Ordered control points.
        control_points: Vec<Point>,
        /// Curve evaluation algorithm.
        algorithm: CurveAlgorithm,
    },
}

impl Primitive {
    /// Create a line segment.
    #[must_use]
    pub const fn line(start: Point, end: Point, algorithm: LineAlgorithm) -> Self {
        Self::Line {
            start,
            end,
            algorithm,
        }
    }

    /// Create a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for fewer than three vertices.
    pub fn polygon(vertices: Vec<Point>, algorithm: LineAlgorithm) -> Result<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(Error::InvalidInput(format!(
                "polygon needs at least {MIN_POLYGON_VERTICES} vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self::Polygon {
            vertices,
            algorithm,
        })
    }

    /// Create an ellipse from two opposite bounding box corners.
    #[must_use]
    pub const fn ellipse(corner0: Point, corner1: Point) -> Self {
        Self::Ellipse { corner0, corner1 }
    }

    /// Create a curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for fewer than four control points.
    pub fn curve(control_points: Vec<Point>, algorithm: CurveAlgorithm) -> Result<Self> {
        if control_points.len() < MIN_CONTROL_POINTS {
            return Err(Error::InvalidInput(format!(
                "curve needs at least {MIN_CONTROL_POINTS} control points, got {}",
                control_points.len()
            )));
        }
        Ok(Self::Curve {
            control_points,
            algorithm,
        })
    }

    /// Lowercase kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Polygon { .. } => "polygon",
            Self::Ellipse { .. } => "ellipse",
            Self::Curve { .. } => "curve",
        }
    }

    /// The defining points in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Line { start, end, .. } => vec![*start, *end],
            Self::Polygon { vertices, .. } => vertices.clone(),
            Self::Ellipse { corner0, corner1 } => vec![*corner0, *corner1],
            Self::Curve { control_points, .. } => control_points.clone(),
        }
    }

    /// Same kind and algorithm with new defining points.
    ///
    /// `points` must have the same length as [`Primitive::points`].
    fn with_points(&self, points: Vec<Point>) -> Self {
        match self {
            Self::Line { algorithm, .. } => Self::line(points[0], points[1], *algorithm),
            Self::Polygon { algorithm, .. } => Self::Polygon {
                vertices: points,
                algorithm: *algorithm,
            },
            Self::Ellipse { .. } => Self::ellipse(points[0], points[1]),
            Self::Curve { algorithm, .. } => Self::Curve {
                control_points: points,
                algorithm: *algorithm,
            },
        }
    }

    /// Rasterize with the default curve sample density.
    ///
    /// # Errors
    ///
    /// Fails only for curves built without the validating constructor that
    /// have fewer than four control points.
    pub fn rasterize(&self) -> Result<Vec<Point>> {
        self.rasterize_with_samples(DEFAULT_SAMPLES_PER_SEGMENT)
    }

    /// Rasterize, sampling curves with `samples_per_segment`.
    ///
    /// # Errors
    ///
    /// See [`Primitive::rasterize`].
    pub fn rasterize_with_samples(&self, samples_per_segment: usize) -> Result<Vec<Point>> {
        Ok(match self {
            Self::Line {
                start,
                end,
                algorithm,
            } => rasterize_line(*start, *end, *algorithm),
            Self::Polygon {
                vertices,
                algorithm,
            } => rasterize_polygon(vertices, *algorithm),
            Self::Ellipse { corner0, corner1 } => rasterize_ellipse(*corner0, *corner1),
            Self::Curve {
                control_points,
                algorithm,
            } => rasterize_curve_with_samples(control_points, *algorithm, samples_per_segment)?,
        })
    }

    /// Translated copy.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        self.with_points(transform::translate(&self.points(), dx, dy))
    }

    /// Copy rotated clockwise about `pivot`.
    ///
    /// # Errors
    ///
    /// Ellipses are axis-aligned by construction and cannot be rotated.
    pub fn rotated(&self, pivot: Point, degrees: f64) -> Result<Self> {
        if let Self::Ellipse { .. } = self {
            return Err(Error::UnsupportedOperation {
                operation: "rotate",
                primitive: self.kind(),
            });
        }
        Ok(self.with_points(transform::rotate(&self.points(), pivot, degrees)))
    }

    /// Copy scaled about `pivot`.
    #[must_use]
    pub fn scaled(&self, pivot: Point, factor: f64) -> Self {
        self.with_points(transform::scale(&self.points(), pivot, factor))
    }

    /// Clip a line to `window`.
    ///
    /// Returns `Ok(None)` when nothing of the line is visible.
    ///
    /// # Errors
    ///
    /// Only lines can be clipped.
    pub fn clipped(&self, window: ClipWindow, algorithm: ClipAlgorithm) -> Result<Option<Self>> {
        let Self::Line {
            start,
            end,
            algorithm: line_algorithm,
        } = self
        else {
            return Err(Error::UnsupportedOperation {
                operation: "clip",
                primitive: self.kind(),
            });
        };

        Ok(match clip_line(*start, *end, window, algorithm).as_slice() {
            [a, b] => Some(Self::line(*a, *b, *line_algorithm)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_constructors_validate_arity() {
        assert!(Primitive::polygon(vec![p(0, 0), p(1, 1)], LineAlgorithm::Dda).is_err());
        assert!(Primitive::polygon(vec![p(0, 0), p(1, 1), p(2, 0)], LineAlgorithm::Dda).is_ok());
        assert!(Primitive::curve(vec![p(0, 0); 3], CurveAlgorithm::Bezier).is_err());
        assert!(Primitive::curve(vec![p(0, 0); 4], CurveAlgorithm::BSpline).is_ok());
    }

    #[test]
    fn test_rasterize_delegates() {
        let line = Primitive::line(p(0, 0), p(3, 2), LineAlgorithm::Bresenham);
        assert_eq!(line.rasterize().unwrap(), rasterize_line(p(0, 0), p(3, 2), LineAlgorithm::Bresenham));

        let ellipse = Primitive::ellipse(p(0, 0), p(0, 0));
        assert_eq!(ellipse.rasterize().unwrap(), vec![p(0, 0)]);
    }

    #[test]
    fn test_translate_keeps_kind_and_algorithm() {
        let poly =
            Primitive::polygon(vec![p(0, 0), p(4, 0), p(0, 4)], LineAlgorithm::Dda).unwrap();
        let moved = poly.translated(1, 2);
        assert_eq!(
            moved,
            Primitive::Polygon {
                vertices: vec![p(1, 2), p(5, 2), p(1, 6)],
                algorithm: LineAlgorithm::Dda,
            }
        );
    }

    #[test]
    fn test_rotate_ellipse_unsupported() {
        let ellipse = Primitive::ellipse(p(0, 0), p(4, 2));
        assert!(matches!(
            ellipse.rotated(p(0, 0), 90.0),
            Err(Error::UnsupportedOperation { operation: "rotate", primitive: "ellipse" })
        ));
    }

    #[test]
    fn test_rotate_line() {
        let line = Primitive::line(p(0, 0), p(10, 0), LineAlgorithm::Dda);
        let rotated = line.rotated(p(0, 0), 90.0).unwrap();
        assert_eq!(rotated.points(), vec![p(0, 0), p(0, -10)]);
    }

    #[test]
    fn test_scale_ellipse_box() {
        let ellipse = Primitive::ellipse(p(0, 0), p(4, 2));
        assert_eq!(ellipse.scaled(p(0, 0), 2.0), Primitive::ellipse(p(0, 0), p(8, 4)));
    }

    #[test]
    fn test_clip_line() {
        let line = Primitive::line(p(-5, 5), p(15, 5), LineAlgorithm::Bresenham);
        let window = ClipWindow::new(0, 0, 10, 10);
        let clipped = line.clipped(window, ClipAlgorithm::LiangBarsky).unwrap();
        assert_eq!(clipped, Some(Primitive::line(p(0, 5), p(10, 5), LineAlgorithm::Bresenham)));

        let far = Primitive::line(p(50, 5), p(60, 5), LineAlgorithm::Bresenham);
        assert_eq!(far.clipped(window, ClipAlgorithm::CohenSutherland).unwrap(), None);
    }

    #[test]
    fn test_clip_non_line_unsupported() {
        let curve = Primitive::curve(vec![p(0, 0); 4], CurveAlgorithm::Bezier).unwrap();
        assert!(curve
            .clipped(ClipWindow::new(0, 0, 1, 1), ClipAlgorithm::LiangBarsky)
            .is_err());
    }
}
