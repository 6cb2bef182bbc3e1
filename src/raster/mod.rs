//! Rasterization of geometric primitives into integer pixel sequences.
//!
//! Every function here is pure: it borrows its input, allocates a fresh
//! output vector and keeps no state between calls.
//!
//! # Algorithms
//!
//! - **DDA / Bresenham**: line segments and polygon outlines
//! - **Midpoint ellipse**: axis-aligned ellipse outlines
//! - **Cubic Bézier / De Boor**: parametric curves
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//! - de Boor, C. (1972). "On calculating with B-splines."

mod curve;
mod ellipse;
mod line;
mod polygon;

pub use curve::{
    rasterize_curve, rasterize_curve_with_samples, CurveAlgorithm, DEFAULT_SAMPLES_PER_SEGMENT,
    MIN_CONTROL_POINTS,
};
pub use ellipse::rasterize_ellipse;
pub use line::{rasterize_line, LineAlgorithm};
pub use polygon::rasterize_polygon;
