//! # Trueno-Raster
//!
//! Integer rasterization kernel for 2D primitives on a pixel grid.
//!
//! Converts lines, polygons, ellipses and parametric curves into sequences of
//! integer pixel coordinates, applies affine transforms to control points and
//! clips line segments against axis-aligned windows. A small command script
//! interpreter paints scenes of primitives and writes them out as PNG.
//!
//! ## Features
//!
//! - **Lines**: Naive slope, DDA and integer-only Bresenham
//! - **Ellipses**: midpoint algorithm with four-way symmetry
//! - **Curves**: piecewise cubic Bézier and clamped uniform cubic B-spline
//! - **Transforms**: translate, clockwise rotate, uniform scale
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let pixels = rasterize_line(Point::new(0, 0), Point::new(3, 3), LineAlgorithm::Bresenham);
//! assert_eq!(pixels.len(), 4);
//!
//! let clipped = clip_line(
//!     Point::new(-5, 5),
//!     Point::new(15, 5),
//!     ClipWindow::new(0, 0, 10, 10),
//!     ClipAlgorithm::LiangBarsky,
//! );
//! assert_eq!(clipped, vec![Point::new(0, 5), Point::new(10, 5)]);
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Cohen, D., & Sutherland, I. (1967). Line clipping by region outcodes.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."
//! - de Boor, C. (1972). "On calculating with B-splines."

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Kernel Modules
// ============================================================================

/// Integer points and clip windows.
pub mod geometry;

/// Rasterization of lines, polygons, ellipses and curves.
pub mod raster;

/// Affine transforms on point lists.
pub mod transform;

/// Line clipping against axis-aligned windows.
pub mod clip;

// ============================================================================
// Scene Modules
// ============================================================================

/// Tagged primitive descriptions.
pub mod primitive;

/// Ordered collection of identified primitives.
pub mod scene;

/// Color types.
pub mod color;

/// RGBA pixel buffer.
pub mod framebuffer;

/// Painting scenes into a framebuffer.
pub mod canvas;

// ============================================================================
// Application Modules
// ============================================================================

/// Drawing command scripts.
pub mod script;

/// Renderer configuration.
pub mod config;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::clip::{clip_line, ClipAlgorithm};
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipWindow, Point};
    pub use crate::primitive::Primitive;
    pub use crate::raster::{
        rasterize_curve, rasterize_ellipse, rasterize_line, rasterize_polygon, CurveAlgorithm,
        LineAlgorithm,
    };
    pub use crate::scene::{Item, Scene};
    pub use crate::script::{parse_line, parse_script, Command, Interpreter};
    pub use crate::transform::{rotate, scale, translate};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_end_to_end() {
        let mut scene = Scene::new();
        scene.insert(
            "l",
            Primitive::line(Point::new(0, 0), Point::new(4, 0), LineAlgorithm::Dda),
        );
        let mut canvas = Canvas::new(5, 1, Rgba::WHITE).unwrap();
        canvas.paint(&scene).unwrap();
        assert!(canvas
            .framebuffer()
            .pixels()
            .chunks_exact(4)
            .all(|px| px == [0, 0, 0, 255]));
    }
}
