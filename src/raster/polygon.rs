//! Polygon outline rasterization.

use log::debug;

use super::line::{rasterize_line, LineAlgorithm};
use crate::geometry::Point;

/// Rasterize the closed outline through `vertices`.
///
/// Edge `i` runs from `vertices[i - 1]` to `vertices[i]` (indices modulo the
/// vertex count), so the first edge emitted is the closing edge from the last
/// vertex back to the first. Edge outputs are concatenated without
/// deduplication: a vertex shared by two edges appears twice.
#[must_use]
pub fn rasterize_polygon(vertices: &[Point], algorithm: LineAlgorithm) -> Vec<Point> {
    debug!("rasterize_polygon with {} vertices using {algorithm}", vertices.len());

    let n = vertices.len();
    (0..n)
        .flat_map(|i| rasterize_line(vertices[(i + n - 1) % n], vertices[i], algorithm))
        .collect()
}
