//! Axis-aligned ellipse outline rasterization (midpoint algorithm).
//!
//! The first quadrant is traced in two regions: region 1 while the slope
//! magnitude is at most 1 (x drives), region 2 afterwards (y drives). Each
//! traced pixel is mirrored into the other three quadrants.
//!
//! # References
//!
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//!   *IEEE Computer Graphics and Applications*, 4(9), 24-35.

use std::collections::BTreeSet;

use log::debug;

use crate::geometry::Point;

/// Rasterize the ellipse inscribed in the box with opposite corners
/// `corner0` and `corner1` (in either order).
///
/// The center is the floor midpoint of the corners and the semi-axes are
/// `|dx| / 2` and `|dy| / 2` (floor). Output is deduplicated and sorted
/// ascending by `(x, y)`.
///
/// Degenerate boxes: both semi-axes zero gives the center alone; a zero
/// horizontal semi-axis gives the vertical run over the original y-range at
/// the center column; a zero vertical semi-axis gives the horizontal run over
/// the original x-range at the center row.
#[must_use]
pub fn rasterize_ellipse(corner0: Point, corner1: Point) -> Vec<Point> {
    debug!("rasterize_ellipse box {corner0} {corner1}");

    let (x0, y0) = (i64::from(corner0.x), i64::from(corner0.y));
    let (x1, y1) = (i64::from(corner1.x), i64::from(corner1.y));
    let cx = (x0 + x1).div_euclid(2);
    let cy = (y0 + y1).div_euclid(2);
    let a = (x1 - x0).abs() / 2;
    let b = (y1 - y0).abs() / 2;

    if a == 0 && b == 0 {
        return vec![pixel(cx, cy)];
    }
    if a == 0 {
        return (y0.min(y1)..=y0.max(y1)).map(|y| pixel(cx, y)).collect();
    }
    if b == 0 {
        return (x0.min(x1)..=x0.max(x1)).map(|x| pixel(x, cy)).collect();
    }

    let mut pixels = BTreeSet::new();
    let mut plot4 = |x: i64, y: i64| {
        pixels.insert(pixel(cx + x, cy + y));
        pixels.insert(pixel(cx - x, cy + y));
        pixels.insert(pixel(cx + x, cy - y));
        pixels.insert(pixel(cx - x, cy - y));
    };

    let a2 = a * a;
    let b2 = b * b;
    let mut x = 0;
    let mut y = b;

    // Region 1
    let mut d1 = b2 - a2 * b + a2 / 4;
    while 2 * b2 * x <= 2 * a2 * y {
        plot4(x, y);
        if d1 < 0 {
            d1 += 2 * b2 * (x + 1);
        } else {
            d1 += 2 * b2 * (x + 1) - 2 * a2 * (y - 1);
            y -= 1;
        }
        x += 1;
    }

    // Region 2, seeded from where region 1 stopped
    let xh = x as f64 + 0.5;
    let ym = (y - 1) as f64;
    let mut d2 = (b2 as f64 * xh * xh + a2 as f64 * ym * ym - (a2 * b2) as f64).round() as i64;
    while y >= 0 {
        plot4(x, y);
        if d2 > 0 {
            d2 += 2 * a2 * (1 - y);
        } else {
            d2 += 2 * b2 * (x + 1) + 2 * a2 * (1 - y);
            x += 1;
        }
        y -= 1;
    }

    pixels.into_iter().collect()
}

#[inline]
fn pixel(x: i64, y: i64) -> Point {
    Point::new(x as i32, y as i32)
}
