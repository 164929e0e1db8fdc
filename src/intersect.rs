// Line / circle intersection for a circle centred at the origin.
//
// The line through two points is written as A*x + B*y + C = 0 and solved with
// the perpendicular-foot construction: drop a perpendicular from the origin,
// then walk half a chord along the line in both directions.

use crate::error::{Error, Result};
use crate::types::Point;

/// Below this squared normal length the two points are treated as the same point.
pub const NEAR_ZERO: f64 = 1e-12;

/// Both points where the line through `p0` and `p1` crosses the circle of
/// `radius` around the origin.
///
/// For a line with slope k the first point is the one further along -x
/// (the order you get from `y = k*x + b`). A tangent line returns the
/// touching point twice.
pub fn line_circle_intersection(p0: Point, p1: Point, radius: f64) -> Result<(Point, Point)> {
    let (mut a, mut b, mut c) = implicit_line(p0, p1);
    // Keep B negative so the pair comes out in slope-form order.
    if b > 0.0 || (b == 0.0 && a < 0.0) {
        (a, b, c) = (-a, -b, -c);
    }

    let ab2 = a * a + b * b;
    if ab2 < NEAR_ZERO {
        return Err(Error::DegenerateLine);
    }

    // Foot of the perpendicular from the origin.
    let x0 = -a * c / ab2;
    let y0 = -b * c / ab2;

    let d = radius * radius - c * c / ab2;
    if d < 0.0 {
        return Err(Error::NoIntersection);
    }
    let m = (d / ab2).sqrt();

    Ok((Point::new(x0 + b * m, y0 - a * m), Point::new(x0 - b * m, y0 + a * m)))
}

/// (A, B, C) of the line through two points, unnormalized.
#[inline]
fn implicit_line(p0: Point, p1: Point) -> (f64, f64, f64) {
    let a = p0.y - p1.y;
    let b = p1.x - p0.x;
    let c = p0.x * p1.y - p1.x * p0.y;
    (a, b, c)
}
