// Anchor fan: lines through a common pivot, each rotated a fixed step from the
// previous one, intersected with the circle to get the ideal anchor points.

use tracing::debug;

use crate::error::{Error, Result};
use crate::intersect::{NEAR_ZERO, line_circle_intersection};
use crate::raster::MAX_COORD;
use crate::types::{Anchor, AnchorSet, Point};

/// Horizontal run used to turn a slope into a second point on the line.
const RUN: f64 = 10.0;

/// Direction of a line through the pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    /// Slope of the line from `p0` to `p1`.
    pub fn between(p0: Point, p1: Point) -> Result<Self> {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        if dx * dx + dy * dy < NEAR_ZERO {
            return Err(Error::DegenerateLine);
        }
        if dx == 0.0 {
            return Ok(Slope::Vertical);
        }
        Ok(Slope::Finite(dy / dx))
    }

    /// A second point on the line through `pivot` with this slope.
    fn extend(self, pivot: Point) -> Point {
        match self {
            Slope::Finite(k) => Point::new(pivot.x + RUN, pivot.y + RUN * k),
            Slope::Vertical => Point::new(pivot.x, pivot.y + RUN),
        }
    }
}

/// Rotate a slope by `step` degrees with the tangent addition formula
/// `k' = (tan(step) + k) / (1 - tan(step) * k)`.
///
/// A quarter turn uses `k' = -1/k` since tan(90°) is unbounded.
pub fn rotate_slope(slope: Slope, step: f64) -> Slope {
    if step == 90.0 {
        return match slope {
            Slope::Finite(k) if k == 0.0 => Slope::Vertical,
            Slope::Finite(k) => Slope::Finite(-1.0 / k),
            Slope::Vertical => Slope::Finite(0.0),
        };
    }

    let t = step.to_radians().tan();
    match slope {
        Slope::Finite(k) => {
            let denom = 1.0 - t * k;
            if denom.abs() < NEAR_ZERO {
                Slope::Vertical
            } else {
                Slope::Finite((t + k) / denom)
            }
        }
        Slope::Vertical if t == 0.0 => Slope::Vertical,
        Slope::Vertical => Slope::Finite(-1.0 / t),
    }
}

/// Build the anchor fan pivoting at `p1`.
///
/// The first direction is the line `p0 -> p1`; each of the following `n`
/// directions is the previous one rotated by `360/(2n)` degrees, so the last
/// direction lands back on the first line. Every direction contributes the
/// two points where it crosses the circle of `radius` around the origin.
/// The rotation is applied to the running slope, so rounding compounds along
/// the fan.
pub fn point_intersection(p0: Point, p1: Point, radius: f64, n: usize) -> Result<AnchorSet> {
    if n == 0 {
        return Err(Error::InvalidArgument("fan needs at least one line".into()));
    }
    if !(radius.is_finite() && radius > 0.0 && radius <= MAX_COORD) {
        return Err(Error::InvalidArgument(format!(
            "fan radius must be in (0, {MAX_COORD}], got {radius}"
        )));
    }

    let step = 360.0 / (2 * n) as f64;
    let mut slope = Slope::between(p0, p1)?;
    let mut anchors = Vec::with_capacity(2 * (n + 1));

    for direction in 0..=n {
        match line_circle_intersection(p1, slope.extend(p1), radius) {
            Ok((a, b)) => {
                anchors.push(Anchor { direction, point: a });
                anchors.push(Anchor { direction, point: b });
            }
            Err(Error::NoIntersection) => {
                debug!(direction, ?slope, "fan line misses the circle");
            }
            Err(e) => return Err(e),
        }
        slope = rotate_slope(slope, step);
    }

    Ok(AnchorSet { anchors, directions: n + 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(p: Point) -> f64 {
        p.y.atan2(p.x).to_degrees().rem_euclid(360.0)
    }

    fn circular_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_rotate_quarter_turn() {
        assert_eq!(rotate_slope(Slope::Finite(0.0), 90.0), Slope::Vertical);
        assert_eq!(rotate_slope(Slope::Finite(2.0), 90.0), Slope::Finite(-0.5));
        assert_eq!(rotate_slope(Slope::Vertical, 90.0), Slope::Finite(0.0));
    }

    #[test]
    fn test_rotate_45() {
        let Slope::Finite(k) = rotate_slope(Slope::Finite(0.0), 45.0) else {
            panic!("expected a finite slope");
        };
        assert!((k - 1.0).abs() < 1e-12);
        assert_eq!(rotate_slope(Slope::Finite(1.0), 45.0), Slope::Vertical);
        let Slope::Finite(k) = rotate_slope(Slope::Vertical, 45.0) else {
            panic!("expected a finite slope");
        };
        assert!((k + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fan_shape() {
        let fan = point_intersection(Point::new(1.0, 0.0), Point::ORIGIN, 100.0, 8).unwrap();
        assert_eq!(fan.directions, 9);
        assert_eq!(fan.anchors.len(), 18);
        for a in &fan.anchors {
            assert!((a.point.distance(Point::ORIGIN) - 100.0).abs() < 1e-9);
        }

        let first = &fan.anchors[..2];
        assert!((first[0].point.x + 100.0).abs() < 1e-9);
        assert!((first[1].point.x - 100.0).abs() < 1e-9);

        let open: Vec<f64> = fan.open_fan().map(|a| degrees(a.point)).collect();
        assert_eq!(open.len(), 16);
        for i in 0..16 {
            let expected = i as f64 * 22.5;
            assert!(
                open.iter().any(|&got| circular_gap(got, expected) < 1e-6),
                "no anchor near {expected}"
            );
        }
    }

    #[test]
    fn test_closing_direction_repeats_first_line() {
        let fan = point_intersection(Point::new(3.0, 1.0), Point::ORIGIN, 50.0, 6).unwrap();
        let angles = |direction: usize| -> Vec<f64> {
            fan.anchors
                .iter()
                .filter(|a| a.direction == direction)
                .map(|a| degrees(a.point))
                .collect()
        };
        let first = angles(0);
        let last = angles(6);
        assert_eq!(last.len(), 2);
        for angle in last {
            assert!(first.iter().any(|&f| circular_gap(f, angle) < 1e-6));
        }
    }

    #[test]
    fn test_quarter_turn_fan() {
        let fan = point_intersection(Point::new(1.0, 0.0), Point::ORIGIN, 100.0, 2).unwrap();
        let pts: Vec<(i64, i64)> = fan
            .anchors
            .iter()
            .map(|a| (a.point.x.round() as i64, a.point.y.round() as i64))
            .collect();
        assert_eq!(pts, vec![(-100, 0), (100, 0), (0, -100), (0, 100), (-100, 0), (100, 0)]);
    }

    #[test]
    fn test_off_centre_pivot_stays_on_circle() {
        let fan =
            point_intersection(Point::new(-40.0, 35.0), Point::new(20.0, 10.0), 100.0, 12).unwrap();
        assert_eq!(fan.anchors.len(), 26);
        for a in &fan.anchors {
            assert!((a.point.distance(Point::ORIGIN) - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_outside_pivot_skips_missing_directions() {
        let fan = point_intersection(Point::ORIGIN, Point::new(300.0, 0.0), 100.0, 4).unwrap();
        assert_eq!(fan.directions, 5);
        assert_eq!(fan.anchors.len(), 4);
        assert!(fan.anchors.iter().all(|a| a.direction == 0 || a.direction == 4));
    }

    #[test]
    fn test_invalid_fan() {
        assert!(matches!(
            point_intersection(Point::ORIGIN, Point::ORIGIN, 10.0, 4),
            Err(Error::DegenerateLine)
        ));
        assert!(matches!(
            point_intersection(Point::new(1.0, 0.0), Point::ORIGIN, 10.0, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            point_intersection(Point::new(1.0, 0.0), Point::ORIGIN, -1.0, 4),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unrasterizable_radius_rejected() {
        for radius in [1e19, f64::INFINITY, f64::NAN, MAX_COORD * 2.0] {
            assert!(matches!(
                point_intersection(Point::new(1.0, 0.0), Point::ORIGIN, radius, 4),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert!(point_intersection(Point::new(1.0, 0.0), Point::ORIGIN, MAX_COORD, 4).is_ok());
    }
}
