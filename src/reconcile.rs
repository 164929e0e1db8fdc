// Angle reconciliation: snap the ideal anchor angles onto the angles of the
// bindings that actually exist around the circle.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::raster::MAX_COORD;
use crate::types::{AnchorSet, Binding, Point};

/// Angle of `p` around the origin in degrees, in [0, 360).
///
/// Points on an axis get the exact axis angle; the origin has no direction
/// and maps to 0.
pub fn angle_of(p: Point) -> f64 {
    let (x, y) = (p.x, p.y);
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    if y == 0.0 {
        return if x > 0.0 { 0.0 } else { 180.0 };
    }
    if x == 0.0 {
        return if y > 0.0 { 90.0 } else { 270.0 };
    }

    let base = (y / x).abs().atan().to_degrees();
    let angle = match (x > 0.0, y > 0.0) {
        (true, true) => base,
        (false, true) => 180.0 - base,
        (false, false) => 180.0 + base,
        (true, false) => 360.0 - base,
    };
    // 360 - (tiny) can round up to 360.
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Point at `angle` degrees on the circle of `radius` around the origin.
pub fn point_on_circle(angle: f64, radius: f64) -> Point {
    let theta = angle.to_radians();
    Point::new(radius * theta.cos(), radius * theta.sin())
}

/// Match every ideal anchor angle against the real binding angles.
///
/// Binding 0 is represented by a closing angle of 360 so anchors just below
/// 360 snap onto it. Anchors of the fan's closing direction are left out.
/// Anchor angles are visited in ascending order; an angle exactly equal to
/// the previous one is skipped. Every binding within `360/(2*bindings)` of
/// the anchor is emitted, so an anchor may yield none, one, or several points.
pub fn compare_bindings(
    bindings: &[Binding],
    anchors: &AnchorSet,
    radius: f64,
) -> Result<Vec<Point>> {
    if bindings.is_empty() {
        return Err(Error::InvalidArgument("no bindings to reconcile against".into()));
    }
    if !(radius.is_finite() && radius > 0.0 && radius <= MAX_COORD) {
        return Err(Error::InvalidArgument(format!(
            "reconcile radius must be in (0, {MAX_COORD}], got {radius}"
        )));
    }

    let mut binding_angles: Vec<f64> =
        bindings.iter().skip(1).map(|b| angle_of(b.point)).collect();
    binding_angles.push(360.0);

    let mut anchor_angles: Vec<f64> = anchors.open_fan().map(|a| angle_of(a.point)).collect();
    // Stable: equal angles keep their fan order.
    anchor_angles.sort_by(f64::total_cmp);

    let correction = 360.0 / (2 * bindings.len()) as f64;
    let mut matched = Vec::with_capacity(anchor_angles.len());
    let mut previous: Option<f64> = None;

    for &anchor in &anchor_angles {
        if previous == Some(anchor) {
            continue;
        }
        previous = Some(anchor);

        let before = matched.len();
        matched.extend(
            binding_angles
                .iter()
                .filter(|&&b| (b - anchor).abs() < correction)
                .map(|&b| point_on_circle(b, radius)),
        );
        if matched.len() == before {
            warn!(anchor, "anchor angle has no binding within tolerance");
        }
    }

    debug!(
        anchors = anchor_angles.len(),
        bindings = bindings.len(),
        points = matched.len(),
        correction,
        "reconciled anchors"
    );
    Ok(matched)
}
