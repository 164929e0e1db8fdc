// Binding placement: N points spaced evenly around a circle's perimeter.

use crate::error::{Error, Result};
use crate::raster::MAX_COORD;
use crate::types::{Binding, Point};

/// Place `n` bindings around the circle at `center` with the given `radius`.
///
/// Bindings start at 0° and advance counter-clockwise by `360/n` degrees.
/// Coordinates are floored to whole pixels, so each binding sits up to one
/// pixel inside the ideal perimeter.
pub fn create_bindings(center: Point, radius: f64, n: usize) -> Result<Vec<Binding>> {
    if n == 0 {
        return Err(Error::InvalidArgument("binding count must be at least 1".into()));
    }
    if !(radius.is_finite() && radius > 0.0 && radius <= MAX_COORD) {
        return Err(Error::InvalidArgument(format!(
            "binding radius must be in (0, {MAX_COORD}], got {radius}"
        )));
    }

    let offset = 360.0 / n as f64;
    let bindings = (0..n)
        .map(|index| {
            let theta = (index as f64 * offset).to_radians();
            let x = center.x + radius * theta.cos();
            let y = center.y + radius * theta.sin();
            Binding { index, point: Point::new(x.floor(), y.floor()) }
        })
        .collect();

    Ok(bindings)
}
