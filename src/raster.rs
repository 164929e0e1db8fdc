// Software rasterization into a PixelBuffer.
// All entry points address pixels through `to_screen`, so the flip from the
// circle-centred frame (y up) to buffer rows (y down) lives in one place.

use crate::types::{Color, PixelBuffer, Point};

/// Largest coordinate (and circle radius) the rasterizer accepts, in pixels.
/// Anything further out is dropped instead of walked.
pub const MAX_COORD: f64 = 1_000_000.0;

/// Map a circle-centred coordinate to (col, row) of a `width` x `height` buffer.
/// Returns None when the pixel falls outside.
#[inline]
pub fn to_screen(width: usize, height: usize, x: f64, y: f64) -> Option<(usize, usize)> {
    let col = (width as f64 / 2.0 + x).floor();
    let row = (height as f64 / 2.0 - y - 1.0).floor();
    if !col.is_finite() || !row.is_finite() {
        return None;
    }
    if col < 0.0 || row < 0.0 || col >= width as f64 || row >= height as f64 {
        return None;
    }
    Some((col as usize, row as usize))
}

/// Inverse of `to_screen` for integer pixel positions.
#[inline]
pub fn from_screen(width: usize, height: usize, col: usize, row: usize) -> Point {
    let x = col as f64 - (width as f64 / 2.0).floor();
    let y = (height as f64 / 2.0).floor() - 1.0 - row as f64;
    Point::new(x, y)
}

/// Write one pixel. Out-of-range coordinates are silently dropped.
#[inline]
pub fn put_pixel(buf: &mut PixelBuffer, x: f64, y: f64, color: Color) {
    let Some((col, row)) = to_screen(buf.width, buf.height, x, y) else {
        return;
    };
    let idx = 4 * (row * buf.width + col);
    buf.data[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
}

/// Read one pixel, None when outside the buffer.
#[inline]
pub fn get_pixel(buf: &PixelBuffer, x: f64, y: f64) -> Option<Color> {
    let (col, row) = to_screen(buf.width, buf.height, x, y)?;
    let idx = 4 * (row * buf.width + col);
    let px = &buf.data[idx..idx + 4];
    Some(Color::rgba(px[0], px[1], px[2], px[3]))
}

/// Colour under a point plus its saturation `(R+G+B)/765`, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub color: Color,
    pub saturation: f64,
}

pub fn sample(buf: &PixelBuffer, x: f64, y: f64) -> Option<Sample> {
    let color = get_pixel(buf, x, y)?;
    let sum = color.r as f64 + color.g as f64 + color.b as f64;
    let saturation = (sum / 765.0 * 100.0).round() / 100.0;
    Some(Sample { color, saturation })
}

/// Integer-error Bresenham between two points (floored to whole pixels).
///
/// The end point is plotted first. The walk stops as soon as *either* axis
/// reaches its target, so lines that are not perfectly diagonal lose the
/// trailing pixels along the other axis. Lines with a non-finite endpoint,
/// or one beyond `MAX_COORD`, draw nothing.
pub fn bresenhams_line(buf: &mut PixelBuffer, p0: Point, p1: Point, color: Color) {
    let (Some(mut x0), Some(mut y0), Some(x1), Some(y1)) =
        (pixel_coord(p0.x), pixel_coord(p0.y), pixel_coord(p1.x), pixel_coord(p1.y))
    else {
        return;
    };

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut error = dx - dy;

    put_pixel(buf, x1 as f64, y1 as f64, color);
    while x0 != x1 && y0 != y1 {
        put_pixel(buf, x0 as f64, y0 as f64, color);
        let error_2 = error * 2;
        if error_2 > -dy {
            error -= dy;
            x0 += sx;
        }
        if error_2 < dx {
            error += dx;
            y0 += sy;
        }
    }
}

/// Floor to a whole pixel, None when not finite or beyond `MAX_COORD`.
#[inline]
fn pixel_coord(v: f64) -> Option<i64> {
    let v = v.floor();
    (v.is_finite() && v.abs() <= MAX_COORD).then_some(v as i64)
}

/// Midpoint circle with 8-way symmetric plotting.
/// Walks the arc from (0, R) until y drops below zero.
/// Negative radii, radii above `MAX_COORD` and non-finite centres draw nothing.
pub fn bresenhams_circle(buf: &mut PixelBuffer, center: Point, radius: i64, color: Color) {
    if radius < 0 || radius as f64 > MAX_COORD {
        return;
    }
    let (Some(cx), Some(cy)) = (pixel_coord(center.x), pixel_coord(center.y)) else {
        return;
    };
    let (cx, cy) = (cx as f64, cy as f64);
    let mut x: i64 = 0;
    let mut y: i64 = radius;
    let mut delta: i64 = 1 - 2 * radius;

    while y >= 0 {
        plot_octants(buf, cx, cy, x, y, color);

        let error = 2 * (delta + y) - 1;
        if delta < 0 && error <= 0 {
            x += 1;
            delta += 2 * x + 1;
            continue;
        }
        if delta > 0 && error > 0 {
            y -= 1;
            delta -= 2 * y + 1;
            continue;
        }
        x += 1;
        y -= 1;
        delta += 2 * (x - y);
    }
}

#[inline]
fn plot_octants(buf: &mut PixelBuffer, cx: f64, cy: f64, x: i64, y: i64, color: Color) {
    let (x, y) = (x as f64, y as f64);
    for (dx, dy) in [(x, y), (y, x)] {
        put_pixel(buf, cx + dx, cy + dy, color);
        put_pixel(buf, cx - dx, cy + dy, color);
        put_pixel(buf, cx + dx, cy - dy, color);
        put_pixel(buf, cx - dx, cy - dy, color);
    }
}
