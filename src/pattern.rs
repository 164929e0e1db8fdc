// The string-art pattern: bindings, anchor fan, reconciled points and the
// threads connecting them, plus rendering onto a pixel buffer.

use tracing::info;

use crate::anchors::point_intersection;
use crate::bindings::create_bindings;
use crate::config::{Config, Palette};
use crate::draw::{Stroke, StrokeStyle};
use crate::error::{Error, Result};
use crate::raster::put_pixel;
use crate::reconcile::compare_bindings;
use crate::types::{AnchorSet, Binding, PixelBuffer, Point, Segment};

/// Connect each point to the one `skip` places further along, wrapping around.
pub fn string_pattern(points: &[Point], skip: usize) -> Result<Vec<Segment>> {
    let len = points.len();
    if len == 0 {
        return Ok(Vec::new());
    }
    if skip % len == 0 {
        return Err(Error::InvalidArgument(format!(
            "skip {skip} connects every one of the {len} points to itself"
        )));
    }

    Ok((0..len)
        .map(|i| Segment { from: points[i], to: points[(i + skip) % len] })
        .collect())
}

/// Stroke every thread of the pattern.
pub fn draw_pattern<S: Stroke + ?Sized>(
    surface: &mut S,
    points: &[Point],
    skip: usize,
    style: StrokeStyle,
) -> Result<()> {
    for seg in string_pattern(points, skip)? {
        surface.line(seg.from, seg.to, style);
    }
    Ok(())
}

/// Every stage of one pattern computation.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub radius: f64,
    pub skip: usize,
    pub bindings: Vec<Binding>,
    pub anchors: AnchorSet,
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl Pattern {
    /// Run bindings -> anchors -> reconcile -> connect for one configuration.
    pub fn build(config: &Config) -> Result<Self> {
        config.validate()?;
        let radius = config.circle.radius;

        let bindings = create_bindings(Point::ORIGIN, radius, config.circle.bindings)?;
        let (toward, pivot) = (config.fan.toward.into(), config.fan.pivot.into());
        let anchors = point_intersection(toward, pivot, radius, config.fan.lines)?;
        let points = compare_bindings(&bindings, &anchors, radius)?;
        let skip = config.pattern.skip;
        let segments = string_pattern(&points, skip)?;

        info!(
            bindings = bindings.len(),
            anchors = anchors.anchors.len(),
            points = points.len(),
            threads = segments.len(),
            "pattern built"
        );
        Ok(Self { radius, skip, bindings, anchors, points, segments })
    }

    /// Stroke the frame circle, then the threads, onto any surface.
    pub fn render_strokes<S: Stroke + ?Sized>(
        &self,
        surface: &mut S,
        palette: &Palette,
        line_width: f64,
    ) -> Result<()> {
        surface.circle(Point::ORIGIN, self.radius, StrokeStyle::new(palette.frame.into(), 1.0));
        let thread = StrokeStyle::new(palette.thread.into(), line_width);
        draw_pattern(surface, &self.points, self.skip, thread)
    }

    /// Draw frame circle and threads, then mark every binding with a dot.
    pub fn render(&self, buf: &mut PixelBuffer, palette: &Palette, line_width: f64) -> Result<()> {
        self.render_strokes(buf, palette, line_width)?;
        for b in &self.bindings {
            put_pixel(buf, b.point.x, b.point.y, palette.binding.into());
        }
        Ok(())
    }
}
