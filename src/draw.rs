// Window + stroke drawing.
// 1) A window that shows the rendered pixel buffer.
// 2) A small stroke interface (lines and circles with a colour and a width)
//    so the pattern can be drawn onto any surface that knows how to stroke.

use minifb::{Key, Window, WindowOptions};

use crate::error::Error;
use crate::raster::{bresenhams_circle, bresenhams_line};
use crate::types::{Color, PixelBuffer, Point, Segment};

pub struct Drawer {
    window: Window, // the on-screen window you see
    frame: Vec<u32>,
}

impl Drawer {
    /// Create a window sized to the pixel buffer.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, frame: vec![0u32; width * height] })
    }

    /// Cap how often `present` pushes frames (the picture is static).
    pub fn set_target_fps(&mut self, fps: usize) {
        self.window.set_target_fps(fps);
    }

    /// Push the buffer to the screen.
    pub fn present(&mut self, buf: &PixelBuffer) -> Result<(), Error> {
        self.frame.clear();
        self.frame.extend(buf.to_rgb_u32());
        self.window
            .update_with_buffer(&self.frame, buf.width, buf.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

/* ---------- Strokes ---------- */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Anything that can stroke straight lines and circle outlines.
pub trait Stroke {
    fn line(&mut self, from: Point, to: Point, style: StrokeStyle);
    fn circle(&mut self, center: Point, radius: f64, style: StrokeStyle);
}

/// Software strokes: one-pixel Bresenham, `style.width` is not applied.
impl Stroke for PixelBuffer {
    fn line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        bresenhams_line(self, from, to, style.color);
    }

    fn circle(&mut self, center: Point, radius: f64, style: StrokeStyle) {
        bresenhams_circle(self, center, radius.round() as i64, style.color);
    }
}

/// Records strokes instead of drawing them.
#[derive(Debug, Default)]
pub struct SegmentLog {
    pub lines: Vec<Segment>,
    pub circles: Vec<(Point, f64)>,
}

impl Stroke for SegmentLog {
    fn line(&mut self, from: Point, to: Point, _style: StrokeStyle) {
        self.lines.push(Segment { from, to });
    }

    fn circle(&mut self, center: Point, radius: f64, _style: StrokeStyle) {
        self.circles.push((center, radius));
    }
}
