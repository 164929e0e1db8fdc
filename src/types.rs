// Core value types shared by every stage of the pattern.

/// A point in the circle-centred frame (origin at the circle centre, y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// RGBA colour, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque colour (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as 0x00RRGGBB for minifb (alpha is dropped).
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

/// Flat RGBA pixel array, row-major, origin at the top-left.
/// `data.len()` is always `width * height * 4`.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Transparent black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![0u8; width * height * 4] }
    }

    /// Paint every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Convert to the 0x00RRGGBB layout the window expects.
    pub fn to_rgb_u32(&self) -> Vec<u32> {
        self.data
            .chunks_exact(4)
            .map(|px| Color::rgba(px[0], px[1], px[2], px[3]).to_rgb_u32())
            .collect()
    }
}

/// A point on the circle perimeter, tagged with its generation order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    pub index: usize,
    pub point: Point,
}

/// An ideal line/circle crossing, tagged with the fan direction that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub direction: usize,
    pub point: Point,
}

/// All anchors of one fan plus how many directions the fan had.
/// Anchors of the final direction close the fan (same line as direction 0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSet {
    pub anchors: Vec<Anchor>,
    pub directions: usize,
}

impl AnchorSet {
    /// Anchors without the closing direction's pair.
    pub fn open_fan(&self) -> impl Iterator<Item = &Anchor> {
        let last = self.directions.checked_sub(1);
        self.anchors.iter().filter(move |a| Some(a.direction) != last)
    }
}

/// One thread of the pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size() {
        let buf = PixelBuffer::new(10, 4);
        assert_eq!(buf.data.len(), 10 * 4 * 4);
        assert!(buf.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_and_pack() {
        let mut buf = PixelBuffer::new(3, 3);
        buf.fill(Color::rgb(0x12, 0x34, 0x56));
        assert!(buf.to_rgb_u32().iter().all(|&p| p == 0x0012_3456));
        assert_eq!(buf.data[3], 255);
    }

    #[test]
    fn test_open_fan_drops_closing_direction() {
        let p = Point::ORIGIN;
        let set = AnchorSet {
            anchors: vec![
                Anchor { direction: 0, point: p },
                Anchor { direction: 0, point: p },
                Anchor { direction: 1, point: p },
                Anchor { direction: 1, point: p },
            ],
            directions: 2,
        };
        assert_eq!(set.open_fan().count(), 2);
        assert!(set.open_fan().all(|a| a.direction == 0));
    }

    #[test]
    fn test_open_fan_empty() {
        assert_eq!(AnchorSet::default().open_fan().count(), 0);
    }
}
