//! Drawing seam. The listing and the overlay only ever talk to these traits;
//! the framebuffer (or a test double) decides what a pixel is.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open on the right and bottom edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.w && p.y < self.y + self.h
    }
}

/// Font size and inter-glyph spacing, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub size: u32,
    pub spacing: u32,
}

pub trait TextMeasure {
    fn measure_text(&self, text: &str, style: TextStyle) -> Size;
}

pub trait DisplaySurface: TextMeasure {
    fn draw_text(&mut self, text: &str, pos: Point, style: TextStyle, color: u8);
    fn draw_rect(&mut self, rect: Rect, color: u8);
    fn clear(&mut self, color: u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 16, 40, 16);
        assert!(r.contains(Point::new(0, 16)));
        assert!(r.contains(Point::new(39, 31)));
        assert!(!r.contains(Point::new(40, 20)));
        assert!(!r.contains(Point::new(10, 32)));
        assert!(!r.contains(Point::new(-1, 20)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(0, 0, 0, 16);
        assert!(!r.contains(Point::new(0, 0)));
    }
}
