//! Recording surface for unit tests. Every glyph is 8 px wide with no spacing
//! so rectangle math stays readable.

use crate::surface::{DisplaySurface, Point, Rect, Size, TextMeasure, TextStyle};

pub const GLYPH_W: i32 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Text { text: String, pos: Point, color: u8 },
    Rect { rect: Rect, color: u8 },
    Clear(u8),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<(String, Point, u8)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, pos, color } => Some((text.clone(), *pos, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Rect, u8)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, style: TextStyle) -> Size {
        Size {
            width: text.chars().count() as i32 * GLYPH_W,
            height: style.size as i32,
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn draw_text(&mut self, text: &str, pos: Point, _style: TextStyle, color: u8) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: u8) {
        self.calls.push(DrawCall::Rect { rect, color });
    }

    fn clear(&mut self, color: u8) {
        self.calls.push(DrawCall::Clear(color));
    }
}
