//! Scrollable list of colored text lines plus the command bar drawn over it.

use std::ffi::{OsStr, OsString};

use crate::{
    config::{self, colors},
    error::LineOutOfRange,
    surface::{DisplaySurface, Point, Rect, TextMeasure, TextStyle},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    /// Native file name; `text` may be a lossy rendering of it.
    pub name: OsString,
    pub original_color: u8,
    pub current_color: u8,
}

impl DisplayLine {
    pub fn new(text: impl Into<String>, color: u8) -> Self {
        let text = text.into();
        Self {
            name: OsString::from(&text),
            text,
            original_color: color,
            current_color: color,
        }
    }

    pub fn entry(name: &OsStr, color: u8) -> Self {
        Self {
            text: name.to_string_lossy().into_owned(),
            name: name.to_os_string(),
            original_color: color,
            current_color: color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub line_height: i32,
    pub style: TextStyle,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            line_height: config::LINE_HEIGHT,
            style: TextStyle {
                size: config::FONT_SIZE,
                spacing: config::TEXT_SPACING,
            },
        }
    }
}

#[derive(Debug)]
pub struct LineBuffer {
    lines: Vec<DisplayLine>,
    layout: Layout,
    /// Never positive. Line `i` is drawn at `i * line_height + scroll_offset`.
    scroll_offset: i32,
    viewport: (u32, u32),
    command_rect: Rect,
    command_text: String,
    status: Option<String>,
}

impl LineBuffer {
    pub fn new(layout: Layout, width: u32, height: u32) -> Self {
        let mut buffer = Self {
            lines: Vec::new(),
            layout,
            scroll_offset: 0,
            viewport: (0, 0),
            command_rect: Rect::default(),
            command_text: String::new(),
            status: None,
        };
        buffer.set_viewport(width, height);
        buffer
    }

    pub fn set_buffer(&mut self, lines: Vec<DisplayLine>) {
        self.lines = lines;
    }

    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Full width, two lines tall, on the bottom edge.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        let bar_h = self.layout.line_height * 2;
        self.command_rect = Rect::new(0, height as i32 - bar_h, width as i32, bar_h);
    }

    pub fn command_rect(&self) -> Rect {
        self.command_rect
    }

    pub fn line_rect<M>(&self, index: usize, measure: &M) -> Result<Rect, LineOutOfRange>
    where
        M: TextMeasure + ?Sized,
    {
        let line = self.lines.get(index).ok_or(LineOutOfRange {
            index,
            len: self.lines.len(),
        })?;
        let width = measure.measure_text(&line.text, self.layout.style).width;
        Ok(Rect::new(0, self.line_y(index), width, self.layout.line_height))
    }

    fn line_y(&self, index: usize) -> i32 {
        index as i32 * self.layout.line_height + self.scroll_offset
    }

    pub fn hit_test<M>(&self, point: Point, measure: &M) -> Option<usize>
    where
        M: TextMeasure + ?Sized,
    {
        (config::FIRST_NAVIGABLE_LINE..self.lines.len()).find(|&i| {
            self.line_rect(i, measure)
                .map(|rect| rect.contains(point))
                .unwrap_or(false)
        })
    }

    pub fn set_line_color(&mut self, index: usize, color: u8) -> Result<(), LineOutOfRange> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(LineOutOfRange { index, len })?;
        line.current_color = color;
        Ok(())
    }

    pub fn restore_line_colors(&mut self) {
        for line in &mut self.lines {
            line.current_color = line.original_color;
        }
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Positive `delta` scrolls toward the top; the offset stops at 0 but has
    /// no lower bound.
    pub fn set_scroll_move(&mut self, delta: f32) {
        let next = self.scroll_offset as f32 + delta * config::SCROLL_SPEED;
        self.scroll_offset = if next >= 0.0 { 0 } else { next.round() as i32 };
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn set_command_text(&mut self, text: &str) {
        self.command_text.clear();
        self.command_text.push_str(text);
    }

    pub fn command_text(&self) -> &str {
        &self.command_text
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn render_buffer<S>(&self, surface: &mut S)
    where
        S: DisplaySurface + ?Sized,
    {
        let mut cursor_y = self.scroll_offset;
        for (i, line) in self.lines.iter().enumerate() {
            let pos = Point::new(0, cursor_y);
            match &self.status {
                Some(status) if i == config::STATUS_LINE => {
                    surface.draw_text(status, pos, self.layout.style, colors::STATUS);
                }
                _ => surface.draw_text(&line.text, pos, self.layout.style, line.current_color),
            }
            cursor_y += self.layout.line_height;
        }
    }

    pub fn render_command_overlay<S>(&self, surface: &mut S, caret_visible: bool)
    where
        S: DisplaySurface + ?Sized,
    {
        let bar = self.command_rect;
        surface.draw_rect(bar, colors::OVERLAY_BG);

        let text_y = bar.y + (bar.h - self.layout.line_height) / 2;
        let text_pos = Point::new(bar.x + config::OVERLAY_PAD_X, text_y);
        surface.draw_text(&self.command_text, text_pos, self.layout.style, colors::OVERLAY_TEXT);

        if caret_visible {
            let text_w = surface.measure_text(&self.command_text, self.layout.style).width;
            let caret = Rect::new(
                text_pos.x + text_w,
                text_y,
                config::CARET_W,
                self.layout.line_height,
            );
            surface.draw_rect(caret, colors::CARET);
        }
    }
}
