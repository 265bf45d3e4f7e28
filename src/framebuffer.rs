//! Palette-indexed software framebuffer. Implements [`DisplaySurface`] so the
//! listing renders into it the same way in the window and in headless dumps.

use std::{fs::File, io, path::Path};

use crate::{
    config,
    font::{Font, GLYPH_THRESHOLD},
    palette,
    surface::{DisplaySurface, Point, Rect, Size, TextMeasure, TextStyle},
};

pub struct Framebuffer {
    width: u32,
    height: u32,
    indices: Vec<u8>,
    font: Font,
}

impl Framebuffer {
    /// Sides are clamped to `1..=MAX_SURFACE_DIM`.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = clamp_dims(width, height);
        Self {
            width,
            height,
            indices: vec![palette::BLACK; pixel_count(width, height)],
            font: Font::load(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Resizing discards the current contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        (self.width, self.height) = clamp_dims(width, height);
        self.indices.clear();
        self.indices
            .resize(pixel_count(self.width, self.height), palette::BLACK);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices.get(self.index(x, y)).copied()
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.indices[idx] = color;
    }

    fn fill_rect_i32(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        if w <= 0 || h <= 0 {
            return;
        }
        let max_w = self.width as i32;
        let max_h = self.height as i32;
        let x0 = x.clamp(0, max_w) as u32;
        let y0 = y.clamp(0, max_h) as u32;
        let x1 = x.saturating_add(w).clamp(0, max_w) as u32;
        let y1 = y.saturating_add(h).clamp(0, max_h) as u32;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for yy in y0..y1 {
            let start = self.index(x0, yy);
            let end = self.index(x1, yy);
            self.indices[start..end].fill(color);
        }
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char, scale: u32, color: u8) {
        let Some(glyph) = self.font.glyph(ch) else {
            return;
        };
        let scale = scale as i32;
        for (row, bits) in glyph.raster().iter().enumerate() {
            for (col, &coverage) in bits.iter().enumerate() {
                if coverage <= GLYPH_THRESHOLD {
                    continue;
                }
                let px = x + col as i32 * scale;
                let py = y + row as i32 * scale;
                if scale == 1 {
                    self.put_pixel(px, py, color);
                } else {
                    self.fill_rect_i32(px, py, scale, scale, color);
                }
            }
        }
    }

    /// Expands palette indices into `out`, resizing it to `width * height * 4`.
    pub fn to_rgba(&self, out: &mut Vec<u8>) {
        out.resize(self.indices.len() * 4, 0);
        for (i, &px) in self.indices.iter().enumerate() {
            let dst = i * 4;
            out[dst..dst + 4].copy_from_slice(&palette::rgba(px));
        }
    }

    pub fn write_png(&self, path: &Path) -> io::Result<()> {
        let mut rgba = Vec::new();
        self.to_rgba(&mut rgba);
        write_png_rgba(path, self.width, self.height, &rgba)
    }
}

impl TextMeasure for Framebuffer {
    fn measure_text(&self, text: &str, style: TextStyle) -> Size {
        self.font.measure(text, style)
    }
}

impl DisplaySurface for Framebuffer {
    fn draw_text(&mut self, text: &str, pos: Point, style: TextStyle, color: u8) {
        let scale = self.font.scale_for(style.size);
        let advance = self.font.advance(style) as i32;
        let glyph_h = (self.font.cell_height() * scale) as i32;
        if pos.y >= self.height as i32 || pos.y + glyph_h <= 0 {
            return;
        }
        let mut cx = pos.x;
        for ch in text.chars() {
            if cx >= self.width as i32 {
                break;
            }
            if cx + advance > 0 && !ch.is_whitespace() {
                self.draw_char(cx, pos.y, ch, scale, color);
            }
            cx += advance;
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: u8) {
        self.fill_rect_i32(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn clear(&mut self, color: u8) {
        self.indices.fill(color);
    }
}

fn clamp_dims(width: u32, height: u32) -> (u32, u32) {
    (
        width.clamp(1, config::MAX_SURFACE_DIM),
        height.clamp(1, config::MAX_SURFACE_DIM),
    )
}

fn pixel_count(width: u32, height: u32) -> usize {
    (width as usize)
        .checked_mul(height as usize)
        .unwrap_or(usize::MAX)
}

fn write_png_rgba(path: &Path, width: u32, height: u32, rgba: &[u8]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|err| io::Error::other(err.to_string()))?;
    writer
        .write_image_data(rgba)
        .map_err(|err| io::Error::other(err.to_string()))?;
    Ok(())
}
