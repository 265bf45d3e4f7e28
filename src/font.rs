//! Bitmap glyphs from the Noto Sans Mono raster set.

use noto_sans_mono_bitmap::{
    FontWeight, RasterHeight, RasterizedChar, get_raster, get_raster_width,
};

use crate::surface::{Size, TextStyle};

/// Coverage above this counts as an "on" pixel.
pub const GLYPH_THRESHOLD: u8 = 96;

const FALLBACK_CHAR: char = '?';

/// Fixed-width font. Larger sizes are integer multiples of the native raster.
#[derive(Clone, Copy, Debug)]
pub struct Font {
    weight: FontWeight,
    height: RasterHeight,
}

impl Default for Font {
    fn default() -> Self {
        Self::load()
    }
}

impl Font {
    pub fn load() -> Self {
        Self {
            weight: FontWeight::Regular,
            height: RasterHeight::Size16,
        }
    }

    pub fn cell_width(&self) -> u32 {
        get_raster_width(self.weight, self.height) as u32
    }

    pub fn cell_height(&self) -> u32 {
        self.height.val() as u32
    }

    /// Integer upscale factor for a requested pixel size (never below 1).
    pub fn scale_for(&self, size: u32) -> u32 {
        (size / self.cell_height()).max(1)
    }

    /// Horizontal distance from one glyph origin to the next.
    pub fn advance(&self, style: TextStyle) -> u32 {
        self.cell_width() * self.scale_for(style.size) + style.spacing
    }

    /// Characters outside the raster set fall back to `?`.
    pub fn glyph(&self, ch: char) -> Option<RasterizedChar> {
        get_raster(ch, self.weight, self.height)
            .or_else(|| get_raster(FALLBACK_CHAR, self.weight, self.height))
    }

    pub fn measure(&self, text: &str, style: TextStyle) -> Size {
        let scale = self.scale_for(style.size);
        let count = text.chars().count() as u32;
        let width = if count == 0 {
            0
        } else {
            count * self.cell_width() * scale + (count - 1) * style.spacing
        };
        Size {
            width: width as i32,
            height: (self.cell_height() * scale) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: TextStyle = TextStyle {
        size: 16,
        spacing: 1,
    };

    #[test]
    fn native_size_is_sixteen_pixels() {
        let font = Font::load();
        assert_eq!(font.cell_height(), 16);
        assert!(font.cell_width() > 0);
        assert_eq!(font.scale_for(16), 1);
        assert_eq!(font.scale_for(8), 1);
        assert_eq!(font.scale_for(32), 2);
    }

    #[test]
    fn measure_counts_spacing_between_glyphs_only() {
        let font = Font::load();
        let w = font.cell_width() as i32;
        assert_eq!(font.measure("", STYLE).width, 0);
        assert_eq!(font.measure("a", STYLE).width, w);
        assert_eq!(font.measure("abc", STYLE).width, 3 * w + 2);
        assert_eq!(font.measure("abc", STYLE).height, 16);
    }

    #[test]
    fn unknown_chars_fall_back() {
        let font = Font::load();
        assert!(font.glyph('A').is_some());
        assert!(font.glyph('\u{10FFFF}').is_some());
    }
}
