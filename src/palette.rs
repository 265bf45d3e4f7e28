//! 16-color palette. Everything above the framebuffer speaks in palette
//! indices; RGBA only appears when a frame is handed to the GPU or a PNG.

pub const BLACK: u8 = 0;
pub const BLUE: u8 = 1;
pub const GREEN: u8 = 2;
pub const CYAN: u8 = 3;
pub const RED: u8 = 4;
pub const MAGENTA: u8 = 5;
pub const BROWN: u8 = 6;
pub const LTGRAY: u8 = 7;
pub const DKGRAY: u8 = 8;
pub const LTBLUE: u8 = 9;
pub const LTGREEN: u8 = 10;
pub const LTCYAN: u8 = 11;
pub const LTRED: u8 = 12;
pub const LTMAGENTA: u8 = 13;
pub const YELLOW: u8 = 14;
pub const WHITE: u8 = 15;
pub const COLORS_NUM: usize = 16;

pub const STD_RGBA: [[u8; 4]; COLORS_NUM] = [
    [0x00, 0x00, 0x00, 0xFF],
    [0x00, 0x00, 0xAA, 0xFF],
    [0x00, 0xAA, 0x00, 0xFF],
    [0x00, 0xAA, 0xAA, 0xFF],
    [0xAA, 0x00, 0x00, 0xFF],
    [0xAA, 0x00, 0xAA, 0xFF],
    [0xAA, 0x55, 0x00, 0xFF],
    [0xAA, 0xAA, 0xAA, 0xFF],
    [0x55, 0x55, 0x55, 0xFF],
    [0x55, 0x55, 0xFF, 0xFF],
    [0x55, 0xFF, 0x55, 0xFF],
    [0x55, 0xFF, 0xFF, 0xFF],
    [0xFF, 0x55, 0x55, 0xFF],
    [0xFF, 0x55, 0xFF, 0xFF],
    [0xFF, 0xFF, 0x55, 0xFF],
    [0xFF, 0xFF, 0xFF, 0xFF],
];

/// Out-of-range indices wrap into the 16 defined colors.
pub fn rgba(color: u8) -> [u8; 4] {
    STD_RGBA[color as usize % COLORS_NUM]
}
