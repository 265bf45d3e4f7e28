//! Application configuration.
//!
//! Layout and color constants are fixed at compile time. The few runtime knobs
//! (start directory, window size, headless dump) come from [`Settings`].

use std::path::PathBuf;

use crate::palette;

// =============================================================================
// Window
// =============================================================================

pub const APP_NAME: &str = "ExpAll";

pub const DEFAULT_WINDOW_W: u32 = 800;
pub const DEFAULT_WINDOW_H: u32 = 600;

/// Upper bound on either side of the framebuffer; also the default wgpu
/// texture limit.
pub const MAX_SURFACE_DIM: u32 = 8192;

pub const TARGET_FPS: u32 = 60;

// =============================================================================
// Listing layout
// =============================================================================

pub const FONT_SIZE: u32 = 16;

pub const TEXT_SPACING: u32 = 1;

pub const LINE_HEIGHT: i32 = 16;

// Pixels per wheel unit.
pub const SCROLL_SPEED: f32 = 20.0;

pub const HEADER_LINES: usize = 3;

/// First index the pointer can hover or activate. The parent marker (index 2)
/// is clickable; the path and the spacer are not.
pub const FIRST_NAVIGABLE_LINE: usize = 2;

/// Line whose slot is borrowed for transient status messages.
pub const STATUS_LINE: usize = 1;

// =============================================================================
// Command overlay
// =============================================================================

pub const OVERLAY_PAD_X: i32 = 4;

pub const CARET_W: i32 = 2;

/// Caret visibility flips every this many frames.
pub const CARET_BLINK_FRAMES: u64 = 30;

// =============================================================================
// Status messages
// =============================================================================

/// How long an error message stays on screen (3 s at 60 fps).
pub const STATUS_FRAMES: u64 = 180;

// =============================================================================
// Colors (palette indices)
// =============================================================================

pub mod colors {
    use super::palette;

    pub const BACKGROUND: u8 = palette::BLACK;
    pub const TEXT: u8 = palette::WHITE;
    pub const DIRECTORY: u8 = palette::LTBLUE;
    pub const HIGHLIGHT: u8 = palette::LTRED;
    pub const STATUS: u8 = palette::YELLOW;
    pub const OVERLAY_BG: u8 = palette::DKGRAY;
    pub const OVERLAY_TEXT: u8 = palette::WHITE;
    pub const CARET: u8 = palette::LTGRAY;
}

// =============================================================================
// Runtime settings
// =============================================================================

pub const START_DIR_ENV: &str = "EXPALL_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub start_dir: Option<PathBuf>,
    pub window_size: (u32, u32),
    pub dump_png: Option<PathBuf>,
    pub show_help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_dir: None,
            window_size: (DEFAULT_WINDOW_W, DEFAULT_WINDOW_H),
            dump_png: None,
            show_help: false,
        }
    }
}

impl Settings {
    /// Program name already skipped.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dir" => {
                    let path = args.next().ok_or_else(|| "--dir expects a path".to_string())?;
                    out.start_dir = Some(PathBuf::from(path));
                }
                "--size" => {
                    let spec = args
                        .next()
                        .ok_or_else(|| "--size expects WIDTHxHEIGHT".to_string())?;
                    out.window_size = parse_size(&spec)?;
                }
                "--dump-png" => {
                    let path = args
                        .next()
                        .ok_or_else(|| "--dump-png expects a path".to_string())?;
                    out.dump_png = Some(PathBuf::from(path));
                }
                "--help" | "-h" => out.show_help = true,
                other => return Err(format!("unknown arg: {other}")),
            }
        }
        Ok(out)
    }

    pub fn with_env_fallback(mut self) -> Self {
        if self.start_dir.is_none() {
            if let Ok(v) = std::env::var(START_DIR_ENV) {
                let v = v.trim();
                if !v.is_empty() {
                    self.start_dir = Some(PathBuf::from(v));
                }
            }
        }
        self
    }
}

fn parse_size(spec: &str) -> Result<(u32, u32), String> {
    let bad = || format!("--size expects WIDTHxHEIGHT (got: {spec})");
    let (w, h) = spec.split_once(['x', 'X']).ok_or_else(bad)?;
    let w = w.trim().parse::<u32>().map_err(|_| bad())?;
    let h = h.trim().parse::<u32>().map_err(|_| bad())?;
    if !(1..=MAX_SURFACE_DIM).contains(&w) || !(1..=MAX_SURFACE_DIM).contains(&h) {
        return Err(bad());
    }
    Ok((w, h))
}
