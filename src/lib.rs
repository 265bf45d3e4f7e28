//! Mouse-driven directory browser drawn as a scrollable list of text lines.
//!
//! The library holds everything that does not need a window: the line buffer,
//! the navigator, command-mode state, the per-frame controller and a software
//! framebuffer that implements the drawing seam. The `expall` binary wires
//! these to winit and wgpu.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod filetype;
pub mod font;
pub mod framebuffer;
pub mod input;
pub mod launcher;
pub mod line_buffer;
pub mod navigation;
pub mod palette;
pub mod surface;

#[cfg(test)]
mod test_support;
