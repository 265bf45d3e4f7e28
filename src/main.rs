use std::{
    fmt,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use arboard::Clipboard;
use expall::{
    config::{self, Settings},
    controller::{Controller, FrameInput, KeyInput},
    framebuffer::Framebuffer,
    input::InputCollector,
    launcher::ProcessLauncher,
    navigation::Navigator,
    surface::Point,
};
use wgpu::util::DeviceExt as _;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

include!("expall/00_ui_primitives.rs");
include!("expall/01_gfx.rs");
include!("expall/02_app.rs");
