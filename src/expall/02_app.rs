struct App {
    gfx: Gfx,
    fb: Framebuffer,
    fb_rgba: Vec<u8>,
    controller: Controller<ProcessLauncher>,
    input: InputCollector,
    mods: ModState,
    clipboard: HostClipboard,
    output_size: PhysicalSize<u32>,
}

impl App {
    fn new(gfx: Gfx, controller: Controller<ProcessLauncher>, size: PhysicalSize<u32>) -> Self {
        Self {
            gfx,
            fb: Framebuffer::new(size.width, size.height),
            fb_rgba: Vec::new(),
            controller,
            input: InputCollector::default(),
            mods: ModState::default(),
            clipboard: HostClipboard::default(),
            output_size: size,
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.output_size = new_size;
        self.gfx.resize(new_size);
        self.fb.resize(new_size.width, new_size.height);
        self.gfx
            .resize_framebuffer(self.fb.width(), self.fb.height());
        self.controller
            .set_viewport(self.fb.width(), self.fb.height());
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let down = event.state == ElementState::Pressed;
        self.mods.update(&event.logical_key, down);
        if !down {
            return;
        }

        let action = map_key(
            &event.logical_key,
            event.text.as_deref(),
            event.repeat,
            &self.mods,
        );
        match action {
            Some(KeyAction::Input(key)) => self.input.key(key),
            Some(KeyAction::Text(text)) => {
                for ch in text.chars() {
                    self.input.key(KeyInput::Char(ch));
                }
            }
            Some(KeyAction::Paste) => match self.clipboard.get_text() {
                Ok(text) => self.input.key(KeyInput::Paste(text)),
                Err(err) => log::warn!("clipboard: get: {err}"),
            },
            None => {}
        }
    }

    fn set_cursor_output_pos(&mut self, pos: PhysicalPosition<f64>) {
        self.input
            .pointer_moved(Point::new(pos.x.floor() as i32, pos.y.floor() as i32));
    }

    fn tick(&mut self) {
        let input = self.input.take_frame();
        self.controller.frame(&input, &self.fb);
    }

    /// Repaints the current state without advancing it.
    fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.controller.render(&mut self.fb);
        self.fb.to_rgba(&mut self.fb_rgba);
        self.gfx.write_framebuffer(&self.fb_rgba);
        self.gfx.render()
    }
}

fn print_usage() {
    eprintln!("expall");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  expall [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --dir <path>          Start directory (default: ${}, then the working directory)", config::START_DIR_ENV);
    eprintln!("  --size <W>x<H>        Window size (default: {}x{})", config::DEFAULT_WINDOW_W, config::DEFAULT_WINDOW_H);
    eprintln!("  --dump-png <path>     Render the first frame to a PNG and exit (no window)");
    eprintln!("  -h, --help            Print this help");
    eprintln!();
    eprintln!("KEYS:");
    eprintln!("  Ctrl+K                Toggle the command bar");
    eprintln!("  Esc                   Leave the command bar");
    eprintln!("  Ctrl+V, Shift+Insert  Paste into the command bar");
}

fn fail(err: impl fmt::Display) -> ! {
    eprintln!("expall: {err}");
    std::process::exit(2);
}

/// Renders exactly what the window would show on its first frame.
fn dump_first_frame(
    controller: &mut Controller<ProcessLauncher>,
    (width, height): (u32, u32),
    png_path: &std::path::Path,
) -> std::io::Result<()> {
    let mut fb = Framebuffer::new(width, height);
    controller.frame(&FrameInput::default(), &fb);
    controller.render(&mut fb);
    fb.write_png(png_path)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = match Settings::from_args(std::env::args().skip(1)) {
        Ok(v) => v.with_env_fallback(),
        Err(err) => {
            eprintln!("expall: {err}\n");
            print_usage();
            std::process::exit(2);
        }
    };
    if settings.show_help {
        print_usage();
        return;
    }

    let start_dir: PathBuf = match settings.start_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()
            .unwrap_or_else(|err| fail(format!("cannot determine working directory: {err}"))),
    };
    let nav = Navigator::new(&start_dir).unwrap_or_else(|err| fail(err));
    let (width, height) = settings.window_size;
    let mut controller =
        Controller::new(nav, ProcessLauncher::new(), width, height).unwrap_or_else(|err| fail(err));
    log::info!(
        "browsing {}",
        controller.navigator().current_dir().display()
    );

    if let Some(path) = settings.dump_png.as_deref() {
        if let Err(err) = dump_first_frame(&mut controller, (width, height), path) {
            fail(format!("failed to dump PNG: {err}"));
        }
        return;
    }

    let event_loop = EventLoopBuilder::new()
        .build()
        .unwrap_or_else(|err| fail(format!("event loop: {err}")));

    let window = Arc::new({
        #[allow(unused_mut)]
        let mut builder = WindowBuilder::new()
            .with_title(config::APP_NAME)
            .with_inner_size(PhysicalSize::new(width, height));
        #[cfg(target_os = "linux")]
        {
            use winit::platform::wayland::WindowBuilderExtWayland as _;
            builder = builder.with_name("expall", "expall");
        }
        builder
            .build(&event_loop)
            .unwrap_or_else(|err| fail(format!("create window: {err}")))
    });

    let main_window_id = window.id();
    let gfx = pollster::block_on(Gfx::new(window.clone(), width, height))
        .unwrap_or_else(|err| fail(err));
    let mut app = App::new(gfx, controller, PhysicalSize::new(width, height));
    app.resize(window.inner_size());

    let mut pacer = FramePacer::new(config::TARGET_FPS, Instant::now());

    let result = event_loop.run(move |event, elwt| match event {
        Event::AboutToWait => {
            if pacer.poll(Instant::now()) {
                app.tick();
                window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
        }
        Event::WindowEvent { event, window_id } if window_id == main_window_id => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Focused(false) => {
                // Flush input state on focus loss to avoid stuck modifiers after Alt+Tab.
                app.mods = ModState::default();
                app.input.primary_button(false);
            }
            WindowEvent::Resized(new_size) => {
                app.resize(new_size);
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => match app.present() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => app.resize(app.output_size),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    elwt.exit();
                }
                Err(wgpu::SurfaceError::Timeout) => {}
                Err(wgpu::SurfaceError::Outdated) => {}
            },
            WindowEvent::KeyboardInput { event, .. } => app.handle_key(&event),
            WindowEvent::CursorMoved { position, .. } => app.set_cursor_output_pos(position),
            WindowEvent::CursorLeft { .. } => app.input.pointer_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.input.primary_button(state == ElementState::Pressed),
            WindowEvent::MouseWheel { delta, .. } => app.input.wheel(wheel_units(delta)),
            _ => {}
        },
        _ => {}
    });
    if let Err(err) = result {
        fail(format!("event loop: {err}"));
    }
}
