#[derive(Clone, Copy, Debug, Default)]
struct ModState {
    ctrl: bool,
    shift: bool,
    alt: bool,
    super_key: bool,
}

impl ModState {
    fn update(&mut self, key: &Key, down: bool) {
        match key {
            Key::Named(NamedKey::Control) => self.ctrl = down,
            Key::Named(NamedKey::Shift) => self.shift = down,
            Key::Named(NamedKey::Alt) => self.alt = down,
            Key::Named(NamedKey::Super) => self.super_key = down,
            _ => {}
        }
    }

    fn any_chord(&self) -> bool {
        self.ctrl || self.alt || self.super_key
    }

    fn is_paste(&self, key: &Key) -> bool {
        if self.ctrl {
            if let Key::Character(s) = key {
                if s.eq_ignore_ascii_case("v") {
                    return true;
                }
            }
        }

        self.shift && matches!(key, Key::Named(NamedKey::Insert))
    }

    fn is_command_toggle(&self, key: &Key) -> bool {
        self.ctrl && matches!(key, Key::Character(s) if s.eq_ignore_ascii_case("k"))
    }
}

#[derive(Default)]
struct HostClipboard {
    inner: Option<Clipboard>,
}

impl HostClipboard {
    fn ensure(&mut self) -> Result<&mut Clipboard, String> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().map_err(|err| err.to_string())?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| "clipboard: unavailable".to_string())
    }

    fn get_text(&mut self) -> Result<String, String> {
        self.ensure()?.get_text().map_err(|err| err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum KeyAction {
    Input(KeyInput),
    Text(String),
    Paste,
}

/// Translates a key press. Backspace honors auto-repeat; chords do not.
fn map_key(key: &Key, text: Option<&str>, repeat: bool, mods: &ModState) -> Option<KeyAction> {
    if mods.is_command_toggle(key) {
        return (!repeat).then_some(KeyAction::Input(KeyInput::ToggleCommand));
    }
    if mods.is_paste(key) {
        return (!repeat).then_some(KeyAction::Paste);
    }
    match key {
        Key::Named(NamedKey::Escape) => {
            return (!repeat).then_some(KeyAction::Input(KeyInput::Escape));
        }
        Key::Named(NamedKey::Backspace) => return Some(KeyAction::Input(KeyInput::Backspace)),
        _ => {}
    }
    if mods.any_chord() {
        return None;
    }

    let text = match (text, key) {
        (Some(t), _) if !t.is_empty() => t,
        (_, Key::Character(s)) => s.as_str(),
        _ => return None,
    };
    Some(KeyAction::Text(text.to_string()))
}

fn wheel_units(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / config::LINE_HEIGHT as f32,
    }
}

/// Fixed-rate deadline for advancing the UI, independent of how often the
/// window asks to be redrawn.
struct FramePacer {
    frame_time: Duration,
    next: Instant,
}

impl FramePacer {
    fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            next: now,
        }
    }

    fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.frame_time;
        true
    }

    fn deadline(&self) -> Instant {
        self.next
    }
}
