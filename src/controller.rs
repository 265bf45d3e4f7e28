//! Per-frame glue between input, the listing and the navigator.
//!
//! [`UiState`] is a plain value advanced by pure transitions ([`UiState::step`]
//! and [`UiState::hover`]). [`Controller`] owns the effectful parts (line
//! buffer, navigator, launcher) and applies what the transitions ask for.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    command::{CommandState, Mode},
    config::{self, colors},
    error::BrowseError,
    filetype::FileKind,
    launcher::Launcher,
    line_buffer::{Layout, LineBuffer},
    navigation::{self, Navigator},
    surface::{DisplaySurface, Point, TextMeasure},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    ToggleCommand,
    Escape,
    Paste(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Option<Point>,
    /// The primary button went down this frame (edge, not level).
    pub primary_pressed: bool,
    /// Wheel units; positive scrolls toward the top.
    pub wheel: f32,
    pub keys: Vec<KeyInput>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub text: String,
    pub expires_at: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub command: CommandState,
    pub selected: Option<usize>,
    pub frame: u64,
    pub status: Option<Status>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    pub scroll: f32,
    pub command_changed: bool,
}

impl UiState {
    pub fn mode(&self) -> Mode {
        self.command.mode()
    }

    /// Scrolling only happens while browsing.
    pub fn step(mut self, input: &FrameInput) -> (Self, FrameOutcome) {
        self.frame += 1;
        if self
            .status
            .as_ref()
            .is_some_and(|s| self.frame >= s.expires_at)
        {
            self.status = None;
        }

        let mut out = FrameOutcome::default();
        for key in &input.keys {
            let changed = match key {
                KeyInput::ToggleCommand => {
                    self.command.toggle();
                    true
                }
                KeyInput::Escape if self.command.is_active() => {
                    self.command.toggle();
                    true
                }
                _ if !self.command.is_active() => false,
                KeyInput::Char(ch) => self.command.push_char(*ch),
                KeyInput::Paste(text) => self.command.push_str(text),
                KeyInput::Backspace => self.command.backspace(),
                KeyInput::Escape => false,
            };
            out.command_changed |= changed;
        }

        if !self.command.is_active() {
            out.scroll = input.wheel;
        }
        (self, out)
    }

    /// Records the hovered line and returns the line to activate, if the
    /// button went down over one. Nothing is hovered in command mode.
    pub fn hover(mut self, hovered: Option<usize>, pressed: bool) -> (Self, Option<usize>) {
        self.selected = if self.command.is_active() { None } else { hovered };
        let activate = if pressed { self.selected } else { None };
        (self, activate)
    }

    pub fn caret_visible(&self) -> bool {
        (self.frame / config::CARET_BLINK_FRAMES) % 2 == 0
    }

    pub fn with_status(mut self, text: impl Into<String>) -> Self {
        self.status = Some(Status {
            text: text.into(),
            expires_at: self.frame + config::STATUS_FRAMES,
        });
        self
    }
}

pub struct Controller<L: Launcher> {
    ui: UiState,
    buffer: LineBuffer,
    nav: Navigator,
    launcher: L,
}

impl<L: Launcher> Controller<L> {
    pub fn new(nav: Navigator, launcher: L, width: u32, height: u32) -> Result<Self, BrowseError> {
        let mut buffer = LineBuffer::new(Layout::default(), width, height);
        buffer.set_buffer(nav.listing()?);
        Ok(Self {
            ui: UiState::default(),
            buffer,
            nav,
            launcher,
        })
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.buffer.set_viewport(width, height);
    }

    pub fn frame<M>(&mut self, input: &FrameInput, measure: &M)
    where
        M: TextMeasure + ?Sized,
    {
        self.launcher.reap();
        let (ui, out) = std::mem::take(&mut self.ui).step(input);
        if out.scroll != 0.0 {
            self.buffer.set_scroll_move(out.scroll);
        }
        if out.command_changed {
            self.buffer.set_command_text(ui.command.text());
        }

        let hovered = input
            .pointer
            .and_then(|p| self.buffer.hit_test(p, measure));
        let (ui, activate) = ui.hover(hovered, input.primary_pressed);
        self.ui = ui;

        self.buffer.restore_line_colors();
        if let Some(i) = self.ui.selected {
            let _ = self.buffer.set_line_color(i, colors::HIGHLIGHT);
        }

        if let Some(i) = activate {
            if let Err(err) = self.activate(i) {
                log::warn!("{err}");
                self.ui = std::mem::take(&mut self.ui).with_status(err.to_string());
            }
        }
        self.sync_status();
    }

    /// On error nothing changes.
    pub fn activate(&mut self, index: usize) -> Result<(), BrowseError> {
        let Some(line) = self.buffer.lines().get(index) else {
            return Ok(());
        };
        let name = line.name.clone();
        let target = self.nav.resolve(&name);

        if navigation::is_dir(&target) {
            let lines = self.nav.enter_dir(Path::new(&name))?;
            self.buffer.set_buffer(lines);
            self.buffer.reset_scroll();
            self.ui.selected = None;
        } else if self.nav.open_file(Path::new(&name), &mut self.launcher)? == FileKind::Exec {
            self.buffer.reset_scroll();
        }
        Ok(())
    }

    fn sync_status(&mut self) {
        let wanted = self.ui.status.as_ref().map(|s| s.text.as_str());
        if self.buffer.status() != wanted {
            match wanted {
                Some(text) => self.buffer.set_status(text),
                None => self.buffer.clear_status(),
            }
        }
    }

    pub fn render<S>(&self, surface: &mut S)
    where
        S: DisplaySurface + ?Sized,
    {
        surface.clear(colors::BACKGROUND);
        self.buffer.render_buffer(surface);
        if self.ui.mode() == Mode::Command {
            self.buffer
                .render_command_overlay(surface, self.ui.caret_visible());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io, path::PathBuf};

    use super::*;
    use crate::test_support::RecordingSurface;

    #[derive(Default)]
    struct Recorder {
        launched: Vec<PathBuf>,
        reaps: usize,
        fail: bool,
    }

    impl Launcher for Recorder {
        fn launch(&mut self, path: &Path) -> io::Result<()> {
            self.launched.push(path.to_path_buf());
            if self.fail {
                Err(io::Error::other("no exec format"))
            } else {
                Ok(())
            }
        }

        fn reap(&mut self) {
            self.reaps += 1;
        }
    }

    fn keys(list: Vec<KeyInput>) -> FrameInput {
        FrameInput {
            keys: list,
            ..FrameInput::default()
        }
    }

    fn point_at(index: usize) -> Option<Point> {
        Some(Point::new(1, index as i32 * config::LINE_HEIGHT + 1))
    }

    fn index_of(ctl: &Controller<Recorder>, name: &str) -> usize {
        ctl.buffer()
            .lines()
            .iter()
            .position(|l| l.text == name)
            .unwrap()
    }

    fn fixture() -> (tempfile::TempDir, Controller<Recorder>) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"").unwrap();
        fs::write(dir.path().join("run.exe"), b"").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let nav = Navigator::new(dir.path()).unwrap();
        let ctl = Controller::new(nav, Recorder::default(), 800, 600).unwrap();
        (dir, ctl)
    }

    #[test]
    fn step_edits_command_text_in_order() {
        let ui = UiState::default();
        let (ui, out) = ui.step(&keys(vec![
            KeyInput::ToggleCommand,
            KeyInput::Char('l'),
            KeyInput::Char('x'),
            KeyInput::Backspace,
            KeyInput::Char('s'),
            KeyInput::Paste(" -a\n".into()),
        ]));
        assert!(out.command_changed);
        assert_eq!(ui.mode(), Mode::Command);
        assert_eq!(ui.command.text(), "ls -a");

        let (ui, _) = ui.step(&keys(vec![KeyInput::Backspace; 3]));
        assert_eq!(ui.command.text(), "ls");

        let (ui, out) = ui.step(&keys(vec![KeyInput::Escape]));
        assert!(out.command_changed);
        assert_eq!(ui.mode(), Mode::Browse);
        assert_eq!(ui.command.text(), "");
    }

    #[test]
    fn typing_while_browsing_is_ignored() {
        let (ui, out) = UiState::default().step(&keys(vec![
            KeyInput::Char('q'),
            KeyInput::Backspace,
            KeyInput::Escape,
        ]));
        assert!(!out.command_changed);
        assert_eq!(ui.command, CommandState::default());
    }

    #[test]
    fn wheel_only_scrolls_while_browsing() {
        let input = FrameInput {
            wheel: -1.5,
            ..FrameInput::default()
        };
        let (ui, out) = UiState::default().step(&input);
        assert_eq!(out.scroll, -1.5);

        let (ui, _) = ui.step(&keys(vec![KeyInput::ToggleCommand]));
        let (_, out) = ui.step(&input);
        assert_eq!(out.scroll, 0.0);
    }

    #[test]
    fn hover_is_cleared_in_command_mode() {
        let (ui, activate) = UiState::default().hover(Some(4), true);
        assert_eq!(ui.selected, Some(4));
        assert_eq!(activate, Some(4));

        let (ui, activate) = ui.hover(Some(4), false);
        assert_eq!(activate, None);

        let (ui, _) = ui.step(&keys(vec![KeyInput::ToggleCommand]));
        let (ui, activate) = ui.hover(Some(4), true);
        assert_eq!(ui.selected, None);
        assert_eq!(activate, None);
    }

    #[test]
    fn status_expires_and_caret_blinks() {
        let ui = UiState::default().with_status("oops");
        let mut ui = ui;
        for _ in 0..config::STATUS_FRAMES - 1 {
            ui = ui.step(&FrameInput::default()).0;
            assert!(ui.status.is_some());
        }
        ui = ui.step(&FrameInput::default()).0;
        assert!(ui.status.is_none());

        let mut ui = UiState::default();
        assert!(ui.caret_visible());
        ui.frame = config::CARET_BLINK_FRAMES;
        assert!(!ui.caret_visible());
        ui.frame = 2 * config::CARET_BLINK_FRAMES;
        assert!(ui.caret_visible());
    }

    #[test]
    fn ui_state_serializes() {
        let (ui, _) = UiState::default().step(&keys(vec![
            KeyInput::ToggleCommand,
            KeyInput::Char('x'),
        ]));
        let ui = ui.with_status("hello");
        let json = serde_json::to_string(&ui).unwrap();
        let back: UiState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ui);
    }

    #[test]
    fn hover_highlights_and_restores() {
        let (_dir, mut ctl) = fixture();
        let surface = RecordingSurface::default();
        let sub = index_of(&ctl, "sub");

        ctl.frame(
            &FrameInput {
                pointer: point_at(sub),
                ..FrameInput::default()
            },
            &surface,
        );
        assert_eq!(ctl.ui().selected, Some(sub));
        assert_eq!(ctl.buffer().lines()[sub].current_color, colors::HIGHLIGHT);

        ctl.frame(&FrameInput::default(), &surface);
        assert_eq!(ctl.ui().selected, None);
        assert_eq!(ctl.buffer().lines()[sub].current_color, colors::DIRECTORY);
    }

    #[test]
    fn clicking_a_directory_enters_it_and_resets_scroll() {
        let (dir, mut ctl) = fixture();
        let surface = RecordingSurface::default();
        let sub = index_of(&ctl, "sub");

        // Scroll down a little, keeping `sub` on screen under the pointer.
        ctl.frame(
            &FrameInput {
                wheel: -0.5,
                ..FrameInput::default()
            },
            &surface,
        );
        assert_eq!(ctl.buffer().scroll_offset(), -10);

        let pointer = Some(Point::new(
            1,
            sub as i32 * config::LINE_HEIGHT + ctl.buffer().scroll_offset() + 1,
        ));
        ctl.frame(
            &FrameInput {
                pointer,
                primary_pressed: true,
                ..FrameInput::default()
            },
            &surface,
        );
        let expected = fs::canonicalize(dir.path().join("sub")).unwrap();
        assert_eq!(ctl.navigator().current_dir(), expected);
        assert_eq!(ctl.buffer().scroll_offset(), 0);
        assert_eq!(ctl.buffer().len(), 3);
    }

    #[test]
    fn exec_launches_once_per_press_edge() {
        let (dir, mut ctl) = fixture();
        let surface = RecordingSurface::default();
        let run = index_of(&ctl, "run.exe");

        let press = FrameInput {
            pointer: point_at(run),
            primary_pressed: true,
            ..FrameInput::default()
        };
        let held = FrameInput {
            pointer: point_at(run),
            ..FrameInput::default()
        };
        ctl.frame(&press, &surface);
        for _ in 0..10 {
            ctl.frame(&held, &surface);
        }
        let expected = fs::canonicalize(dir.path().join("run.exe")).unwrap();
        assert_eq!(ctl.launcher().launched, vec![expected]);
    }

    #[test]
    fn every_frame_reaps_launched_children() {
        let (_dir, mut ctl) = fixture();
        let surface = RecordingSurface::default();
        for _ in 0..3 {
            ctl.frame(&FrameInput::default(), &surface);
        }
        assert_eq!(ctl.launcher().reaps, 3);
    }

    #[test]
    fn clicking_unregistered_or_text_changes_nothing() {
        let (_dir, mut ctl) = fixture();
        let surface = RecordingSurface::default();
        let before = ctl.navigator().current_dir().to_path_buf();
        let a = index_of(&ctl, "a.txt");

        ctl.frame(
            &FrameInput {
                pointer: point_at(a),
                primary_pressed: true,
                ..FrameInput::default()
            },
            &surface,
        );
        assert_eq!(ctl.navigator().current_dir(), before);
        assert!(ctl.launcher().launched.is_empty());
        assert!(ctl.ui().status.is_none());
    }

    #[test]
    fn launch_failure_becomes_a_status_line() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("run.exe"), b"").unwrap();
        let nav = Navigator::new(dir.path()).unwrap();
        let launcher = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut ctl = Controller::new(nav, launcher, 800, 600).unwrap();
        let surface = RecordingSurface::default();
        let run = index_of(&ctl, "run.exe");

        ctl.frame(
            &FrameInput {
                pointer: point_at(run),
                primary_pressed: true,
                ..FrameInput::default()
            },
            &surface,
        );
        let status = ctl.buffer().status().unwrap();
        assert!(status.starts_with("cannot launch"), "{status}");
        assert_eq!(ctl.buffer().lines().len(), 4);
    }

    #[test]
    fn command_overlay_renders_only_in_command_mode() {
        let (_dir, mut ctl) = fixture();
        let mut surface = RecordingSurface::default();
        ctl.render(&mut surface);
        assert!(surface.rects().is_empty());

        let measure = RecordingSurface::default();
        ctl.frame(
            &keys(vec![KeyInput::ToggleCommand, KeyInput::Char('h')]),
            &measure,
        );
        assert_eq!(ctl.buffer().command_text(), "h");

        let mut surface = RecordingSurface::default();
        ctl.render(&mut surface);
        let rects = surface.rects();
        assert_eq!(rects[0].1, colors::OVERLAY_BG);
        assert!(surface.texts().iter().any(|(t, _, _)| t == "h"));
    }
}
