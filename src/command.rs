//! Command-entry mode. The text is captured and shown but never executed.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Browse,
    Command,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandState {
    active: bool,
    text: String,
}

impl CommandState {
    pub fn mode(&self) -> Mode {
        if self.active {
            Mode::Command
        } else {
            Mode::Browse
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flips the mode. Both directions start from an empty buffer.
    pub fn toggle(&mut self) {
        self.active = !self.active;
        self.text.clear();
    }

    /// Accepts printable ASCII only. Returns whether the text changed.
    pub fn push_char(&mut self, ch: char) -> bool {
        if !is_printable(ch) {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub fn push_str(&mut self, s: &str) -> bool {
        let before = self.text.len();
        self.text.extend(s.chars().filter(|&c| is_printable(c)));
        self.text.len() != before
    }

    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

fn is_printable(ch: char) -> bool {
    matches!(ch, ' '..='~')
}
