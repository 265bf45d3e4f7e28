//! Accumulates window events between frames into one [`FrameInput`].

use crate::{
    controller::{FrameInput, KeyInput},
    surface::Point,
};

#[derive(Debug, Default)]
pub struct InputCollector {
    pointer: Option<Point>,
    button_down: bool,
    pressed_edge: bool,
    wheel: f32,
    keys: Vec<KeyInput>,
}

impl InputCollector {
    pub fn pointer_moved(&mut self, pos: Point) {
        self.pointer = Some(pos);
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Only an up-to-down transition counts as a press.
    pub fn primary_button(&mut self, down: bool) {
        if down && !self.button_down {
            self.pressed_edge = true;
        }
        self.button_down = down;
    }

    pub fn wheel(&mut self, delta: f32) {
        self.wheel += delta;
    }

    pub fn key(&mut self, key: KeyInput) {
        self.keys.push(key);
    }

    /// Drains everything except the pointer position and button level, which
    /// persist until the next event says otherwise.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            primary_pressed: std::mem::take(&mut self.pressed_edge),
            wheel: std::mem::take(&mut self.wheel),
            keys: std::mem::take(&mut self.keys),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_reported_once() {
        let mut input = InputCollector::default();
        input.primary_button(true);
        assert!(input.take_frame().primary_pressed);
        input.primary_button(true);
        assert!(!input.take_frame().primary_pressed);
        assert!(!input.take_frame().primary_pressed);

        input.primary_button(false);
        input.primary_button(true);
        assert!(input.take_frame().primary_pressed);
    }

    #[test]
    fn pointer_persists_and_wheel_drains() {
        let mut input = InputCollector::default();
        input.pointer_moved(Point::new(3, 4));
        input.wheel(1.0);
        input.wheel(0.5);
        input.key(KeyInput::Char('a'));

        let frame = input.take_frame();
        assert_eq!(frame.pointer, Some(Point::new(3, 4)));
        assert_eq!(frame.wheel, 1.5);
        assert_eq!(frame.keys, vec![KeyInput::Char('a')]);

        let frame = input.take_frame();
        assert_eq!(frame.pointer, Some(Point::new(3, 4)));
        assert_eq!(frame.wheel, 0.0);
        assert!(frame.keys.is_empty());

        input.pointer_left();
        assert_eq!(input.take_frame().pointer, None);
    }
}
