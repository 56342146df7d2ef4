//! Turns the terminal's key events into one `FrameInput` per frame.
//!
//! Terminals report key presses, not key state. When the terminal supports
//! keyboard enhancement we also get releases and a direction is held from
//! press to release. Otherwise every press (or auto-repeat) holds the
//! direction for a fixed number of frames.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{GameConfig, KeyBindings, matches_binding};
use crate::engine::FrameInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    fn binding(self, bindings: &KeyBindings) -> &str {
        match self {
            Direction::Left => &bindings.left,
            Direction::Right => &bindings.right,
            Direction::Up => &bindings.up,
            Direction::Down => &bindings.down,
        }
    }
}

pub struct InputState {
    bindings: KeyBindings,
    hold_frames: u32,
    release_events: bool,
    /// Frames left for each direction, indexed like `Direction::ALL`.
    held: [u32; 4],
    interact: bool,
    quit: bool,
}

impl InputState {
    pub fn new(config: &GameConfig, release_events: bool) -> Self {
        InputState {
            bindings: config.key_bindings.clone(),
            hold_frames: config.hold_frames.max(1),
            release_events,
            held: [0; 4],
            interact: false,
            quit: false,
        }
    }

    pub fn handle(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::FocusLost => self.held = [0; 4],
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let pressed = key.kind == KeyEventKind::Press;

        if pressed
            && (matches_binding(&self.bindings.quit, key)
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
        {
            self.quit = true;
            return;
        }
        if pressed && matches_binding(&self.bindings.interact, key) {
            self.interact = true;
            return;
        }

        for (i, dir) in Direction::ALL.iter().enumerate() {
            if matches_binding(dir.binding(&self.bindings), key) {
                self.held[i] = match key.kind {
                    KeyEventKind::Release => 0,
                    _ if self.release_events => u32::MAX,
                    _ => self.hold_frames,
                };
            }
        }
    }

    /// Input for the frame about to run. One-shot presses are consumed.
    pub fn sample(&mut self) -> FrameInput {
        let [left, right, up, down] = self.held.map(|frames| frames > 0);
        if !self.release_events {
            for frames in &mut self.held {
                *frames = frames.saturating_sub(1);
            }
        }
        FrameInput {
            quit: self.quit,
            interact: std::mem::take(&mut self.interact),
            left,
            right,
            up,
            down,
        }
    }
}
