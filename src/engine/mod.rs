//! Engine — the game simulation.
//!
//! Consumes one `FrameInput` per frame and exposes the current frame as a
//! `ResolvedScene` (concrete draw instructions).
//!
//! The engine owns all game state: the player, the active room and the
//! message on screen. It never deals with terminals, key codes, or grids.

pub mod geometry;
pub mod interaction;
pub mod objects;
pub mod palette;
pub mod player;
pub mod room;

use tracing::info;

use crate::types::{DrawOp, Rect, ResolvedScene};
use geometry::{WINDOW_HEIGHT, WINDOW_WIDTH};
use interaction::Interaction;
use objects::{Comics, DotGrid, Draw, Lamp, NailBunny, TextBox};
use player::{MoveOutcome, Player};
use room::RoomKind;

/// Everything the engine needs to know about the player's input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    /// The interact key went down during this frame.
    pub interact: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl FrameInput {
    /// Per-axis velocity. Opposing keys cancel out.
    pub fn velocity(&self, speed: i32) -> (i32, i32) {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) * speed;
        (axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Terminated,
}

#[derive(Debug)]
pub struct Game {
    player: Player,
    room: RoomKind,
    interaction: Interaction,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            player: Player::default(),
            room: RoomKind::Studio,
            interaction: Interaction::default(),
            state: GameState::Running,
        }
    }

    /// Start from an arbitrary position, mostly useful for tests and demos.
    pub fn with_player(player: Player, room: RoomKind) -> Self {
        Game {
            player,
            room,
            ..Self::new()
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn room(&self) -> RoomKind {
        self.room
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Advance the simulation by one frame: quit, interaction, movement.
    ///
    /// Returns the movement outcome, or `None` once the game has terminated.
    pub fn step(&mut self, input: &FrameInput) -> Option<MoveOutcome> {
        if self.state == GameState::Terminated {
            return None;
        }
        if input.quit {
            info!("quit requested");
            self.state = GameState::Terminated;
            return None;
        }

        if input.interact {
            if let Some(target) = interaction::find_target(self.player.position(), self.room) {
                self.interaction.trigger(target);
            }
        }

        let (dx, dy) = input.velocity(self.player.speed);
        Some(self.player.move_by(dx, dy, &mut self.room))
    }

    /// Count down the message timer. Called once per frame after drawing.
    pub fn tick(&mut self) {
        self.interaction.tick();
    }

    /// Describe the current frame.
    pub fn resolve(&self) -> ResolvedScene {
        let mut ops = Vec::new();

        ops.push(DrawOp::FillRect {
            rect: Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT),
            color: palette::BLACK,
        });
        DotGrid.draw(&mut ops);
        self.room.room().draw(&mut ops);
        if self.room == RoomKind::Studio {
            Comics.draw(&mut ops);
            NailBunny.draw(&mut ops);
        }
        Lamp.draw(&mut ops);
        self.player.draw(&mut ops);
        if self.interaction.is_visible() {
            TextBox {
                message: self.interaction.message(),
            }
            .draw(&mut ops);
        }

        ResolvedScene {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            ops,
        }
    }
}
