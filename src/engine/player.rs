//! The player-controlled rectangle: movement with collision against the
//! active room, and the door crossing that switches rooms.

use tracing::{info, trace};

use crate::types::{DrawOp, Point, Rect};

use super::geometry::{
    HALLWAY_ENTRY_X, PLAYER_HEIGHT, PLAYER_SPAWN, PLAYER_SPEED, PLAYER_WIDTH, STUDIO_ENTRY_X,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
use super::objects::Draw;
use super::palette;
use super::room::RoomKind;

/// What a single `move_by` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// A wall or a piece of furniture was in the way; position unchanged.
    Blocked,
    /// A door was crossed and the player now stands in the given room.
    Entered(RoomKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            x: PLAYER_SPAWN.x,
            y: PLAYER_SPAWN.y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    pub fn at(x: i32, y: i32) -> Self {
        Player {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move by `(dx, dy)` inside `room`.
    ///
    /// A door overlap always wins: the room flips, x snaps to the entry point
    /// of the new room and y stays where it was, even if the same step would
    /// also have hit furniture. Otherwise any wall or furniture overlap
    /// rejects the whole step, and a free step is clamped to the window.
    pub fn move_by(&mut self, dx: i32, dy: i32, room: &mut RoomKind) -> MoveOutcome {
        let candidate = Rect::new(self.x + dx, self.y + dy, self.width, self.height);
        let layout = room.room();

        let furniture_hit = layout.hits_furniture(&candidate);

        if layout.hits_door(&candidate) {
            let from = *room;
            *room = from.other();
            self.x = match *room {
                RoomKind::Hallway => HALLWAY_ENTRY_X,
                RoomKind::Studio => STUDIO_ENTRY_X,
            };
            info!(from = from.name(), to = room.name(), x = self.x, "entered room");
            return MoveOutcome::Entered(*room);
        }

        if furniture_hit || layout.hits_wall(&candidate) {
            trace!(x = candidate.x, y = candidate.y, furniture_hit, "move blocked");
            return MoveOutcome::Blocked;
        }

        self.x = candidate.x.clamp(0, WINDOW_WIDTH - self.width);
        self.y = candidate.y.clamp(0, WINDOW_HEIGHT - self.height);
        MoveOutcome::Moved
    }
}

impl Draw for Player {
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        let color = palette::DARK_GRAY;
        // torso
        ops.push(DrawOp::FillRect { rect: self.rect(), color });
        // head
        ops.push(DrawOp::FillRect {
            rect: Rect::new(self.x - 4, self.y - 10, self.width + 8, self.height / 2),
            color,
        });
        // spiky hair
        for i in 0..5 {
            ops.push(DrawOp::Line {
                from: Point::new(self.x + i * 8, self.y - 10),
                to: Point::new(self.x + 4 + i * 8, self.y - 20),
                color,
                width: 2,
            });
        }
    }
}
