use serde::{Deserialize, Serialize};

use crate::types::{DrawOp, Rect};

use super::geometry::{DESK, DOOR_GAP, LEFT_WALL, RIGHT_DOOR_GAP, RIGHT_WALL};
use super::objects::Draw;
use super::palette;

/// Which of the two rooms is currently used for collision and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    Studio,
    Hallway,
}

impl RoomKind {
    pub fn room(self) -> &'static Room {
        match self {
            RoomKind::Studio => &STUDIO,
            RoomKind::Hallway => &HALLWAY,
        }
    }

    /// The room on the other side of any door.
    pub fn other(self) -> RoomKind {
        match self {
            RoomKind::Studio => RoomKind::Hallway,
            RoomKind::Hallway => RoomKind::Studio,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoomKind::Studio => "Studio",
            RoomKind::Hallway => "Hallway",
        }
    }
}

#[derive(Debug)]
pub struct Room {
    pub walls: &'static [Rect],
    pub doors: &'static [Rect],
    pub furniture: &'static [Rect],
}

pub static STUDIO: Room = Room {
    walls: &[LEFT_WALL],
    doors: &[DOOR_GAP],
    furniture: &[DESK],
};

pub static HALLWAY: Room = Room {
    walls: &[RIGHT_WALL, LEFT_WALL],
    doors: &[RIGHT_DOOR_GAP, DOOR_GAP],
    furniture: &[],
};

impl Room {
    pub fn hits_wall(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| rect.overlaps(wall))
    }

    pub fn hits_door(&self, rect: &Rect) -> bool {
        self.doors.iter().any(|door| rect.overlaps(door))
    }

    pub fn hits_furniture(&self, rect: &Rect) -> bool {
        self.furniture.iter().any(|piece| rect.overlaps(piece))
    }
}

impl Draw for Room {
    /// Walls first, then doors painted over them, then furniture.
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        let layers = [
            (self.walls, palette::WALL),
            (self.doors, palette::DOOR),
            (self.furniture, palette::FURNITURE),
        ];
        for (rects, color) in layers {
            for &rect in rects {
                ops.push(DrawOp::FillRect { rect, color });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_toggles() {
        assert_eq!(RoomKind::Studio.other(), RoomKind::Hallway);
        assert_eq!(RoomKind::Hallway.other().other(), RoomKind::Hallway);
    }

    #[test]
    fn studio_draws_walls_doors_then_furniture() {
        let mut ops = Vec::new();
        STUDIO.draw(&mut ops);
        assert_eq!(
            ops,
            vec![
                DrawOp::FillRect { rect: LEFT_WALL, color: palette::WALL },
                DrawOp::FillRect { rect: DOOR_GAP, color: palette::DOOR },
                DrawOp::FillRect { rect: DESK, color: palette::FURNITURE },
            ]
        );
    }

    #[test]
    fn hallway_has_no_furniture() {
        let mut ops = Vec::new();
        HALLWAY.draw(&mut ops);
        assert_eq!(ops.len(), 4);
        assert!(!HALLWAY.hits_furniture(&DESK));
    }
}
