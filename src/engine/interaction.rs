//! Proximity checks and the timed flavor-text message they trigger.

use tracing::info;

use crate::types::{Point, Rect};

use super::geometry::{
    DESK, DESK_MESSAGE, INTERACT_DISTANCE, MESSAGE_FRAMES, NAIL_BUNNY, NAIL_BUNNY_MESSAGE,
};
use super::room::RoomKind;

/// True iff both axis distances from `from` to the center of `target` are
/// strictly below `threshold`.
pub fn is_near(from: Point, target: &Rect, threshold: i32) -> bool {
    let center = target.center();
    (from.x - center.x).abs() < threshold && (from.y - center.y).abs() < threshold
}

/// Something the player can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Desk,
    NailBunny,
}

impl Target {
    pub fn message(self) -> &'static str {
        match self {
            Target::Desk => DESK_MESSAGE,
            Target::NailBunny => NAIL_BUNNY_MESSAGE,
        }
    }
}

/// Pick the object an interact press at `from` refers to, if any.
///
/// The desk is checked first and in every room; Nail-Bunny only hangs in the
/// Studio.
pub fn find_target(from: Point, room: RoomKind) -> Option<Target> {
    if is_near(from, &DESK, INTERACT_DISTANCE) {
        Some(Target::Desk)
    } else if room == RoomKind::Studio && is_near(from, &NAIL_BUNNY, INTERACT_DISTANCE) {
        Some(Target::NailBunny)
    } else {
        None
    }
}

/// The on-screen message and how many more frames it stays up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    message: String,
    remaining_frames: u32,
}

impl Interaction {
    /// Replace whatever is showing with `target`'s line and restart the timer.
    pub fn trigger(&mut self, target: Target) {
        info!(?target, "interaction");
        self.message = target.message().to_string();
        self.remaining_frames = MESSAGE_FRAMES;
    }

    pub fn tick(&mut self) {
        self.remaining_frames = self.remaining_frames.saturating_sub(1);
    }

    pub fn is_visible(&self) -> bool {
        self.remaining_frames > 0
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn remaining_frames(&self) -> u32 {
        self.remaining_frames
    }
}
