//! Fixed world geometry. Every collidable and decorative shape in both rooms
//! is a constant here; nothing is loaded or generated at runtime.

use crate::types::{Point, Rect};

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const TILE_SIZE: i32 = 32;
pub const PLAYER_SPEED: i32 = 5;
pub const WALL_THICKNESS: i32 = 20;

pub const FRAMES_PER_SECOND: u32 = 60;

// walls and door gaps sit on the thirds of the window
const LEFT_X: i32 = WINDOW_WIDTH / 3;
const RIGHT_X: i32 = 2 * WINDOW_WIDTH / 3;
const DOOR_Y: i32 = WINDOW_HEIGHT / 2 - 50;
const DOOR_HEIGHT: i32 = 100;

pub const LEFT_WALL: Rect = Rect::new(LEFT_X, 0, WALL_THICKNESS, WINDOW_HEIGHT);
pub const RIGHT_WALL: Rect = Rect::new(RIGHT_X, 0, WALL_THICKNESS, WINDOW_HEIGHT);
pub const DOOR_GAP: Rect = Rect::new(LEFT_X, DOOR_Y, WALL_THICKNESS, DOOR_HEIGHT);
pub const RIGHT_DOOR_GAP: Rect = Rect::new(RIGHT_X, DOOR_Y, WALL_THICKNESS, DOOR_HEIGHT);
pub const DESK: Rect = Rect::new(WINDOW_WIDTH / 2 - 100, 50, 200, 80);

pub const PLAYER_WIDTH: i32 = TILE_SIZE;
pub const PLAYER_HEIGHT: i32 = TILE_SIZE * 2;
pub const PLAYER_SPAWN: Point = Point::new(WINDOW_WIDTH - 100, WINDOW_HEIGHT - 100);

/// Player x after walking from the Studio into the Hallway.
pub const HALLWAY_ENTRY_X: i32 = LEFT_X + WALL_THICKNESS + 10;
/// Player x after walking from the Hallway back into the Studio.
pub const STUDIO_ENTRY_X: i32 = LEFT_X - PLAYER_WIDTH - 10;

pub const NAIL_BUNNY: Rect = Rect::new(WINDOW_WIDTH - 100, 200, 40, 60);

pub const COMIC_COUNT: i32 = 8;

/// The i-th comic scattered around the desk.
pub const fn comic(i: i32) -> Rect {
    Rect::new(WINDOW_WIDTH / 2 - 80 + i * 30, 60 + (i % 2) * 20, 20, 25)
}

pub const LAMP_BASE: Rect = Rect::new(WINDOW_WIDTH / 2 + 80, 40, 20, 10);
pub const LAMP_ARM: (Point, Point) = (
    Point::new(WINDOW_WIDTH / 2 + 90, 40),
    Point::new(WINDOW_WIDTH / 2 + 120, 60),
);
pub const LAMP_HEAD: Rect = Rect::new(WINDOW_WIDTH / 2 + 110, 55, 30, 15);
pub const LIGHT_CONE: [Point; 3] = [
    Point::new(LAMP_HEAD.x - 85, LAMP_HEAD.y),
    Point::new(LAMP_HEAD.x - 85 + 200, LAMP_HEAD.y),
    Point::new(LAMP_HEAD.x - 85 + 100, LAMP_HEAD.y + 200),
];
pub const LIGHT_ALPHA: u8 = 30;

pub const DOT_SPACING: i32 = TILE_SIZE * 2;
pub const DOT_SIZE: i32 = 2;

pub const TEXT_BOX: Rect = Rect::new(50, WINDOW_HEIGHT - 120, WINDOW_WIDTH - 100, 80);
pub const TEXT_BOX_BORDER: i32 = 2;
pub const TEXT_PADDING: i32 = 10;
pub const TEXT_LINE_SPACING: i32 = 30;

pub const INTERACT_DISTANCE: i32 = 50;
pub const MESSAGE_FRAMES: u32 = 60;

pub const DESK_MESSAGE: &str = "WORSHIP MY PORES! HOW DARE YOU LOOK AT MY LEG YOU CLOWN?!";
pub const NAIL_BUNNY_MESSAGE: &str =
    "You bought me at the pet store, fed me once and nailed me to this wall, 3 YEARS AGO.";
