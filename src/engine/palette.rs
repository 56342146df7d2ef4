use crate::types::Color;

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const DARK_GRAY: Color = Color::rgb(20, 20, 20);
pub const BLOOD_RED: Color = Color::rgb(139, 0, 0);
pub const WOOD_BROWN: Color = Color::rgb(139, 69, 19);
pub const PAPER_WHITE: Color = Color::rgb(250, 250, 250);
pub const LAMP_LIGHT: Color = Color::rgb(255, 255, 100);

pub const WALL: Color = DARK_GRAY;
pub const DOOR: Color = BLACK;
pub const FURNITURE: Color = WOOD_BROWN;
