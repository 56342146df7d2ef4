//! Text metrics for the monospace terminal font.
//!
//! Every glyph occupies one terminal cell, which spans `GLYPH_WIDTH` world
//! pixels horizontally.

pub const GLYPH_WIDTH: i32 = 10;

/// Rendered width of `text` in world pixels.
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_WIDTH
}
