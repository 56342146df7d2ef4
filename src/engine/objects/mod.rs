//! Drawable objects and their draw implementations.
//!
//! Rooms and the player implement `Draw` next to their logic; the purely
//! decorative props and the message box live here.

pub mod font;
mod props;
mod text_box;

pub use props::{Comics, DotGrid, Lamp, NailBunny};
pub use text_box::{TextBox, wrap_words};

use crate::types::DrawOp;

/// Append the draw instructions for an object, in painting order.
pub trait Draw {
    fn draw(&self, ops: &mut Vec<DrawOp>);
}
