use crate::engine::geometry::{
    COMIC_COUNT, DOT_SIZE, DOT_SPACING, LAMP_ARM, LAMP_BASE, LAMP_HEAD, LIGHT_ALPHA, LIGHT_CONE,
    NAIL_BUNNY, WINDOW_HEIGHT, WINDOW_WIDTH, comic,
};
use crate::engine::palette;
use crate::types::{DrawOp, Point, Rect};

use super::Draw;

/// Blood-red specks covering the floor of both rooms.
pub struct DotGrid;

impl Draw for DotGrid {
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        for x in (0..WINDOW_WIDTH).step_by(DOT_SPACING as usize) {
            for y in (0..WINDOW_HEIGHT).step_by(DOT_SPACING as usize) {
                ops.push(DrawOp::FillRect {
                    rect: Rect::new(x, y, DOT_SIZE, DOT_SIZE),
                    color: palette::BLOOD_RED,
                });
            }
        }
    }
}

/// Comics scattered across the studio desk, each with two lines of "text".
pub struct Comics;

impl Draw for Comics {
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        for i in 0..COMIC_COUNT {
            let rect = comic(i);
            ops.push(DrawOp::FillRect {
                rect,
                color: palette::PAPER_WHITE,
            });
            for dy in [5, 10] {
                ops.push(DrawOp::Line {
                    from: Point::new(rect.x + 2, rect.y + dy),
                    to: Point::new(rect.x + 18, rect.y + dy),
                    color: palette::BLACK,
                    width: 1,
                });
            }
        }
    }
}

pub struct NailBunny;

impl Draw for NailBunny {
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        ops.push(DrawOp::FillRect {
            rect: NAIL_BUNNY,
            color: palette::DARK_GRAY,
        });
        // the nail through its chest
        let cx = NAIL_BUNNY.center().x;
        ops.push(DrawOp::Line {
            from: Point::new(cx, NAIL_BUNNY.y + 20),
            to: Point::new(cx, NAIL_BUNNY.y + 35),
            color: palette::PAPER_WHITE,
            width: 3,
        });
    }
}

/// Desk lamp and its light cone. The lamp is always on.
pub struct Lamp;

impl Draw for Lamp {
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        ops.push(DrawOp::FillRect {
            rect: LAMP_BASE,
            color: palette::DARK_GRAY,
        });
        ops.push(DrawOp::Line {
            from: LAMP_ARM.0,
            to: LAMP_ARM.1,
            color: palette::DARK_GRAY,
            width: 3,
        });
        ops.push(DrawOp::FillRect {
            rect: LAMP_HEAD,
            color: palette::DARK_GRAY,
        });
        ops.push(DrawOp::Triangle {
            points: LIGHT_CONE,
            color: palette::LAMP_LIGHT,
            alpha: LIGHT_ALPHA,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_grid_covers_window_every_64px() {
        let mut ops = Vec::new();
        DotGrid.draw(&mut ops);
        // 13 columns (0..800 step 64) by 10 rows (0..600 step 64)
        assert_eq!(ops.len(), 13 * 10);
        assert_eq!(
            ops[1],
            DrawOp::FillRect {
                rect: Rect::new(0, 64, 2, 2),
                color: palette::BLOOD_RED
            }
        );
    }

    #[test]
    fn comics_alternate_height() {
        let mut ops = Vec::new();
        Comics.draw(&mut ops);
        assert_eq!(ops.len(), 8 * 3);
        assert_eq!(comic(0), Rect::new(320, 60, 20, 25));
        assert_eq!(comic(1), Rect::new(350, 80, 20, 25));
    }

    #[test]
    fn light_cone_is_drawn_after_lamp_head() {
        let mut ops = Vec::new();
        Lamp.draw(&mut ops);
        assert!(matches!(ops.last(), Some(DrawOp::Triangle { alpha: 30, .. })));
        assert_eq!(LIGHT_CONE[0], Point::new(425, 55));
        assert_eq!(LIGHT_CONE[2], Point::new(525, 255));
    }
}
