//! Renderer — the deterministic rasterizer.
//!
//! Takes a `ResolvedScene` (in-memory, from the engine) and produces a grid
//! of terminal cells, plus cell-level diffs between consecutive grids.
//!
//! The renderer is pure and stateless. Given the same input, it always
//! produces the same output. It knows nothing about rooms, players, or time.

pub mod canvas;

use crate::types::{Cell, CellChange, Color, DrawOp, Frame, ResolvedScene, Style};
use canvas::{Canvas, PIXEL_SIZE};

/// Glyph showing the top canvas pixel as foreground over the bottom one.
const UPPER_HALF: char = '▀';

/// World pixels covered by one terminal row (two canvas pixels).
pub const CELL_HEIGHT: i32 = PIXEL_SIZE * 2;
pub const CELL_WIDTH: i32 = PIXEL_SIZE;

pub type Grid = Vec<Vec<Cell>>;

/// Cell row for text whose top edge sits at world `y`. Rounds to the nearest
/// row so a line starting just under a border lands below it.
fn text_row(y: i32) -> usize {
    ((y + CELL_HEIGHT / 2) / CELL_HEIGHT) as usize
}

pub struct Renderer;

impl Renderer {
    /// Grid size in cells for a scene of the given world size.
    pub fn grid_size(world_width: i32, world_height: i32) -> (u16, u16) {
        (
            (world_width / CELL_WIDTH).max(0) as u16,
            (world_height / CELL_HEIGHT).max(0) as u16,
        )
    }

    /// Rasterize a resolved scene onto a fixed-size cell grid.
    ///
    /// Pixel ops are painted in order onto a canvas, which is then folded two
    /// rows per cell. Text is laid over the folded cells afterwards.
    pub fn rasterize(scene: &ResolvedScene) -> Grid {
        let mut canvas = Canvas::for_world(scene.width, scene.height, Color::rgb(0, 0, 0));
        let mut texts = Vec::new();

        for op in &scene.ops {
            match op {
                DrawOp::FillRect { rect, color } => canvas.fill_rect(rect, *color),
                DrawOp::StrokeRect {
                    rect,
                    color,
                    thickness,
                } => canvas.stroke_rect(rect, *color, *thickness),
                DrawOp::Line {
                    from, to, color, ..
                } => canvas.line(*from, *to, *color),
                DrawOp::Triangle {
                    points,
                    color,
                    alpha,
                } => canvas.triangle(points, *color, *alpha),
                DrawOp::Text { at, text, color } => texts.push((*at, text, *color)),
            }
        }

        let mut grid = Self::fold(&canvas);
        for (at, text, color) in texts {
            if at.y < 0 {
                continue;
            }
            let row = text_row(at.y);
            let Some(cells) = grid.get_mut(row) else {
                continue;
            };
            let col0 = at.x.div_euclid(CELL_WIDTH);
            for (i, ch) in text.chars().enumerate() {
                let col = col0 + i as i32;
                if col < 0 {
                    continue;
                }
                let Some(cell) = cells.get_mut(col as usize) else {
                    break;
                };
                let bg = canvas.get(col as usize, row * 2);
                *cell = Cell {
                    ch,
                    style: Style {
                        fg: Some(color),
                        bg,
                        bold: false,
                    },
                };
            }
        }
        grid
    }

    fn fold(canvas: &Canvas) -> Grid {
        let rows = canvas.height() / 2;
        (0..rows)
            .map(|row| {
                (0..canvas.width())
                    .map(|x| {
                        let top = canvas.get(x, row * 2);
                        let bottom = canvas.get(x, row * 2 + 1);
                        if top == bottom {
                            Cell {
                                ch: ' ',
                                style: Style {
                                    bg: bottom,
                                    ..Default::default()
                                },
                            }
                        } else {
                            Cell {
                                ch: UPPER_HALF,
                                style: Style {
                                    fg: top,
                                    bg: bottom,
                                    bold: false,
                                },
                            }
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// The frame to send given the previously shown grid, if any.
    ///
    /// The first frame is always a full frame. Subsequent frames are diffs
    /// against the previous one.
    pub fn frame(prev: Option<&Grid>, next: &Grid) -> Frame {
        match prev {
            Some(prev) if prev.len() == next.len() => Frame::Diff {
                changes: Self::diff(prev, next),
            },
            _ => Frame::Full {
                cells: next.clone(),
            },
        }
    }

    /// Compute a cell-level diff between two grids.
    pub fn diff(prev: &[Vec<Cell>], next: &[Vec<Cell>]) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for (y, (prev_row, next_row)) in prev.iter().zip(next.iter()).enumerate() {
            for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row.iter()).enumerate() {
                if prev_cell != next_cell {
                    changes.push(CellChange {
                        x: x as u16,
                        y: y as u16,
                        cell: next_cell.clone(),
                    });
                }
            }
        }
        changes
    }
}
